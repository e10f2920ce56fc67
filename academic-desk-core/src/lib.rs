//! Academic Desk Core Library
//!
//! Provides the business services consumed by the terminal front-end:
//! - Tasks (to-do list with due dates)
//! - Classes
//! - Assessments (per class and term)
//! - Lesson plans
//! - Question bank
//! - Proofs (tests assembled from the question bank)
//!
//! Every entity kind is exposed through the same narrow [`CrudService`] contract,
//! persistence is abstracted through the [`Repository`] trait so the platform
//! layer decides where data lives.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ServiceContext, ServiceHandle, Services};
pub use traits::{CrudService, InMemoryRepository, Repository};
pub use types::{EntityId, EntityKind, Record};
