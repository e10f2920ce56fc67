//! Storage layer and service contract trait definitions

mod crud_service;
mod repository;

pub use crud_service::CrudService;
pub use repository::{InMemoryRepository, Repository};
