//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::{EntityId, EntityKind};

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Entity not found
    #[error("{kind} not found: #{id}")]
    NotFound { kind: EntityKind, id: EntityId },

    /// Validation error (rejected draft)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Entity still referenced by another entity
    #[error("{kind} #{id} is still used by {used_by}")]
    InUse {
        kind: EntityKind,
        id: EntityId,
        used_by: EntityKind,
    },

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::ValidationError(_) | Self::InUse { .. } => true,
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }

    /// 便捷构造：未找到
    #[must_use]
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        Self::NotFound { kind, id }
    }

    /// 便捷构造：校验失败
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
