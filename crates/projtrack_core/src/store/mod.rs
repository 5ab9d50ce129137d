//! Storage primitives: path layout, record codec, and the store error type.
//!
//! # Responsibility
//! - Map entity identity to canonical filesystem paths.
//! - Encode/decode the line-oriented text record format.
//!
//! # Invariants
//! - Layout mapping is pure and injective over entity ids.
//! - The serialized byte format is fixed; compatibility with existing
//!   stores takes precedence over format robustness.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

use crate::model::EntityValidationError;

pub mod codec;
pub mod layout;

pub use codec::CodecError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surface for all store read/write operations.
#[derive(Debug)]
pub enum StoreError {
    /// Entity failed record-format validation before a write.
    Validation(EntityValidationError),
    /// An expected file or directory is missing. Enumeration paths treat
    /// this as "nothing here" rather than surfacing it.
    NotFound(PathBuf),
    /// A record file exists but could not be decoded.
    Malformed { path: PathBuf, source: CodecError },
    /// The filesystem rejected an operation (permissions, disk full, ...).
    Io { path: PathBuf, source: io::Error },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(path) => write!(f, "not found: {}", path.display()),
            Self::Malformed { path, source } => {
                write!(f, "malformed record {}: {source}", path.display())
            }
            Self::Io { path, source } => write!(f, "io error on {}: {source}", path.display()),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Malformed { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<EntityValidationError> for StoreError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}
