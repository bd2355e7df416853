//! Error types for the configurator core.
//!
//! Composition itself never fails. Errors only come from addressing state
//! that does not exist: an entry index past the end of a list, or a list,
//! key, toggle or variant name that does not parse.

use thiserror::Error;

use crate::enumeration::ListName;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of range for the {list} list ({len} entries)")]
    IndexOutOfRange {
        list: ListName,
        index: usize,
        len: usize,
    },

    #[error("unknown enumeration list: {0}")]
    UnknownList(String),

    #[error("unknown {list} key: {key}")]
    UnknownKey { list: ListName, key: String },

    #[error("unknown toggle: {0}")]
    UnknownToggle(String),

    #[error("unknown variant: {0}")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
