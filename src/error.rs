use compact_str::CompactString;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("Key {0:?} not found")]
    NotFound(CompactString),
}

pub type Result<T> = ::core::result::Result<T, Error>;
