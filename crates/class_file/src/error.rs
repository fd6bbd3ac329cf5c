use std::fmt;

use thiserror::Error;

use crate::constant_pool;

#[derive(Error, Debug, PartialEq)]
pub enum ClassFileError {
    #[error("Truncated input at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    #[error("Invalid magic number: {0:02X?}")]
    BadMagicNumber([u8; 4]),
    #[error("Invalid major version: {0}")]
    UnsupportedVersion(u16),
    #[error("Invalid cp info tag {tag} at offset {offset}")]
    UnknownConstantTag { tag: u8, offset: usize },
    #[error("Invalid UTF-8 in constant pool string at offset {offset}")]
    InvalidUtf8 { offset: usize },
    #[error("Unsupported {feature}: table declares {count} entries")]
    Unsupported { feature: Feature, count: u16 },
    #[error("Finished decoding after {consumed} of {length} bytes")]
    TrailingOrMissingBytes { consumed: usize, length: usize },
    #[error("Expected a {expected} byte span, found {found} bytes")]
    WidthMismatch { expected: usize, found: usize },
    #[error("Constant pool index {index} is outside of a pool with count {count}")]
    InvalidReference { index: u16, count: u16 },
    #[error("Expected {0}, found {1:?}")]
    UnexpectedConstantPoolEntry(&'static str, constant_pool::CpInfo),
}

/// Class file tables the decoder refuses to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Interfaces,
    Fields,
}
impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Interfaces => f.write_str("interfaces"),
            Feature::Fields => f.write_str("fields"),
        }
    }
}
