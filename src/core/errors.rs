use thiserror::Error;

/// Fatal decode conditions.
///
/// There is no partial or recoverable decode: once any of these is returned
/// the remaining bytes cannot be re-synchronized, so the caller must discard
/// the package state and request a fresh full transfer.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Type tag not in the closed monitoring-object registry.
    #[error("unknown monitor object type tag `{0}`")]
    UnknownType(String),
    /// Delta-mode framing sentinel mismatch.
    #[error("bad framing sentinel {found:#04x}, expected {expected:#04x}")]
    Framing { found: u8, expected: u8 },
    /// Member index outside the package.
    #[error("object index {index} outside package of {len} members")]
    IndexOutOfBounds { index: i32, len: usize },
    /// Stream ended inside a declared structure.
    #[error("truncated byte stream: {0}")]
    Truncated(#[from] bytes::TryGetError),
    /// Negative string length or member count.
    #[error("negative length field on wire: {0}")]
    BadLength(i32),
    /// String field held non-UTF-8 bytes.
    #[error("invalid utf-8 in string field")]
    InvalidString(#[from] std::string::FromUtf8Error),
}
