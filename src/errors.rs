use std::fmt;

/// An error that can occur when decoding a FLUX bundle
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    pub(crate) fn out_of_bounds(offset: usize, len: usize, max: usize) -> Error {
        Error::new(ErrorKind::OutOfBounds { offset, len, max })
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Returns the byte offset the error occurred at
    pub fn offset(&self) -> usize {
        self.0.offset()
    }
}

/// Specific type of decode error
#[derive(Debug)]
pub enum ErrorKind {
    /// A read would extend past the end of the input buffer
    OutOfBounds {
        offset: usize,
        len: usize,
        max: usize,
    },

    /// An expected signature did not match
    InvalidMagic {
        offset: usize,
        expected: &'static [u8],
        found: [u8; 4],
    },

    /// A structural self-consistency field held an unexpected value,
    /// which signals an unsupported format revision
    InvalidFormat {
        offset: usize,
        expected: u32,
        found: u32,
    },

    /// A declared payload extends past the end of the input buffer
    TruncatedPayload {
        offset: usize,
        declared: usize,
        available: usize,
    },

    /// Name bytes are not valid UTF-8
    InvalidEncoding { offset: usize },
}

impl ErrorKind {
    /// The byte offset the error occurred at
    pub fn offset(&self) -> usize {
        match *self {
            ErrorKind::OutOfBounds { offset, .. } => offset,
            ErrorKind::InvalidMagic { offset, .. } => offset,
            ErrorKind::InvalidFormat { offset, .. } => offset,
            ErrorKind::TruncatedPayload { offset, .. } => offset,
            ErrorKind::InvalidEncoding { offset } => offset,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::OutOfBounds { offset, len: 0, max } => write!(
                f,
                "offset stored at 0x{:x} resolves outside the {} byte buffer",
                offset, max
            ),
            ErrorKind::OutOfBounds { offset, len, max } => write!(
                f,
                "read of {} bytes at offset 0x{:x} exceeds buffer of {} bytes",
                len, offset, max
            ),
            ErrorKind::InvalidMagic {
                offset,
                expected,
                ref found,
            } => write!(
                f,
                "invalid magic at offset 0x{:x}: expected {:?}, found {:?}",
                offset,
                String::from_utf8_lossy(expected),
                String::from_utf8_lossy(&found[..expected.len()])
            ),
            ErrorKind::InvalidFormat {
                offset,
                expected,
                found,
            } => write!(
                f,
                "unexpected structural value at offset 0x{:x}: expected 0x{:x}, found 0x{:x}",
                offset, expected, found
            ),
            ErrorKind::TruncatedPayload {
                offset,
                declared,
                available,
            } => write!(
                f,
                "payload at offset 0x{:x} declares {} bytes but only {} remain",
                offset, declared, available
            ),
            ErrorKind::InvalidEncoding { offset } => {
                write!(f, "name at offset 0x{:x} is not valid UTF-8", offset)
            }
        }
    }
}
