use core::fmt;

use alloc::string::String;

/// Failures while decoding persisted grammatical data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A db value that no value of the named dimension carries.
    UnknownDbValue { dimension: &'static str, value: String },
    /// A persisted form ordinal that does not fit the compact encoding.
    OrdinalOutOfRange(u32),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnknownDbValue { dimension, value } => {
                write!(f, "unknown {} value: {:?}", dimension, value)
            }
            ProtocolError::OrdinalOutOfRange(ordinal) => {
                write!(f, "form ordinal {} does not fit in a byte", ordinal)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}

/// Parses a db value of dimension `T`, naming the dimension on failure.
pub fn parse_db_value<T>(
    dimension: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ProtocolError> {
    parse(value).ok_or_else(|| ProtocolError::UnknownDbValue {
        dimension,
        value: String::from(value),
    })
}
