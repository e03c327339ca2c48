/*!
error module defines the error types used in rpki-as0-bogons.
*/
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlurmError {
    /// A delegation record or bogon list line does not have the expected layout.
    ///
    /// ## Occurs during:
    ///  - Splitting a delegated-extended record into its nine columns
    ///  - Parsing the `length` column of a delegated-extended record
    ///  - Parsing a bogon list line as a CIDR prefix
    #[error("malformed input at line {line}: {reason}")]
    Format { line: usize, reason: String },
    /// A numeric input is out of the range accepted by range summarization.
    ///
    /// ## Occurs during:
    ///  - Summarizing an IPv4 range of zero addresses, or one running past `255.255.255.255`
    ///  - Building an IPv6 network with a prefix length above 128
    #[error("invalid value: {0}")]
    Value(String),
    /// This error represents a [ipnet::PrefixLenError] error. It occurs if a prefix length is
    /// larger than the length of the address it is being applied to.
    #[error("invalid network prefix length")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
    /// A bogon list or delegated stats file could not be retrieved.
    #[error("unable to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error(transparent)]
    IoError(#[from] io::Error),
}

impl SlurmError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        SlurmError::Format {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn value(reason: impl Into<String>) -> Self {
        SlurmError::Value(reason.into())
    }
}
