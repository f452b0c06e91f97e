//! Query error types
//!
//! Error codes:
//! - FILM_QUERY_MALFORMED_PARAMETER (REJECT)
//! - FILM_QUERY_UNSUPPORTED_SORT_KEY (REJECT)
//!
//! Both are terminal for the request: no partial result, no fallback.

use std::fmt;

/// Severity levels for query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Client request rejected
    Reject,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
        }
    }
}

/// Query error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// A recognized parameter's value does not parse as its declared type
    MalformedParameter,
    /// `sortBy` names a field that cannot be sorted on
    UnsupportedSortKey,
}

impl QueryErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::MalformedParameter => "FILM_QUERY_MALFORMED_PARAMETER",
            QueryErrorCode::UnsupportedSortKey => "FILM_QUERY_UNSUPPORTED_SORT_KEY",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Reject
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error with the offending parameter and raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    code: QueryErrorCode,
    parameter: String,
    value: String,
    message: String,
}

impl QueryError {
    /// Create a malformed parameter error
    pub fn malformed_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        expected: &str,
    ) -> Self {
        let parameter = parameter.into();
        let value = value.into();
        Self {
            code: QueryErrorCode::MalformedParameter,
            message: format!(
                "parameter '{}' expects {}, got {:?}",
                parameter, expected, value
            ),
            parameter,
            value,
        }
    }

    /// Create an unsupported sort key error
    pub fn unsupported_sort_key(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            code: QueryErrorCode::UnsupportedSortKey,
            message: format!(
                "cannot sort by {:?}; supported keys are title, year, awards, nominations",
                value
            ),
            parameter: "sortBy".to_string(),
            value,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the name of the offending parameter
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Returns the raw value that was rejected
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for QueryError {}

/// Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;
