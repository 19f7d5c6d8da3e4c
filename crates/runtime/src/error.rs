use crate::RValue;
use rook_memory::BorrowError;
use std::{error, fmt};
use thiserror::Error;

/// The different kinds of error that can be reported by Rook builtins
#[derive(Error, Clone, PartialEq)]
pub enum ErrorKind {
    /// Operand kinds disagree where parity is required
    #[error("expected {expected}, but found {found}")]
    TypeMismatch {
        /// A description of the expected value kinds
        expected: String,
        /// The kinds that were actually provided
        found: String,
    },
    /// The key kind isn't supported by sorted vector operations
    #[error("illegal key type: {0}")]
    IllegalKeyType(String),
    /// An index or count argument is outside of the container's bounds
    #[error("{0}")]
    RangeError(String),
    /// A value was requested from an empty vector
    #[error("empty vector")]
    EmptyContainer,
    /// A vector or resource was accessed while another operation was modifying it, or an
    /// exclusive borrow was requested while it was in use
    #[error("value is already in use")]
    AlreadyBorrowed,
    /// A falsy value was passed to `assert`
    #[error("assertion failed")]
    AssertionFailed,
    /// No builtin is registered with the given name
    #[error("unknown builtin '{0}'")]
    UnknownBuiltin(String),
    #[allow(missing_docs)]
    #[error("{0}")]
    StringError(String),
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An error reported by a Rook builtin
///
/// Errors are terminal for the builtin call that raised them, the host decides what happens next.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
    builtin: Option<String>,
}

impl Error {
    /// Initializes an error with the given kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            builtin: None,
        }
    }

    /// The kind of error
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The name of the builtin that reported the error, if known
    pub fn builtin(&self) -> Option<&str> {
        self.builtin.as_deref()
    }

    /// Attaches the name of the builtin that reported the error
    ///
    /// The innermost name wins, so nested builtin calls keep the original reporter.
    #[must_use]
    pub fn with_builtin(mut self, name: &str) -> Self {
        if self.builtin.is_none() {
            self.builtin = Some(name.into());
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.builtin {
            Some(name) => write!(f, "{name}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<BorrowError> for Error {
    fn from(_: BorrowError) -> Self {
        Self::new(ErrorKind::AlreadyBorrowed)
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Self::new(ErrorKind::StringError(error))
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Self::new(ErrorKind::StringError(error.into()))
    }
}

/// The Result type used by the Rook runtime
pub type Result<T> = std::result::Result<T, Error>;

/// Creates a [crate::Error] from a message (with format-like behaviour) or [crate::ErrorKind],
/// wrapped in `Err`
#[macro_export]
macro_rules! runtime_error {
    ($error:literal) => {
        Err($crate::Error::from(format!($error)))
    };
    ($error:expr) => {
        Err($crate::Error::from($error))
    };
    ($error:literal, $($y:expr),+ $(,)?) => {
        Err($crate::Error::from(format!($error, $($y),+)))
    };
}

/// Creates an error that describes a value of the wrong kind
pub fn type_error<T>(expected: &str, unexpected: &RValue) -> Result<T> {
    runtime_error!(ErrorKind::TypeMismatch {
        expected: expected.into(),
        found: unexpected.type_as_string().to_string(),
    })
}

/// Creates an error that describes an unexpected argument list
pub fn unexpected_args<T>(expected: &str, unexpected: &[RValue]) -> Result<T> {
    runtime_error!(ErrorKind::TypeMismatch {
        expected: format!("arguments {expected}"),
        found: describe_arg_types(unexpected),
    })
}

/// Creates an error that describes an out of range index or count
pub fn range_error<T>(message: &str) -> Result<T> {
    runtime_error!(ErrorKind::RangeError(message.into()))
}

fn describe_arg_types(values: &[RValue]) -> String {
    match values {
        [] => "no args".to_string(),
        [single_value] => single_value.type_as_string().to_string(),
        _ => {
            let mut types = String::from('(');
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    types.push_str(", ");
                }
                types.push_str(&value.type_as_string().to_string());
            }
            types.push(')');
            types
        }
    }
}
