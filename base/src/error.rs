use crate::kind::Kind;
use alloc::{format, string::String};
use core::fmt::{self, Debug};

/// Error that can occur while flattening a record.
///
/// All errors are reported by the entry point before any field is visited, so no partial output accompanies them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Record was passed by value where a reference to it is required.
    ///
    /// Contains `Debug` representation of the value.
    PtrRequired(String),
    /// Reference doesn't point to any value, e.g. `None` was passed.
    ///
    /// Contains `Debug` representation of the value.
    InvalidValue(String),
    /// Referenced value exists but isn't a record.
    InvalidKind { expected: Kind, got: Kind },
}

impl Error {
    pub fn ptr_required<T: Debug + ?Sized>(value: &T) -> Self {
        Error::PtrRequired(format!("{:?}", value))
    }

    pub fn invalid_value<T: Debug + ?Sized>(value: &T) -> Self {
        Error::InvalidValue(format!("{:?}", value))
    }

    pub fn invalid_kind(expected: Kind, got: Kind) -> Self {
        Error::InvalidKind { expected, got }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PtrRequired(value) => write!(
                f,
                "A pointer to the value '{}' is required, not the value itself",
                value
            ),
            Error::InvalidValue(value) => write!(f, "Reflect reports this value is invalid '{}'", value),
            Error::InvalidKind { expected, got } => write!(f, "Expected '{}' kind, got '{}'", expected, got),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
