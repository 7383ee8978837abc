//! Contract violations raised by the containers themselves.
//!
//! Absence and domain failures are ordinary values carried *inside* a
//! container. [`AccessError`] is different: it describes a programmer error,
//! such as reading the unpopulated side of a [`Union`](crate::Union) or
//! unwrapping an absent [`Maybe`](crate::Maybe). The `try_*` accessors return
//! it, and the panicking accessors render it as their panic message.
//!
//! # Example
//!
//! ```rust
//! use switchyard::{AccessError, Maybe};
//!
//! let absent: Maybe<i32> = Maybe::none();
//! assert_eq!(absent.try_unwrap(), Err(AccessError::Absent));
//! ```

use std::fmt;

/// Which slot of a [`Union`](crate::Union) an access expected to find populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left slot.
    Left,
    /// The right slot.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A container was read in a state it was not in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The requested slot of a union is not the populated one.
    WrongSide {
        /// The side the caller asked for.
        expected: Side,
    },
    /// A value was required but the `Maybe` was absent.
    Absent,
    /// A success was required but the container held a failure.
    ExpectedSuccess {
        /// `Debug` rendering of the failure value.
        description: String,
    },
}

impl AccessError {
    pub(crate) fn expected_success<E: fmt::Debug>(error: &E) -> Self {
        AccessError::ExpectedSuccess {
            description: format!("{:?}", error),
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::WrongSide { expected } => {
                write!(f, "invalid access: the {} slot is not populated", expected)
            }
            AccessError::Absent => f.write_str("unexpected absence: the value is not present"),
            AccessError::ExpectedSuccess { description } => {
                write!(f, "expected success, found failure: {}", description)
            }
        }
    }
}

impl std::error::Error for AccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_side_mentions_the_side() {
        let err = AccessError::WrongSide {
            expected: Side::Left,
        };
        assert_eq!(
            err.to_string(),
            "invalid access: the left slot is not populated"
        );
    }

    #[test]
    fn expected_success_renders_debug_of_failure() {
        let err = AccessError::expected_success(&"division by zero");
        assert_eq!(
            err.to_string(),
            "expected success, found failure: \"division by zero\""
        );
    }

    #[test]
    fn absent_message() {
        let message = AccessError::Absent.to_string();
        assert!(message.contains("unexpected absence"));
    }
}
