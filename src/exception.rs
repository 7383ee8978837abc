//! The failure payload of [`Try`](crate::Try).
//!
//! Rust has two ways for a step to "throw": return an `Err`, or panic.
//! [`Exception`] captures both, plus the case of an asynchronous task that
//! was cancelled before it could finish.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::FutureExt;

/// A captured abnormal termination.
///
/// Cheap to clone: raised errors are shared behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use switchyard::{Exception, Try};
///
/// let t: Try<i32> = Try::catching(|| panic!("boom"));
/// let ex = t.into_failure().unwrap();
/// assert!(ex.is_panic());
/// assert_eq!(ex.message(), "boom");
/// ```
#[derive(Debug, Clone)]
pub enum Exception {
    /// A panic unwound out of a step; holds the panic message.
    Panic {
        /// The panic payload rendered as text.
        message: String,
    },
    /// A step returned an error.
    Error(Arc<dyn StdError + Send + Sync + 'static>),
    /// An asynchronous unit of work was cancelled before completing.
    Cancelled,
}

impl Exception {
    /// Wrap a raised error.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Exception::Error(Arc::from(error.into()))
    }

    /// Build from a panic payload as returned by `catch_unwind`.
    ///
    /// `&str` and `String` payloads keep their text; anything else is
    /// recorded as an unknown panic.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        Exception::Panic { message }
    }

    /// Returns `true` if this was captured from a panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, Exception::Panic { .. })
    }

    /// Returns `true` if this wraps a raised error.
    pub fn is_error(&self) -> bool {
        matches!(self, Exception::Error(_))
    }

    /// Returns `true` if the work was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Exception::Cancelled)
    }

    /// Human readable description without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            Exception::Panic { message } => message.clone(),
            Exception::Error(err) => err.to_string(),
            Exception::Cancelled => "cancelled".to_string(),
        }
    }

    /// The raised error as a concrete type, if it is one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::Exception;
    ///
    /// let ex = Exception::new("42x".parse::<i32>().unwrap_err());
    /// assert!(ex.downcast_ref::<std::num::ParseIntError>().is_some());
    /// ```
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        match self {
            Exception::Error(err) => err.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Re-raise on the current thread.
    ///
    /// A captured panic resumes unwinding with its original message; other
    /// kinds panic with their `Display` rendering.
    pub fn resume(self) -> ! {
        match self {
            Exception::Panic { message } => panic::resume_unwind(Box::new(message)),
            other => panic!("{}", other),
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exception::Panic { message } => write!(f, "panicked: {}", message),
            Exception::Error(err) => write!(f, "{}", err),
            Exception::Cancelled => f.write_str("cancelled before completion"),
        }
    }
}

impl StdError for Exception {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Exception::Error(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

#[cfg(feature = "async")]
impl From<tokio::task::JoinError> for Exception {
    fn from(err: tokio::task::JoinError) -> Self {
        match err.try_into_panic() {
            Ok(payload) => Exception::from_panic(payload),
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("joined task was cancelled");
                Exception::Cancelled
            }
        }
    }
}

/// Run `f`, turning a panic into an [`Exception`].
pub(crate) fn capture<T, F>(f: F) -> Result<T, Exception>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let ex = Exception::from_panic(payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(panic = %ex.message(), "captured panic in catching step");
        ex
    })
}

/// Drive `fut` to completion, turning a panic during any poll into an
/// [`Exception`].
pub(crate) async fn capture_future<F>(fut: F) -> Result<F::Output, Exception>
where
    F: Future,
{
    let polled = AssertUnwindSafe(fut).catch_unwind().await;
    polled.map_err(|payload| {
        let ex = Exception::from_panic(payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(panic = %ex.message(), "captured panic in catching future");
        ex
    })
}
