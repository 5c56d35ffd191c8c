//! Invocation response returned to the host

use std::borrow::Cow;

/// Status code for a successful invocation.
pub const OK: i32 = 200;
/// Status code for a failed invocation.
pub const ERROR: i32 = 500;

/// Outcome of one contract invocation.
///
/// Successful responses carry a payload and an empty message; failed ones
/// carry a message and an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// [`OK`] or [`ERROR`]
    pub status: i32,
    /// Human-readable failure text, empty on success
    pub message: String,
    /// Result bytes, empty on failure
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful response carrying `payload`.
    #[must_use]
    pub const fn success(payload: Vec<u8>) -> Self {
        Self {
            status: OK,
            message: String::new(),
            payload,
        }
    }

    /// Failed response carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Whether the invocation succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == OK
    }

    /// Payload as text, replacing invalid UTF-8.
    #[must_use]
    pub fn payload_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

impl From<crate::Result<Vec<u8>>> for Response {
    fn from(result: crate::Result<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::error(err.to_string()),
        }
    }
}
