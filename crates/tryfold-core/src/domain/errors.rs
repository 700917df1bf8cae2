//! Errors - フェッチ失敗の分類
//!
//! A failed fetch is data, not a fault: every `FetchError` ends up inside a
//! `Try::Failure` and is later projected into an `ApiError` for the response.

use std::any::Any;

use thiserror::Error;

/// Why a single fetch in a batch produced no value.
///
/// `key` is the `Display` rendering of the key that was being fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("no entry for key {key}")]
    NotFound { key: String },

    #[error("fetch failed (code={code}): {message}")]
    Failed { code: u16, message: String },

    #[error("fetch for key {key} panicked: {message}")]
    Panicked { key: String, message: String },

    /// The fetch task was cancelled before finishing (runtime shutdown).
    #[error("fetch for key {key} was cancelled")]
    Cancelled { key: String },
}

impl FetchError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn failed(code: u16, message: impl Into<String>) -> Self {
        Self::Failed {
            code,
            message: message.into(),
        }
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let e = FetchError::failed(503, "upstream down");
        assert_eq!(e.to_string(), "fetch failed (code=503): upstream down");
    }

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let a: Box<dyn Any + Send> = Box::new("static");
        let b: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let c: Box<dyn Any + Send> = Box::new(17_u8);

        assert_eq!(panic_message(a.as_ref()), "static");
        assert_eq!(panic_message(b.as_ref()), "owned");
        assert_eq!(panic_message(c.as_ref()), "unknown panic");
    }
}
