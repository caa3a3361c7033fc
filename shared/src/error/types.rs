//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the error type of the order desk, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (field-level errors, context)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an order not found error
    pub fn order_not_found(order_key: impl Into<String>) -> Self {
        let key = order_key.into();
        Self::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", key))
            .with_detail("order_key", key)
    }

    /// Create an order line not found error
    pub fn line_not_found(order_key: impl Into<String>, line_no: usize) -> Self {
        let key = order_key.into();
        Self::with_message(
            ErrorCode::OrderLineNotFound,
            format!("Line {} of order {} not found", line_no, key),
        )
        .with_detail("order_key", key)
        .with_detail("line_no", line_no)
    }

    /// Create a nothing-selected error carrying the prompt shown to the user
    pub fn nothing_selected(prompt: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NothingSelected, prompt)
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::OrderNotFound);
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert_eq!(err.message, "Order not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("bad quantity")
            .with_detail("field", "order_qty")
            .with_detail("max", 9999);

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field"), Some(&Value::from("order_qty")));
        assert_eq!(err.detail("max"), Some(&Value::from(9999)));
        assert_eq!(err.detail("missing"), None);
    }

    #[test]
    fn test_line_not_found() {
        let err = AppError::line_not_found("001-000001", 4);
        assert_eq!(err.code, ErrorCode::OrderLineNotFound);
        assert_eq!(err.message, "Line 4 of order 001-000001 not found");
        assert_eq!(err.detail("line_no"), Some(&Value::from(4)));
    }

    #[test]
    fn test_nothing_selected_keeps_prompt() {
        let err = AppError::nothing_selected("印刷する明細を選択してください");
        assert_eq!(err.code, ErrorCode::NothingSelected);
        assert_eq!(err.to_string(), "印刷する明細を選択してください");
    }
}
