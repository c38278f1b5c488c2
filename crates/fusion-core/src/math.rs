//! Arithmetic helpers and a small conversation container.

use crate::error::{FusionError, Result};

/// Sum of `a` and `b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference of `a` and `b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of `a` and `b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient of `a` and `b`, or [`FusionError::DivideByZero`] when `b == 0`.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(FusionError::DivideByZero);
    }
    Ok(a / b)
}

// ── ChatHistory ───────────────────────────────────────────────────────────────

/// Simple container for tracking conversation messages.
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    messages: Vec<String>,
}

impl ChatHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text` to the history.
    pub fn add_message(&mut self, text: impl Into<String>) {
        self.messages.push(text.into());
    }

    /// The most recent message, or `None` when the history is empty.
    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }

    /// Remove all messages from the history.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// All messages in insertion order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.5, 1.5), 0.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(4.0, 2.5), 10.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(9.0, 3.0).unwrap(), 3.0);
    }

    #[test]
    fn test_divide_by_zero() {
        let err = divide(1.0, 0.0).unwrap_err();
        assert!(matches!(err, FusionError::DivideByZero));
    }

    #[test]
    fn test_chat_history() {
        let mut history = ChatHistory::new();
        assert!(history.last_message().is_none());

        history.add_message("hello");
        history.add_message("world");
        assert_eq!(history.last_message(), Some("world"));
        assert_eq!(history.messages().len(), 2);

        history.clear();
        assert!(history.last_message().is_none());
        assert!(history.messages().is_empty());
    }
}
