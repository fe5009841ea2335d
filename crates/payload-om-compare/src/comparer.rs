//! Error-comparer contract and bundled strategies.

use tracing::debug;

use crate::error::{CompareError, Result};

/// Description of the error a test expects.
///
/// Unset fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectedError {
    pub code: Option<String>,
    pub message: Option<String>,
    pub target: Option<String>,
}

impl ExpectedError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// An error actually raised by the system under test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActualError {
    pub code: String,
    pub message: String,
    pub target: Option<String>,
}

impl ActualError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        ActualError {
            code: code.into(),
            message: message.into(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Capture a raised Rust error. The code is left empty.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        ActualError::new("", error.to_string())
    }
}

/// Judges whether an actual error matches the expected one.
///
/// Implementations are selected by name through a
/// [`StrategyRegistry`](crate::registry::StrategyRegistry).
pub trait ErrorComparer: Send + Sync {
    /// Name the strategy is registered under
    fn name(&self) -> &str;

    /// `Ok(())` when equivalent, otherwise an error describing the mismatch
    fn compare(&self, expected: &ExpectedError, actual: &ActualError) -> Result<()>;
}

/// Placeholder comparer that always fails with `NotImplemented`.
///
/// Selecting it means no real comparer has been wired up yet, so every error
/// comparison fails instead of passing silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyErrorComparer;

impl EmptyErrorComparer {
    pub const NAME: &'static str = "Empty";
}

impl ErrorComparer for EmptyErrorComparer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn compare(&self, _expected: &ExpectedError, _actual: &ActualError) -> Result<()> {
        Err(CompareError::NotImplemented(format!(
            "error comparer '{}' has no implementation; register a real comparer",
            Self::NAME
        )))
    }
}

/// Field-by-field comparer: every field set on the expected side must equal
/// the actual value exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactErrorComparer;

impl ExactErrorComparer {
    pub const NAME: &'static str = "Exact";
}

fn check_field(field: &'static str, expected: Option<&str>, actual: Option<&str>) -> Result<()> {
    match expected {
        Some(expected) if Some(expected) != actual => Err(CompareError::ErrorMismatch {
            field,
            expected: expected.to_string(),
            actual: actual.unwrap_or_default().to_string(),
        }),
        _ => Ok(()),
    }
}

impl ErrorComparer for ExactErrorComparer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn compare(&self, expected: &ExpectedError, actual: &ActualError) -> Result<()> {
        debug!(?expected, ?actual, "comparing errors");
        check_field("code", expected.code.as_deref(), Some(actual.code.as_str()))?;
        check_field("message", expected.message.as_deref(), Some(actual.message.as_str()))?;
        check_field("target", expected.target.as_deref(), actual.target.as_deref())?;
        Ok(())
    }
}
