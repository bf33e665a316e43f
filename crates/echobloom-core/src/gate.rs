//! Form completion gate: every required field must be non-empty after
//! trimming, and counted collections must hold exactly the expected number
//! of entries.

use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionGate {
    missing: Vec<String>,
}

impl CompletionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(mut self, field: impl Into<String>, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(field.into());
        }
        self
    }

    pub fn require_count(mut self, field: impl Into<String>, actual: usize, expected: usize) -> Self {
        if actual != expected {
            self.missing.push(format!("{} ({actual}/{expected})", field.into()));
        }
        self
    }

    pub fn is_open(&self) -> bool {
        self.missing.is_empty()
    }

    /// Labels of the fields that keep the gate closed, in check order.
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// `Ok` when open, otherwise an error naming the first missing field.
    pub fn check(&self) -> Result<(), ValidationError> {
        match self.missing.first() {
            None => Ok(()),
            Some(field) => Err(ValidationError::EmptyField(field.clone())),
        }
    }
}
