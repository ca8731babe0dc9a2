//! Validation outcomes reported as data.
//!
//! Factories in this crate never panic or unwind on bad input. They return a
//! [`ValidationResult`], which is either the constructed value or a non-empty,
//! ordered list of [`ValidationError`]s the caller can show to the end user.

use std::fmt;

/// Result of a validating factory.
///
/// Reaching for the wrong side (`unwrap` on a failure, `unwrap_err` on a
/// success) is a programming error and panics.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Credit card fields that take part in validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    CardNumber,
    CardHolderName,
    ExpirationDate,
    Cvv,
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardField::CardNumber => write!(f, "Card number"),
            CardField::CardHolderName => write!(f, "Card holder name"),
            CardField::ExpirationDate => write!(f, "Expiration date"),
            CardField::Cvv => write!(f, "CVV"),
        }
    }
}

/// A single validation failure.
///
/// The `Display` output is the human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Amount must be positive")]
    InvalidAmount,

    #[error("{0} is required.")]
    MissingField(CardField),

    #[error("{field} must {rule}.")]
    InvalidFormat {
        field: CardField,
        rule: &'static str,
    },

    #[error("Expiration date cannot be in the past.")]
    ExpiredCard,

    #[error("Payment description is invalid")]
    InvalidDescription,
}

impl ValidationError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidAmount => "INVALID_AMOUNT",
            ValidationError::MissingField(_) => "MISSING_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::ExpiredCard => "EXPIRED_CARD",
            ValidationError::InvalidDescription => "INVALID_DESCRIPTION",
        }
    }
}

/// Ordered, non-empty collection of distinct validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates a collection holding exactly one error.
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    /// Builds a collection from accumulated errors, keeping first-seen order
    /// and dropping duplicates. Returns `None` when nothing was accumulated.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let mut collected = Self::single(iter.next()?);
        for error in iter {
            collected.push(error);
        }
        Some(collected)
    }

    /// Fails with the accumulated errors, if any.
    pub fn check(errors: Vec<ValidationError>) -> ValidationResult<()> {
        match Self::from_vec(errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }

    /// Appends an error unless an identical one is already present.
    pub fn push(&mut self, error: ValidationError) {
        if !self.0.contains(&error) {
            self.0.push(error);
        }
    }

    /// Returns the number of errors (always at least one).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first recorded error.
    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    /// Returns an iterator over the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Returns true if an identical error is present.
    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }

    /// Human-readable messages, one per error.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Consumes the collection into its errors.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
