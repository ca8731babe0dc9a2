//! # Payments Types
//!
//! Domain types and port traits for constructing valid payment records.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Value objects (Money, CreditCardDetails, PixDetails) and the Payment aggregate
//! - `ports/` - Clock and identifier traits that callers inject
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Application error type

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CardField, CreditCardDetails, Currency, Money, Payment, PaymentDetails, PaymentFactory,
    PaymentId, PaymentType, PixDetails, ValidationError, ValidationErrors, ValidationResult,
};
pub use dto::*;
pub use error::AppError;
pub use ports::{Clock, FixedClock, FixedIdGenerator, IdGenerator, SystemClock, UuidGenerator};
