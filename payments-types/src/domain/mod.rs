//! Domain models for payment construction.

pub mod card;
pub mod money;
pub mod payment;
pub mod pix;
pub mod validation;

pub use card::CreditCardDetails;
pub use money::{Currency, DISPLAY_ROUNDING, Money};
pub use payment::{Payment, PaymentDetails, PaymentFactory, PaymentId, PaymentType};
pub use pix::PixDetails;
pub use validation::{CardField, ValidationError, ValidationErrors, ValidationResult};
