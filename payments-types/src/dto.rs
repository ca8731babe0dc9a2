//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Currency, Payment, PaymentDetails, PaymentId, PaymentType, ValidationError,
};

// ─────────────────────────────────────────────────────────────────────────────
// Payment requests
// ─────────────────────────────────────────────────────────────────────────────

/// Request to create a credit card payment.
///
/// Missing string fields deserialize as empty and are reported by validation
/// rather than rejected by the JSON layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardPaymentRequest {
    /// Amount in major units (e.g. "100.50")
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_holder_name: String,
    /// Any day in the expiration month (e.g. "2027-04-01")
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub cvv: String,
}

fn default_currency() -> Currency {
    Currency::BRL
}

/// Request to create a Pix payment (always BRL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePixPaymentRequest {
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pix_description: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment responses
// ─────────────────────────────────────────────────────────────────────────────

/// A created payment as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub payment_type: PaymentType,
    /// Amount exactly as accepted
    pub amount: Decimal,
    pub currency: Currency,
    /// Rounded, tagged amount (e.g. "R$ 10.24")
    pub display_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub details: PaymentDetailsResponse,
}

/// Method-specific part of [`PaymentResponse`]. Card data is masked and the
/// CVV is never echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentDetailsResponse {
    CreditCard {
        masked_card_number: String,
        card_holder_name: String,
        expiration_date: NaiveDate,
    },
    Pix {
        #[serde(skip_serializing_if = "Option::is_none")]
        pix_key: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl From<&Payment> for PaymentResponse {
    fn from(payment: &Payment) -> Self {
        let details = match payment.payment_details() {
            PaymentDetails::CreditCard(card) => PaymentDetailsResponse::CreditCard {
                masked_card_number: card.masked_card_number(),
                card_holder_name: card.card_holder_name().to_string(),
                expiration_date: card.expiration_date(),
            },
            PaymentDetails::Pix(pix) => PaymentDetailsResponse::Pix {
                pix_key: pix.pix_key().map(str::to_string),
                description: pix.description().map(str::to_string),
            },
        };

        Self {
            id: payment.id(),
            payment_type: payment.payment_type(),
            amount: payment.money().amount(),
            currency: payment.money().currency(),
            display_amount: payment.money().to_string(),
            description: payment.description().map(str::to_string),
            created_at: payment.created_at(),
            details,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// One validation failure as reported to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl From<&ValidationError> for ErrorDetail {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
        }
    }
}
