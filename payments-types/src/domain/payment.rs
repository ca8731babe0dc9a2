//! Payment aggregate and its factory.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::card::CreditCardDetails;
use super::money::{Currency, Money};
use super::pix::PixDetails;
use super::validation::{ValidationError, ValidationResult};
use crate::ports::{Clock, IdGenerator, SystemClock, UuidGenerator};

const MIN_DESCRIPTION_LENGTH: usize = 5;
const MAX_DESCRIPTION_LENGTH: usize = 50;

/// Unique identifier for a Payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The method used to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    CreditCard,
    Debit,
    Pix,
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentType::CreditCard => write!(f, "CREDIT_CARD"),
            PaymentType::Debit => write!(f, "DEBIT"),
            PaymentType::Pix => write!(f, "PIX"),
        }
    }
}

/// Method-specific data carried by a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentDetails {
    CreditCard(CreditCardDetails),
    Pix(PixDetails),
}

impl PaymentDetails {
    /// Returns the payment type matching this variant.
    pub fn payment_type(&self) -> PaymentType {
        match self {
            PaymentDetails::CreditCard(_) => PaymentType::CreditCard,
            PaymentDetails::Pix(_) => PaymentType::Pix,
        }
    }
}

/// A validated, immutable payment record.
///
/// Payments are only produced by [`PaymentFactory`]; every field is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    id: PaymentId,
    money: Money,
    description: Option<String>,
    payment_type: PaymentType,
    created_at: DateTime<Utc>,
    payment_details: PaymentDetails,
}

impl Payment {
    pub fn id(&self) -> PaymentId {
        self.id
    }

    pub fn money(&self) -> &Money {
        &self.money
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Always agrees with the variant in [`Payment::payment_details`].
    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn payment_details(&self) -> &PaymentDetails {
        &self.payment_details
    }
}

/// Builds payments from raw input.
///
/// Collaborators are validated in order (money, then payment method, then
/// description) and the first one that fails decides the result. Within a
/// collaborator every field error is reported.
#[derive(Debug, Clone)]
pub struct PaymentFactory<C: Clock, G: IdGenerator> {
    clock: C,
    ids: G,
}

impl Default for PaymentFactory<SystemClock, UuidGenerator> {
    fn default() -> Self {
        Self::new(SystemClock, UuidGenerator)
    }
}

impl<C: Clock, G: IdGenerator> PaymentFactory<C, G> {
    /// Creates a factory reading time from `clock` and identifiers from `ids`.
    pub fn new(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Creates a credit card payment charged in BRL.
    pub fn create_brl_credit_card_payment(
        &self,
        amount: Decimal,
        description: Option<&str>,
        card_number: &str,
        card_holder_name: &str,
        expiration_date: Option<NaiveDate>,
        cvv: &str,
    ) -> ValidationResult<Payment> {
        self.create_credit_card_payment(
            Currency::BRL,
            amount,
            description,
            card_number,
            card_holder_name,
            expiration_date,
            cvv,
        )
    }

    /// Creates a credit card payment in any supported currency.
    #[allow(clippy::too_many_arguments)]
    pub fn create_credit_card_payment(
        &self,
        currency: Currency,
        amount: Decimal,
        description: Option<&str>,
        card_number: &str,
        card_holder_name: &str,
        expiration_date: Option<NaiveDate>,
        cvv: &str,
    ) -> ValidationResult<Payment> {
        let money = Money::create(currency, amount)?;
        let card = CreditCardDetails::create(
            card_number,
            card_holder_name,
            expiration_date,
            cvv,
            &self.clock,
        )?;
        let description = validate_description(description)?;

        Ok(self.build(money, description, PaymentDetails::CreditCard(card)))
    }

    /// Creates a Pix payment charged in BRL.
    ///
    /// Amount and description follow the same rules as card payments. The Pix
    /// details are stored as supplied.
    pub fn create_brl_pix_payment(
        &self,
        amount: Decimal,
        description: Option<&str>,
        pix: PixDetails,
    ) -> ValidationResult<Payment> {
        let money = Money::brl(amount)?;
        let description = validate_description(description)?;

        Ok(self.build(money, description, PaymentDetails::Pix(pix)))
    }

    fn build(
        &self,
        money: Money,
        description: Option<String>,
        payment_details: PaymentDetails,
    ) -> Payment {
        Payment {
            id: self.ids.next_id(),
            money,
            description,
            payment_type: payment_details.payment_type(),
            created_at: self.clock.now(),
            payment_details,
        }
    }
}

fn validate_description(description: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(description) = description else {
        return Ok(None);
    };

    let length = description.chars().count();
    if !(MIN_DESCRIPTION_LENGTH..=MAX_DESCRIPTION_LENGTH).contains(&length) {
        return Err(ValidationError::InvalidDescription);
    }
    Ok(Some(description.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::CardField;
    use crate::ports::{FixedClock, FixedIdGenerator};
    use chrono::{Months, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn payment_id() -> PaymentId {
        "7f0c9f4e-2b1d-4a57-9a53-4a3c1c0e8b21".parse().unwrap()
    }

    fn factory() -> PaymentFactory<FixedClock, FixedIdGenerator> {
        PaymentFactory::new(FixedClock::new(now()), FixedIdGenerator::new(payment_id()))
    }

    fn months_from_now(months: i32) -> Option<NaiveDate> {
        let today = now().date_naive();
        if months >= 0 {
            today.checked_add_months(Months::new(months as u32))
        } else {
            today.checked_sub_months(Months::new(months.unsigned_abs()))
        }
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_brl_credit_card_payment_success() {
        let payment = factory()
            .create_brl_credit_card_payment(
                dec("100"),
                Some("Order #123"),
                "4111111111111111",
                "John Doe",
                months_from_now(6),
                "123",
            )
            .unwrap();

        assert_eq!(payment.id(), payment_id());
        assert_eq!(payment.payment_type(), PaymentType::CreditCard);
        assert_eq!(payment.money().amount(), dec("100"));
        assert_eq!(payment.money().currency(), Currency::BRL);
        assert_eq!(payment.description(), Some("Order #123"));
        assert_eq!(payment.created_at(), now());

        match payment.payment_details() {
            PaymentDetails::CreditCard(card) => {
                assert_eq!(card.card_number(), "4111111111111111")
            }
            PaymentDetails::Pix(_) => panic!("expected credit card details"),
        }
    }

    #[test]
    fn test_card_errors_are_surfaced() {
        let errors = factory()
            .create_brl_credit_card_payment(
                dec("100"),
                Some("Order #123"),
                "123",
                " ",
                months_from_now(-2),
                "1",
            )
            .unwrap_err();

        assert_eq!(errors.len(), 4);
        assert!(
            errors
                .messages()
                .iter()
                .any(|m| m.to_lowercase().contains("holder name"))
        );
    }

    #[test]
    fn test_amount_failure_short_circuits() {
        let errors = factory()
            .create_brl_credit_card_payment(dec("0"), Some("no"), "123", " ", None, "1")
            .unwrap_err();

        assert_eq!(errors.into_vec(), vec![ValidationError::InvalidAmount]);
    }

    #[test]
    fn test_card_failure_hides_description_failure() {
        let errors = factory()
            .create_brl_credit_card_payment(
                dec("10"),
                Some("no"),
                "4111111111111111",
                "John Doe",
                months_from_now(6),
                "",
            )
            .unwrap_err();

        assert_eq!(
            errors.into_vec(),
            vec![ValidationError::MissingField(CardField::Cvv)]
        );
    }

    #[test]
    fn test_description_rules() {
        let too_long = "x".repeat(51);
        for description in ["", "abcd", too_long.as_str()] {
            let errors = factory()
                .create_brl_credit_card_payment(
                    dec("10"),
                    Some(description),
                    "4111111111111111",
                    "John Doe",
                    months_from_now(6),
                    "123",
                )
                .unwrap_err();
            assert_eq!(errors.into_vec(), vec![ValidationError::InvalidDescription]);
        }

        let at_limit = "x".repeat(50);
        for description in [Some("abcde"), Some(at_limit.as_str()), None] {
            let payment = factory()
                .create_brl_credit_card_payment(
                    dec("10"),
                    description,
                    "4111111111111111",
                    "John Doe",
                    months_from_now(6),
                    "123",
                )
                .unwrap();
            assert_eq!(payment.description(), description);
        }
    }

    #[test]
    fn test_usd_credit_card_payment() {
        let payment = factory()
            .create_credit_card_payment(
                Currency::USD,
                dec("20.125"),
                None,
                "4111 1111 1111 1111",
                "Jane Roe",
                months_from_now(1),
                "1234",
            )
            .unwrap();

        assert_eq!(payment.money().to_string(), "US$ 20.12");
        assert_eq!(payment.money().amount(), dec("20.125"));
    }

    #[test]
    fn test_pix_payment() {
        let pix = PixDetails::new(Some("jane@example.com".into()), None);
        let payment = factory()
            .create_brl_pix_payment(dec("49.90"), Some("Monthly plan"), pix.clone())
            .unwrap();

        assert_eq!(payment.payment_type(), PaymentType::Pix);
        assert_eq!(payment.payment_details(), &PaymentDetails::Pix(pix));
    }

    #[test]
    fn test_pix_payment_rejects_bad_amount() {
        let errors = factory()
            .create_brl_pix_payment(dec("-1"), None, PixDetails::default())
            .unwrap_err();
        assert_eq!(errors.first(), &ValidationError::InvalidAmount);
    }

    #[test]
    fn test_default_factory_generates_distinct_ids() {
        let factory: PaymentFactory<SystemClock, UuidGenerator> = PaymentFactory::default();
        let a = factory
            .create_brl_pix_payment(dec("1"), None, PixDetails::default())
            .unwrap();
        let b = factory
            .create_brl_pix_payment(dec("1"), None, PixDetails::default())
            .unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_payment_id_roundtrip() {
        let id = PaymentId::new();
        let parsed: PaymentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }
}
