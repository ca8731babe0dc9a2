//! Credit card details value object.

use std::fmt;

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};

use super::validation::{CardField, ValidationError, ValidationErrors, ValidationResult};
use crate::ports::Clock;

const MIN_CARD_NUMBER_LENGTH: usize = 13;
const MAX_CARD_NUMBER_LENGTH: usize = 19;
const MIN_HOLDER_NAME_LENGTH: usize = 2;
const MAX_HOLDER_NAME_LENGTH: usize = 100;
const ALLOWED_CVV_LENGTHS: [usize; 2] = [3, 4];

/// Normalized, validated credit card data.
///
/// Built only through [`CreditCardDetails::create`]. `Debug` output masks the
/// card number and hides the CVV.
#[derive(Clone, PartialEq, Eq)]
pub struct CreditCardDetails {
    card_number: String,
    card_holder_name: String,
    expiration_date: NaiveDate,
    cvv: String,
}

impl CreditCardDetails {
    /// Normalizes and validates raw card input.
    ///
    /// Spaces and hyphens are stripped from the card number; the holder name
    /// and CVV are trimmed. All four fields are checked and every failure is
    /// reported, in field order: card number, holder name, expiration date, CVV.
    ///
    /// `expiration_date` of `None` counts as missing. Only its year and month
    /// matter: the card stays valid through 23:59:59 UTC on the last day of
    /// that month.
    pub fn create<C: Clock + ?Sized>(
        card_number: &str,
        card_holder_name: &str,
        expiration_date: Option<NaiveDate>,
        cvv: &str,
        clock: &C,
    ) -> ValidationResult<Self> {
        let card_number = normalize_card_number(card_number);
        let card_holder_name = card_holder_name.trim();
        let cvv = cvv.trim();

        let mut errors = Vec::new();
        if let Err(error) = validate_card_number(&card_number) {
            errors.push(error);
        }
        if let Err(error) = validate_card_holder_name(card_holder_name) {
            errors.push(error);
        }
        let expiration = validate_expiration_date(expiration_date, clock.now());
        if let Err(error) = &expiration {
            errors.push(error.clone());
        }
        if let Err(error) = validate_cvv(cvv) {
            errors.push(error);
        }

        ValidationErrors::check(errors)?;
        let expiration_date = expiration?;

        Ok(Self {
            card_number,
            card_holder_name: card_holder_name.to_string(),
            expiration_date,
            cvv: cvv.to_string(),
        })
    }

    /// Returns the card number, digits only.
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// Returns the last four digits of the card number.
    pub fn last_four(&self) -> &str {
        &self.card_number[self.card_number.len() - 4..]
    }

    /// Returns the card number with all but the last four digits masked.
    pub fn masked_card_number(&self) -> String {
        let hidden = self.card_number.len() - 4;
        format!("{}{}", "*".repeat(hidden), self.last_four())
    }

    pub fn card_holder_name(&self) -> &str {
        &self.card_holder_name
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn cvv(&self) -> &str {
        &self.cvv
    }
}

impl fmt::Debug for CreditCardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardDetails")
            .field("card_number", &self.masked_card_number())
            .field("card_holder_name", &self.card_holder_name)
            .field("expiration_date", &self.expiration_date)
            .field("cvv", &"***")
            .finish()
    }
}

fn normalize_card_number(value: &str) -> String {
    value.chars().filter(|c| *c != ' ' && *c != '-').collect()
}

fn is_all_digits(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

fn validate_card_number(card_number: &str) -> Result<(), ValidationError> {
    if card_number.trim().is_empty() {
        return Err(ValidationError::MissingField(CardField::CardNumber));
    }

    let length = card_number.chars().count();
    if !is_all_digits(card_number)
        || !(MIN_CARD_NUMBER_LENGTH..=MAX_CARD_NUMBER_LENGTH).contains(&length)
    {
        return Err(ValidationError::InvalidFormat {
            field: CardField::CardNumber,
            rule: "contain only digits and have between 13 and 19 characters",
        });
    }
    Ok(())
}

fn validate_card_holder_name(card_holder_name: &str) -> Result<(), ValidationError> {
    if card_holder_name.is_empty() {
        return Err(ValidationError::MissingField(CardField::CardHolderName));
    }

    let length = card_holder_name.chars().count();
    if !(MIN_HOLDER_NAME_LENGTH..=MAX_HOLDER_NAME_LENGTH).contains(&length) {
        return Err(ValidationError::InvalidFormat {
            field: CardField::CardHolderName,
            rule: "have between 2 and 100 characters",
        });
    }
    Ok(())
}

fn validate_expiration_date(
    expiration_date: Option<NaiveDate>,
    now: DateTime<Utc>,
) -> Result<NaiveDate, ValidationError> {
    let Some(expiration_date) = expiration_date else {
        return Err(ValidationError::MissingField(CardField::ExpirationDate));
    };

    // Dates too close to the end of the calendar have no representable limit
    // and cannot be in the past.
    if expiration_limit(expiration_date).is_some_and(|limit| limit < now) {
        return Err(ValidationError::ExpiredCard);
    }
    Ok(expiration_date)
}

/// Last instant at which a card expiring in `date`'s month is still valid.
fn expiration_limit(date: NaiveDate) -> Option<DateTime<Utc>> {
    let last_day = date
        .with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()?;
    Some(last_day.and_hms_opt(23, 59, 59)?.and_utc())
}

fn validate_cvv(cvv: &str) -> Result<(), ValidationError> {
    if cvv.is_empty() {
        return Err(ValidationError::MissingField(CardField::Cvv));
    }

    if !is_all_digits(cvv) || !ALLOWED_CVV_LENGTHS.contains(&cvv.chars().count()) {
        return Err(ValidationError::InvalidFormat {
            field: CardField::Cvv,
            rule: "contain only digits and have 3 or 4 characters",
        });
    }
    Ok(())
}
