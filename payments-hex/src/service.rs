//! Payment Application Service
//!
//! Turns transport requests into factory calls and records the outcome.
//! Validation failures are returned as data; adapters map them to their own
//! error shape.
//! Contains NO infrastructure logic - pure orchestration.

use payments_types::{
    Clock, CreateCardPaymentRequest, CreatePixPaymentRequest, IdGenerator, Payment,
    PaymentFactory, PixDetails, SystemClock, UuidGenerator, ValidationResult,
};

/// Application service for payment creation.
///
/// Stateless apart from the injected clock and identifier source, so one
/// instance can serve any number of concurrent callers.
pub struct PaymentService<C: Clock, G: IdGenerator> {
    factory: PaymentFactory<C, G>,
}

impl Default for PaymentService<SystemClock, UuidGenerator> {
    fn default() -> Self {
        Self::new(PaymentFactory::default())
    }
}

impl<C: Clock, G: IdGenerator> PaymentService<C, G> {
    /// Creates a new payment service around the given factory.
    pub fn new(factory: PaymentFactory<C, G>) -> Self {
        Self { factory }
    }

    /// Creates a credit card payment.
    pub fn create_card_payment(&self, req: CreateCardPaymentRequest) -> ValidationResult<Payment> {
        let result = self.factory.create_credit_card_payment(
            req.currency,
            req.amount,
            req.description.as_deref(),
            &req.card_number,
            &req.card_holder_name,
            req.expiration_date,
            &req.cvv,
        );

        record(result, "credit_card")
    }

    /// Creates a Pix payment in BRL.
    pub fn create_pix_payment(&self, req: CreatePixPaymentRequest) -> ValidationResult<Payment> {
        let pix = PixDetails::new(req.pix_key, req.pix_description);
        let result =
            self.factory
                .create_brl_pix_payment(req.amount, req.description.as_deref(), pix);

        record(result, "pix")
    }
}

fn record(result: ValidationResult<Payment>, method: &str) -> ValidationResult<Payment> {
    match result {
        Ok(payment) => {
            tracing::info!(
                payment_id = %payment.id(),
                payment_type = %payment.payment_type(),
                amount = %payment.money(),
                "Payment created"
            );
            Ok(payment)
        }
        Err(errors) => {
            tracing::warn!(
                method,
                error_count = errors.len(),
                first_error = %errors.first(),
                "Payment rejected"
            );
            Err(errors)
        }
    }
}
