//! Identifier generation port.

use uuid::Uuid;

use crate::domain::PaymentId;

/// Source of fresh payment identifiers.
///
/// Implementations must be safe to call from any number of threads and must
/// not hand out the same identifier twice (test doubles excepted).
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> PaymentId;
}

/// Random 128-bit (UUID v4) identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> PaymentId {
        PaymentId::from_uuid(Uuid::new_v4())
    }
}

/// Hands out the same identifier on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIdGenerator(PaymentId);

impl FixedIdGenerator {
    pub fn new(id: PaymentId) -> Self {
        Self(id)
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> PaymentId {
        self.0
    }
}

