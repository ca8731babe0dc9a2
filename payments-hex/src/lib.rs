//! # Payments Hex
//!
//! Application service layer and HTTP adapter for payment creation.
//!
//! ## Architecture
//!
//! - `service/` - Application service (drives the payment factory, logs outcomes)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `C: Clock` and `G: IdGenerator`, so tests can
//! pin time and identifiers.

pub mod inbound;
pub mod service;


pub use service::PaymentService;
