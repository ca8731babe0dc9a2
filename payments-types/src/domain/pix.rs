//! Pix payment details.

/// Pix key and free-text note attached to a Pix payment.
///
/// Pix keys come in several shapes (CPF/CNPJ, e-mail, phone, random key) and
/// no rules are enforced here yet; values are stored as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixDetails {
    pix_key: Option<String>,
    description: Option<String>,
}

impl PixDetails {
    pub fn new(pix_key: Option<String>, description: Option<String>) -> Self {
        Self {
            pix_key,
            description,
        }
    }

    pub fn pix_key(&self) -> Option<&str> {
        self.pix_key.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
