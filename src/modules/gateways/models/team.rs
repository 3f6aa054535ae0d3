use crate::core::Currency;
use serde::{Deserialize, Serialize};

/// Billing fields of a team record, as stored by the host application.
///
/// Both fields are kept as the raw strings the host holds; parsing happens
/// when a gateway is resolved so that a bad value degrades instead of
/// failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub payment_gateway: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payment_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.payment_gateway = Some(gateway.into());
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Team currency if set to a well-formed ISO code
    pub fn parsed_currency(&self) -> Option<Currency> {
        self.currency.as_deref().and_then(|c| c.parse().ok())
    }
}
