use crate::core::{AppError, Currency, Result};
use serde::{Deserialize, Serialize};

/// Payment gateways a team can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gateway {
    Stripe,
    #[default]
    Midtrans,
}

impl Gateway {
    pub const ALL: [Gateway; 2] = [Gateway::Stripe, Gateway::Midtrans];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gateway::Stripe => "stripe",
            Gateway::Midtrans => "midtrans",
        }
    }

    /// Power of ten between the display amount and the integer unit this
    /// gateway's API expects for `currency`.
    ///
    /// Stripe charges USD in cents and everything else in major units.
    /// Midtrans charges IDR in rupiah and everything else in cents.
    pub fn minor_unit_exponent(&self, currency: Currency) -> u32 {
        match (self, currency) {
            (Gateway::Stripe, Currency::USD) => 2,
            (Gateway::Stripe, _) => 0,
            (Gateway::Midtrans, Currency::IDR) => 0,
            (Gateway::Midtrans, _) => 2,
        }
    }
}

impl std::fmt::Display for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gateway {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "stripe" => Ok(Gateway::Stripe),
            "midtrans" => Ok(Gateway::Midtrans),
            _ => Err(AppError::validation(format!("Unknown payment gateway: {}", s))),
        }
    }
}
