use crate::core::error::{AppError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-breaking space used between an ISO code prefix and the digits
const CODE_SEPARATOR: char = '\u{a0}';

/// ISO 4217 code outside the named set: three uppercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    fn parse(s: &str) -> Option<Self> {
        let bytes: [u8; 3] = s.as_bytes().try_into().ok()?;
        bytes
            .iter()
            .all(u8::is_ascii_uppercase)
            .then_some(Self(bytes))
    }

    pub fn as_str(&self) -> &str {
        // only ever built from ASCII letters
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// Currencies with their display precision rules. Codes without a named
/// variant are carried as `Other` and follow the two-decimal rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    /// Indonesian Rupiah (no decimal places)
    IDR,
    /// Malaysian Ringgit (2 decimal places)
    MYR,
    /// Singapore Dollar (2 decimal places)
    SGD,
    /// US Dollar (2 decimal places)
    USD,
    /// Euro (2 decimal places)
    EUR,
    /// Pound Sterling (2 decimal places)
    GBP,
    /// Any other ISO 4217 code (2 decimal places)
    Other(CurrencyCode),
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::IDR,
        Currency::MYR,
        Currency::SGD,
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Currency::IDR => "IDR",
            Currency::MYR => "MYR",
            Currency::SGD => "SGD",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::Other(code) => code.as_str(),
        }
    }

    /// Returns the display scale for this currency
    /// - IDR: 0 (no decimals)
    /// - everything else: 2
    pub fn scale(&self) -> u32 {
        match self {
            Currency::IDR => 0,
            _ => 2,
        }
    }

    /// Rounds half away from zero to the display scale
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp_with_strategy(self.scale(), RoundingStrategy::MidpointAwayFromZero)
    }

    /// Validates that a decimal value has the correct scale for this currency
    pub fn validate_amount(&self, amount: Decimal) -> Result<()> {
        let scale = amount.normalize().scale();
        let expected_scale = self.scale();

        if scale > expected_scale {
            return Err(AppError::validation(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self, expected_scale, scale
            )));
        }

        if amount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "{} amount cannot be negative",
                self
            )));
        }

        Ok(())
    }

    /// Formats an amount using en-US conventions: comma grouping, a
    /// symbol or ISO code prefix, and the currency's fraction digits.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = self.round(amount);
        let digits = format!("{:.*}", self.scale() as usize, rounded.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + 8);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        match self {
            Currency::USD => out.push('$'),
            Currency::EUR => out.push('€'),
            Currency::GBP => out.push('£'),
            _ => {
                out.push_str(self.as_str());
                out.push(CODE_SEPARATOR);
            }
        }
        out.push_str(&group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    /// Codes are matched exactly; `"idr"` is not a currency code.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "IDR" => Ok(Currency::IDR),
            "MYR" => Ok(Currency::MYR),
            "SGD" => Ok(Currency::SGD),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            other => CurrencyCode::parse(other)
                .map(Currency::Other)
                .ok_or_else(|| AppError::validation(format!("Invalid currency: {}", s))),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_str().to_string()
    }
}

impl TryFrom<&str> for Currency {
    type Error = AppError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}
