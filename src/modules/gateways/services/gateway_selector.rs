use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use super::fallback::lookup_with_fallback;
use crate::config::GatewayConfig;
use crate::core::{AppError, Currency, Result};
use crate::modules::gateways::models::{
    component_name, minimum_charge, ComponentType, Gateway, Team,
};

/// Minimum used when neither the requested nor the default gateway has an
/// entry for the currency
const FALLBACK_MINIMUM: Decimal = Decimal::ONE;

/// Routes teams to a payment gateway and converts amounts into the units
/// each gateway's API expects.
///
/// Operations that take `Option<Gateway>` treat `None` as a gateway value
/// the host supplied but that is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GatewaySelector {
    default_gateway: Gateway,
}

impl GatewaySelector {
    pub fn new(default_gateway: Gateway) -> Self {
        Self { default_gateway }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.default_gateway)
    }

    pub fn default_gateway(&self) -> Gateway {
        self.default_gateway
    }

    pub fn set_default_gateway(&mut self, gateway: Gateway) {
        self.default_gateway = gateway;
    }

    /// Overwrites the default if `value` names a gateway. Unknown values
    /// leave the default untouched; the return value reports which
    /// happened.
    pub fn set_default_gateway_str(&mut self, value: &str) -> bool {
        match value.parse::<Gateway>() {
            Ok(gateway) => {
                self.default_gateway = gateway;
                true
            }
            Err(_) => {
                debug!(value = %value, "Ignoring unknown default gateway");
                false
            }
        }
    }

    /// Picks the gateway for a team: explicit preference, then currency,
    /// then the configured default.
    pub fn resolve_gateway(&self, team: &Team) -> Gateway {
        if let Some(preference) = team.payment_gateway.as_deref().filter(|p| !p.is_empty()) {
            match preference.parse::<Gateway>() {
                Ok(gateway) => return gateway,
                Err(_) => warn!(
                    payment_gateway = %preference,
                    "Team has unknown payment gateway, routing by currency"
                ),
            }
        }

        match team.parsed_currency() {
            Some(Currency::IDR) => Gateway::Midtrans,
            // USD is kept as its own rule so it can move to Stripe independently
            Some(Currency::USD) => Gateway::Midtrans,
            _ => self.default_gateway,
        }
    }

    /// Both gateways are enabled for every team
    pub fn is_gateway_available(&self, _gateway: Gateway, _team: &Team) -> bool {
        true
    }

    pub fn select_component(
        &self,
        gateway: Option<Gateway>,
        component: ComponentType,
    ) -> &'static str {
        component_name(gateway.unwrap_or(self.default_gateway), component)
    }

    pub fn format_amount(&self, amount: Decimal, currency: Currency) -> String {
        currency.format_amount(amount)
    }

    pub fn minimum_amount(&self, currency: Currency, gateway: Option<Gateway>) -> Decimal {
        lookup_with_fallback(gateway, self.default_gateway, |g| minimum_charge(g, currency))
            .unwrap_or(FALLBACK_MINIMUM)
    }

    /// Converts a display amount into the integer unit the gateway's API
    /// expects, rounding half away from zero. An unrecognized gateway gets
    /// the amount rounded without scaling.
    pub fn normalize_amount(
        &self,
        amount: Decimal,
        currency: Currency,
        gateway: Option<Gateway>,
    ) -> Result<i64> {
        let exponent = gateway.map_or(0, |g| g.minor_unit_exponent(currency));
        let scaled = amount
            .checked_mul(Decimal::from(10_i64.pow(exponent)))
            .ok_or(AppError::AmountOutOfRange { amount })?;

        scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(AppError::AmountOutOfRange { amount })
    }

    /// Inverse of [`normalize_amount`](Self::normalize_amount): turns a
    /// gateway API amount back into display units.
    pub fn to_major_units(
        &self,
        minor: i64,
        currency: Currency,
        gateway: Option<Gateway>,
    ) -> Decimal {
        let exponent = gateway.map_or(0, |g| g.minor_unit_exponent(currency));
        Decimal::new(minor, exponent)
    }

    /// Checks that `amount` can be charged through `gateway`.
    pub fn validate_charge(
        &self,
        amount: Decimal,
        currency: Currency,
        gateway: Gateway,
    ) -> Result<()> {
        currency.validate_amount(amount)?;

        let minimum = self.minimum_amount(currency, Some(gateway));
        if amount < minimum {
            return Err(AppError::validation(format!(
                "Minimum {} payment via {} is {}",
                currency,
                gateway,
                currency.format_amount(minimum)
            )));
        }

        Ok(())
    }
}
