use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::gateway_selector::GatewaySelector;
use crate::core::{AppError, Currency, Result};
use crate::modules::gateways::models::{ComponentType, Gateway, Team};

/// Checkout request as sent by the host UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub team: Team,

    /// Amount in display units
    pub amount: Decimal,

    #[serde(default)]
    pub component: ComponentType,
}

/// Everything the host needs to render and submit a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutPlan {
    pub gateway: Gateway,
    pub currency: Currency,
    pub component: &'static str,

    /// Amount formatted for display
    pub display_amount: String,

    /// Gateway minimum formatted for display
    pub display_minimum: String,

    /// Amount in the integer unit the gateway API expects
    pub gateway_amount: i64,
}

impl GatewaySelector {
    /// Resolves the gateway for the team and prepares the charge in the
    /// team's currency. Teams without a currency are charged in USD; a
    /// malformed currency code is rejected.
    pub fn plan_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutPlan> {
        let gateway = self.resolve_gateway(&request.team);
        let currency = match request.team.currency.as_deref().filter(|c| !c.is_empty()) {
            None => Currency::USD,
            Some(raw) => raw.parse().map_err(|_| {
                AppError::validation(format!("Unsupported team currency: {}", raw))
            })?,
        };

        self.validate_charge(request.amount, currency, gateway)?;

        let plan = CheckoutPlan {
            gateway,
            currency,
            component: self.select_component(Some(gateway), request.component),
            display_amount: self.format_amount(request.amount, currency),
            display_minimum: self.format_amount(self.minimum_amount(currency, Some(gateway)), currency),
            gateway_amount: self.normalize_amount(request.amount, currency, Some(gateway))?,
        };

        info!(
            gateway = %plan.gateway,
            currency = %plan.currency,
            gateway_amount = plan.gateway_amount,
            "Checkout planned"
        );

        Ok(plan)
    }
}
