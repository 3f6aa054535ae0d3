use super::gateway::Gateway;
use crate::core::{AppError, Result};
use serde::{Deserialize, Serialize};

/// UI variant the dashboard renders for a gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    #[default]
    Card,
    CardDialog,
    BuyCredits,
    Logo,
}

impl ComponentType {
    pub const ALL: [ComponentType; 4] = [
        ComponentType::Card,
        ComponentType::CardDialog,
        ComponentType::BuyCredits,
        ComponentType::Logo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Card => "card",
            ComponentType::CardDialog => "cardDialog",
            ComponentType::BuyCredits => "buyCredits",
            ComponentType::Logo => "logo",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ComponentType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        ComponentType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown component type: {}", s)))
    }
}

/// Component table. Every gateway ships all four variants.
pub fn component_name(gateway: Gateway, component: ComponentType) -> &'static str {
    match (gateway, component) {
        (Gateway::Stripe, ComponentType::Card) => "StripeCard",
        (Gateway::Stripe, ComponentType::CardDialog) => "StripeCardDialog",
        (Gateway::Stripe, ComponentType::BuyCredits) => "BuyCreditsStripe",
        (Gateway::Stripe, ComponentType::Logo) => "StripeLogo",
        (Gateway::Midtrans, ComponentType::Card) => "MidtransCard",
        (Gateway::Midtrans, ComponentType::CardDialog) => "MidtransCardDialog",
        (Gateway::Midtrans, ComponentType::BuyCredits) => "BuyCreditsMidtrans",
        (Gateway::Midtrans, ComponentType::Logo) => "MidtransLogo",
    }
}
