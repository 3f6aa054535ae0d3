use crate::core::{AppError, Result};
use crate::modules::gateways::Gateway;
use serde::Deserialize;
use std::env;

/// Gateway routing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    pub default_gateway: Gateway,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_value(env::var("DEFAULT_PAYMENT_GATEWAY").ok().as_deref())
    }

    /// Unset or blank falls back to Midtrans; anything else must name a
    /// known gateway.
    pub fn from_value(value: Option<&str>) -> Result<Self> {
        let default_gateway = match value.map(str::trim) {
            None | Some("") => Gateway::default(),
            Some(raw) => raw.parse().map_err(|_| {
                AppError::configuration(format!("Invalid DEFAULT_PAYMENT_GATEWAY: {}", raw))
            })?,
        };

        Ok(Self { default_gateway })
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            default_gateway: Gateway::default(),
        }
    }
}
