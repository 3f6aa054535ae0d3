//! Payroute payment gateway routing library
//!
//! Picks the payment gateway for a team (Stripe or Midtrans), selects the
//! matching UI component, and converts amounts into the units each
//! gateway's API expects.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, Currency, Result};
pub use modules::gateways;
pub use modules::gateways::{
    CheckoutPlan, CheckoutRequest, ComponentType, Gateway, GatewaySelector, Team,
};
