pub mod models;
pub mod services;

pub use models::{ComponentType, Gateway, Team};
pub use services::{CheckoutPlan, CheckoutRequest, GatewaySelector};
