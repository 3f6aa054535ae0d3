pub mod checkout;
pub mod fallback;
pub mod gateway_selector;

pub use checkout::{CheckoutPlan, CheckoutRequest};
pub use fallback::lookup_with_fallback;
pub use gateway_selector::GatewaySelector;
