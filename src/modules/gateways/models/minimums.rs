use super::gateway::Gateway;
use crate::core::Currency;
use rust_decimal::Decimal;

/// Smallest chargeable amount, in display units, for a gateway/currency
/// pair. Pairs outside the table return `None`.
pub fn minimum_charge(gateway: Gateway, currency: Currency) -> Option<Decimal> {
    match (gateway, currency) {
        (Gateway::Stripe, Currency::USD) => Some(Decimal::new(50, 2)),
        (Gateway::Stripe, Currency::IDR) => Some(Decimal::new(1000, 0)),
        (Gateway::Midtrans, Currency::USD) => Some(Decimal::new(100, 2)),
        (Gateway::Midtrans, Currency::IDR) => Some(Decimal::new(1000, 0)),
        _ => None,
    }
}
