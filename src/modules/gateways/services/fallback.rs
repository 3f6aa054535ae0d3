use crate::modules::gateways::models::Gateway;

/// Two-level table lookup: the requested gateway's entry, then the
/// default gateway's entry. `requested` is `None` when the caller's
/// gateway value was not recognized.
pub fn lookup_with_fallback<T>(
    requested: Option<Gateway>,
    default_gateway: Gateway,
    lookup: impl Fn(Gateway) -> Option<T>,
) -> Option<T> {
    requested
        .and_then(&lookup)
        .or_else(|| lookup(default_gateway))
}
