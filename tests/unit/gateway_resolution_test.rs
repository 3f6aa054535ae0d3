// Property-based tests for gateway resolution
//
// - A recognized team preference always wins, whatever the currency
// - IDR and USD teams without a preference route to Midtrans; codes match exactly
// - Unrecognized preferences never leak out; resolution continues by currency
// - Unknown values passed to the default setter leave the default alone

use payroute::{Currency, Gateway, GatewaySelector, Team};
use proptest::prelude::*;

fn any_gateway() -> impl Strategy<Value = Gateway> {
    prop::sample::select(Gateway::ALL.to_vec())
}

fn any_currency_code() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(Currency::ALL.to_vec()).prop_map(|c| c.to_string()),
        "[A-Z]{3}",
        Just(String::new()),
    ]
}

fn unknown_gateway_name() -> impl Strategy<Value = String> {
    "[a-zA-Z_-]{1,16}".prop_filter("must not name a gateway", |s| s.parse::<Gateway>().is_err())
}

proptest! {
    #[test]
    fn test_preference_wins_over_currency(
        preference in any_gateway(),
        default_gateway in any_gateway(),
        currency in any_currency_code()
    ) {
        let selector = GatewaySelector::new(default_gateway);
        let team = Team::new()
            .with_payment_gateway(preference.as_str())
            .with_currency(currency);

        prop_assert_eq!(selector.resolve_gateway(&team), preference);
    }

    #[test]
    fn test_preference_is_case_insensitive(
        preference in any_gateway(),
        uppercase in any::<bool>()
    ) {
        let selector = GatewaySelector::default();
        let raw = if uppercase {
            preference.as_str().to_uppercase()
        } else {
            preference.as_str().to_string()
        };
        let team = Team::new().with_payment_gateway(raw);

        prop_assert_eq!(selector.resolve_gateway(&team), preference);
    }

    #[test]
    fn test_idr_and_usd_route_to_midtrans(
        default_gateway in any_gateway(),
        code in prop::sample::select(vec!["IDR", "USD"])
    ) {
        let selector = GatewaySelector::new(default_gateway);
        let team = Team::new().with_currency(code);

        prop_assert_eq!(selector.resolve_gateway(&team), Gateway::Midtrans);
    }

    #[test]
    fn test_other_currencies_use_default(
        default_gateway in any_gateway(),
        code in prop_oneof![
            prop::sample::select(vec!["MYR", "SGD", "EUR", "GBP"]).prop_map(String::from),
            "[A-Z]{3}".prop_filter("not routed by currency", |c| c.as_str() != "IDR" && c.as_str() != "USD"),
            "[a-z]{3}",
        ]
    ) {
        let selector = GatewaySelector::new(default_gateway);
        let team = Team::new().with_currency(code);

        prop_assert_eq!(selector.resolve_gateway(&team), default_gateway);
    }

    #[test]
    fn test_unknown_preference_resolves_like_no_preference(
        preference in unknown_gateway_name(),
        default_gateway in any_gateway(),
        currency in any_currency_code()
    ) {
        let selector = GatewaySelector::new(default_gateway);
        let with_unknown = Team::new()
            .with_payment_gateway(preference)
            .with_currency(currency.clone());
        let without = Team::new().with_currency(currency);

        prop_assert_eq!(
            selector.resolve_gateway(&with_unknown),
            selector.resolve_gateway(&without)
        );
    }

    #[test]
    fn test_unknown_default_is_ignored(
        initial in any_gateway(),
        value in unknown_gateway_name()
    ) {
        let mut selector = GatewaySelector::new(initial);

        prop_assert!(!selector.set_default_gateway_str(&value));
        prop_assert_eq!(selector.default_gateway(), initial);
        prop_assert_eq!(selector.resolve_gateway(&Team::new()), initial);
    }
}

#[test]
fn test_setting_midtrans_default_then_resolving_empty_team() {
    let mut selector = GatewaySelector::new(Gateway::Stripe);

    assert!(selector.set_default_gateway_str("midtrans"));
    assert_eq!(selector.resolve_gateway(&Team::new()), Gateway::Midtrans);

    assert!(!selector.set_default_gateway_str("bogus"));
    assert_eq!(selector.resolve_gateway(&Team::new()), Gateway::Midtrans);
}

#[test]
fn test_team_record_from_host_json() {
    let selector = GatewaySelector::new(Gateway::Stripe);
    let team: Team = serde_json::from_str(
        r#"{"name": "team-1", "payment_gateway": null, "currency": "IDR", "enabled": 1}"#,
    )
    .unwrap();

    assert_eq!(selector.resolve_gateway(&team), Gateway::Midtrans);
}
