use std::io::{self, Read};
use std::process::ExitCode;

use payroute::config::Config;
use payroute::{AppError, CheckoutRequest, GatewaySelector};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    // Initialize tracing; stdout is reserved for the plan
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("payroute={}", config.app.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!("Environment: {}", config.app.env);
    tracing::debug!("Default gateway: {}", config.gateways.default_gateway);

    let selector = GatewaySelector::from_config(&config.gateways);

    match run(&selector) {
        Ok(plan) => {
            println!("{}", plan);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Checkout planning failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(selector: &GatewaySelector) -> Result<String, AppError> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| AppError::internal(format!("Failed to read stdin: {}", e)))?;

    let request: CheckoutRequest = serde_json::from_str(&input)?;
    let plan = selector.plan_checkout(&request)?;

    Ok(serde_json::to_string_pretty(&plan)?)
}
