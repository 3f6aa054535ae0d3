pub mod currency;
pub mod error;

pub use currency::{Currency, CurrencyCode};
pub use error::{AppError, Result};
