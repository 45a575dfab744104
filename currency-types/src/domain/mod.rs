//! Domain models for the exchange rate lookup.

pub mod currency;
pub mod query;
pub mod rate;

pub use currency::CurrencyCode;
pub use query::{DateOrLatest, RateQuery};
pub use rate::RateResult;
