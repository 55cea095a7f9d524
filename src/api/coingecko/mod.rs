pub mod rest;

pub use rest::{CoinGeckoClient, Endpoint};
