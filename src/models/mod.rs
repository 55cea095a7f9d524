pub mod asset;
pub mod price;

pub use asset::Asset;
pub use price::{parse_price_table, PriceSnapshot, PriceTable};
