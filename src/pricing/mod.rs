mod catalog;
mod resolver;
mod types;

pub(crate) use catalog::{ModelCatalog, load_pricing_file};
pub(crate) use types::PricingTable;
