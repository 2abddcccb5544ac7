pub mod classifier;
pub mod order;
pub mod pricing;
pub mod product;
pub mod settings;
pub mod taxonomy;
