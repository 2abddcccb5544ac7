pub mod order;
pub mod product;
pub mod setting;
pub mod taxonomy;
