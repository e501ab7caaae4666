pub mod rebalancing_model;


pub use rebalancing_model::*;
