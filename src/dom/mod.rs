pub mod classifier;
pub mod dom_model;
