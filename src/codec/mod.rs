pub mod deserialize;
pub mod filter;
pub mod handler;
pub mod record_model;
pub mod serialize;
