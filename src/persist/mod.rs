pub mod error;
pub mod options;
pub mod session;
pub mod store;
