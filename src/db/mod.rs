pub(crate) mod keys;
pub mod models;
pub mod seed;
pub mod types;
