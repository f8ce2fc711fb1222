pub mod db;
pub mod repositories;
pub mod schemas;
pub mod services;
pub mod store;

pub(crate) mod core;

#[cfg(test)]
mod test_support;

pub use store::{Store, StoreError};
