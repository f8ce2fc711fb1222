pub mod attempt;
pub mod class;
pub mod organization;
pub mod quiz;
pub mod stats;
pub mod user;
