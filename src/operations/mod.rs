pub mod clip;
pub mod query;
