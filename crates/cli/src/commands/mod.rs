//! CLI command implementations

mod run;
mod validate;

pub use run::run_connector;
pub use validate::run_validate;
