//! Command-line front end for the redundancy/fault model evaluator.
//!
//! Collects the four submission fields (from arguments or an interactive form),
//! hands them to [`faultcalc_core`] untouched and renders the outcome.

pub mod cli;
pub mod form;
pub mod logging;
pub mod output;
pub mod settings;
pub mod util;

pub use cli::{Args, Command, Status, default_data_dir, run};
pub use logging::init_logging;
pub use settings::Settings;
