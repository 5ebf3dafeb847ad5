mod runner;
mod types;

pub use runner::{event_names, read_defaults, read_script, run_script, ScriptError};
pub use types::{Operation, StepReport};
