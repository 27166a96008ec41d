//! One fetch -> persist cycle and its structured outcome.

mod outcome;
mod runner;

pub use outcome::{CycleOutcome, CycleStep, StepResult};
pub use runner::{CycleRunner, CycleRunnerTrait};
