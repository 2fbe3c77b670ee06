//! End-to-end verification flow
//!
//! Drives the presentation service through create, list, open and save,
//! checking status codes and required fields at each step and stopping on
//! the first failure.

/// `println!` onto a [`Console`]
macro_rules! say {
    ($console:expr) => {
        $console.line(format_args!(""))
    };
    ($console:expr, $($arg:tt)*) => {
        $console.line(format_args!($($arg)*))
    };
}

pub mod confirm;
pub mod console;
pub mod fixture;
mod runner;
pub mod steps;

pub use confirm::{AlwaysConfirm, Confirm, NeverConfirm, PromptConfirm};
pub use console::Console;
pub use runner::{run_flow, verify, RunOptions, RunReport, Stage};
pub use steps::CleanupOutcome;
