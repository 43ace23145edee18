//! Where step results are shown
//!
//! A check writes a status and a toast; an advance may instead navigate.
//! Both sides are traits so the same step logic drives the terminal
//! front end and the in-memory fields used by embedders and tests.

mod fields;
mod navigator;

pub use fields::{CheckFields, CheckOutput, FieldValues, TerminalOutput};
pub use navigator::{Navigator, PrintNavigator, RecordingNavigator};
