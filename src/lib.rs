//! Stepwise - client for multi-step learning modules
//!
//! Checks the step a learner is on and advances modules to their next
//! step against a step server. The step logic is transport- and
//! front-end-agnostic; the `stepwise` binary wires it to reqwest and the
//! terminal.

pub mod api;
pub mod config;
pub mod logging;
pub mod steps;
pub mod ui;
