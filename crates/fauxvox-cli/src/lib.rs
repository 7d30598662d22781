//! fauxvox CLI library.
//!
//! Orchestration around `fauxvox-audio`: the fixture catalog, transcript and
//! manifest JSON, directory layout, and the command implementations.

pub mod catalog;
pub mod commands;
pub mod logging;
