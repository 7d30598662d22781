//! CLI command implementations

pub mod fixtures;
pub mod inspect;
pub mod silence;
pub mod speech;
pub mod tone;

mod reporting;

pub use reporting::RenderReport;
