//! Output side of a run: the sinks reports are written to and the report formats.

pub mod report;
pub mod tee;
