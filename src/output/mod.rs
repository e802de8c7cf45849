pub mod merge;
pub mod render;
pub mod target;
pub mod type_defs;
pub mod write;

pub use target::{Format, OutputTarget, TargetKind, resolve_output_target};
