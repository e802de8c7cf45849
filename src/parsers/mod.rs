pub mod js;

pub use js::parse_source;
