mod engine;
mod interface;

pub mod errors;

pub use engine::{conflict_resolver, matcher, normalizer, report, scanner, stats, utils};
pub use interface::cli;
