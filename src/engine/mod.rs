pub mod conflict_resolver;
pub mod matcher;
pub mod normalizer;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod utils;
