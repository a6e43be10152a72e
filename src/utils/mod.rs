pub mod extractors;
pub mod parse;
