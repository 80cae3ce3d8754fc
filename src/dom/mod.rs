pub mod document;
pub mod parse;
pub mod query;
