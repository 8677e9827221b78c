pub mod health;
pub mod parser;
pub mod program;
pub mod reporting;
