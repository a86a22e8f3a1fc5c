pub mod converter;
pub mod mixer;
