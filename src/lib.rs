pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod nutrition;
pub mod quantity;
pub mod recipe;
pub mod validation;
