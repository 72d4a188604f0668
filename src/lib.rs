pub mod catalog;
pub mod config;
pub mod error;

// Core engine
pub mod export;
pub mod filter;

// Presentation
pub mod api;
pub mod cli;
pub mod web;

// Utilities
pub mod utils;

// Re-exports
pub use catalog::RecipeRegistry;
pub use config::Settings;
pub use error::{Error, Result};
