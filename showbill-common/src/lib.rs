//! # Showbill Common Library
//!
//! Shared code for the Showbill booking directory:
//! - Database schema, models and queries
//! - Genre text codec
//! - Start-time parsing and upcoming/past classification
//! - Configuration loading
//! - Error types

pub mod config;
pub mod db;
pub mod error;
pub mod genres;
pub mod time;

pub use error::{Error, Result};
