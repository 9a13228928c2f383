// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Contact Extractor
//!
//! Pulls candidate email addresses and phone numbers out of free-form text,
//! and serves the extraction over a small HTTP API.
//!
//! # Features
//!
//! - Case-insensitive email matching, source casing preserved
//! - Phone numbers with optional country and area codes, reduced to digits
//! - Matches kept in order of appearance, duplicates included
//! - `POST /extract` endpoint with configurable CORS origins
//!
//! # Example
//!
//! ```rust
//! use contact_extract::extract;
//!
//! let result = extract("Mail jane.doe@example.com or call (212) 555-7890");
//!
//! assert_eq!(result.emails, vec!["jane.doe@example.com"]);
//! assert_eq!(result.phones, vec!["2125557890"]);
//! ```

pub mod config;
mod error;
mod extracted;
pub mod server;
mod types;

pub use error::{Result, ServiceError};
pub use extracted::*;
pub use types::*;
