//! quotation-export
//!
//! Single-page PDF rendering for vehicle-transport quotations.

pub mod assets;
pub mod config;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod output;
pub mod pdf;
pub mod styles;

pub use pdf::{DateSource, Renderer};
