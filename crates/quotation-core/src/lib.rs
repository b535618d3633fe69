//! quotation-core
//!
//! Pure domain types and the form adapter for vehicle-transport quotations.
//! No filesystem or PDF dependency. This is the shared vocabulary between
//! the HTTP service and the document renderer.

pub mod adapter;
pub mod error;
pub mod form;
pub mod models;
