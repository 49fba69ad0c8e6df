//! Multidb Server - HTTP surface over three heterogeneous user stores
//!
//! Exposes one save/list endpoint pair per configured backend, a health
//! endpoint probing every backend, and the startup plumbing (configuration,
//! logging, graceful shutdown).

pub mod api;
pub mod model;
pub mod startup;
