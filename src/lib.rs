//! Chromatch - color naming and standard-system matching
//!
//! HTTP and WebSocket service around `color-core`: catalog loading,
//! color reports, name autocomplete and the vendor-file importer.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
