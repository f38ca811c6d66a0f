//! Smart Irrigation HTTP Server
//!
//! Axum surface around the prediction engine. The router is built here (and
//! not in `main.rs`) so integration tests can drive it in-process without
//! binding a socket.
//!
//! # Service Topology
//!
//! Single service exposing:
//! - `/` - Static browser page for manual predictions
//! - `/predict` - ON/OFF irrigation decisions for the three parcels
//! - `/health` - Health check endpoint
//!
//! All other routes answer 404 with the uniform error body.

pub mod app;
pub mod config;
pub mod error;

pub use app::{router, AppState};
pub use config::Config;
pub use error::ApiError;
