//! neuryx-web — HTTP surface for the risk-scoring service.
//! Provides:
//!   - Per-domain prediction endpoints
//!   - Service health with per-domain model status
//!   - TOML configuration with environment override

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
