//! relay_service - Backend relay for the chat application
//!
//! Receives a user message on `POST /api/chat`, forwards it to the
//! vendor completion API with a fixed two-turn prompt, and relays the
//! text reply back. Vendor faults never leak to the client body.

pub mod config;
pub mod controllers;
pub mod error;
pub mod server;
pub mod services;

pub use config::RelayConfig;
pub use error::{RelayError, Result};
pub use server::AppState;
