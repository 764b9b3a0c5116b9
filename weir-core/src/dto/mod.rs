//! Data Transfer Objects exchanged with the platform backend
//!
//! This module contains the wire shapes the backend returns for editor
//! operations. They are lightweight representations optimized for network
//! transfer and carry no editor state.

pub mod status;
