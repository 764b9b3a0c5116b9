//! Weir Core
//!
//! Core types for the Weir pipeline editor toolkit.
//!
//! This crate contains:
//! - Domain types: Core editor entities (Pipeline, EdgeNode, etc.)
//! - DTOs: Data transfer objects exchanged with the platform backend

pub mod domain;
pub mod dto;
