//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls and pure queries into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod dinner_service;
