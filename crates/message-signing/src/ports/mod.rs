//! # Ports Layer
//!
//! Trait definitions for the subsystem's inbound API and its outbound
//! collaborators.

pub mod inbound;
pub mod outbound;
