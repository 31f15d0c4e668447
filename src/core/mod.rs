//! Core domain logic for pmtask
//!
//! This module contains the domain types and services. All remote
//! interactions are abstracted through the port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (NestedValue, Task, Project, ApiResponse)
//! - `services/` - Pruning, ordering, lookup, and orchestration flows
//! - `ports/` - Trait definition for the remote API

pub mod models;
pub mod ports;
pub mod services;
