//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `files/` - Local files turned into tasks for sync
//! - `http/` - REST client for the project-management API

pub mod files;
pub mod http;
