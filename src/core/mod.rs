//! Core domain logic for flowbuild
//!
//! This module contains pure business logic with no I/O dependencies beyond
//! the build directory the pipeline creates. External programs are reached
//! through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Reference, Settings, Options, Recipe)
//! - `services/` - Resolution, flag computation, pipeline orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
