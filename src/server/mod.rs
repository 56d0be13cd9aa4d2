//! Server application core modules.
//!
//! This module contains all server-side functionality for the Bufete application: HTTP
//! routing, configuration, database access, field validation and the services enforcing
//! the integrity rules between clients, attorneys, affairs and assignments.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod validation;
