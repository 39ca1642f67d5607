//! The `catalog_api` library crate.
//!
//! Contains the domain models, persistence layer, authentication mechanisms,
//! routing configuration and error handling for the catalog API. The binary
//! (`main.rs`) wires these pieces together and runs the server.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
