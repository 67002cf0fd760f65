//! trainerhub-server: trainer listings, registration and booking requests
//!
//! Parents browse trainers and request sessions; trainers register
//! themselves. Everything is stored in a single SQLite file.

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod service;

pub use error::{Error, Result};
pub use http::{build_router, run_server, ServerConfig};
