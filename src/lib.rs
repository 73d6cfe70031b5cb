//! crowdfund-backend - backend for a single-campaign crowdfunding site
//!
//! Stores one campaign record plus monetary contributions in a document
//! store and exposes them over a small JSON HTTP API.

pub mod config;
pub mod http_server;
pub mod schema;
pub mod store;
