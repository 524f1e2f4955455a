//! HTTP gateway for the Baseline profile service.
//!
//! Exposes the health probe and the authenticated profile endpoints over
//! axum. Token verification is not performed here: the router consumes
//! verified claims installed into each request by the upstream verifier.

pub mod app;
pub mod auth;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
