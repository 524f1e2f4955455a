//! Profile service implementation.
//!
//! This crate provides the [`ProfileService`], the concrete
//! [`ProfileManager`] the gateway dispatches to. Core types are
//! re-exported from `baseline_core`.
//!
//! [`ProfileManager`]: baseline_core::ProfileManager

pub mod service;

pub use service::ProfileService;
