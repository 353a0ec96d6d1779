//! Read-only use-case services over the persisted collections.
//!
//! # Responsibility
//! - Derive home-screen content from the stored collections.
//! - Never write to the store.

pub mod dashboard_service;
