//! Campus Hub admin dashboard state core.
//!
//! This crate provides the client-side application state container for the
//! Campus Hub admin dashboard: a reducer-based state store with change
//! listeners, a persistence bridge that mirrors UI preferences to a single
//! durable blob, an independent self-expiring toast queue, and the static
//! page registry consumed by display layers.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
)]

/// Configuration: storage location, admin profile, seed data
pub mod config;
/// Unified error types and result handling
pub mod errors;
/// Domain types: user, notifications, settings, toasts
pub mod models;
/// Static page registry and page view-model
pub mod pages;
/// Persistence bridge: storage adapters and the persisted projection
pub mod persist;
/// Application state shape, actions, and the pure reducer
pub mod state;
/// The state store: dispatch, snapshots, change listeners
pub mod store;
/// Transient toast queue with self-expiring entries
pub mod toast;

#[cfg(test)]
pub mod test_utils;
