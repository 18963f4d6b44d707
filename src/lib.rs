//! # Recapp
//!
//! Recapp collects submitted "questions": a name, a free-text body, a link
//! to the repository the question is about, and a link to a live demo. The
//! crate ships the HTTP service that persists and lists submissions, the
//! submission form used to collect the four values on the client side, and
//! a CLI that runs either end.

// =========================================================================
//                  Canonical lints for whole crate
// =========================================================================
// We set base lints to give the fullest, most pedantic feedback possible.
// Though we prefer that they are just warnings during development so that
// build-denial is only enforced in CI.
#![warn(
    // `clippy::all` is already on by default
    clippy::all,
    // It's always good to write as much documentation as possible
    missing_docs,
    // > clippy::pedantic lints which are rather strict or might have false positives
    clippy::pedantic,
    // > new lints that are still under development
    // (so "nursery" doesn't mean "Rust newbies")
    clippy::nursery,
    // > helps improve the Cargo.toml manifest
    clippy::cargo
)]
// =========================================================================
//   Individually blanket-allow single lints relevant to this whole crate
// =========================================================================
#![allow(clippy::implicit_return, reason = "This is idiomatic Rust")]
#![allow(
    clippy::multiple_crate_versions,
    reason = "Transitive deps of actix-web and sqlx pin diverging versions"
)]
#![allow(
    clippy::question_mark_used,
    reason = "We rely on propagating errors with question mark extensively"
)]
#![allow(
    clippy::mod_module_files,
    reason = "mod.rs is the convention in this codebase"
)]

pub mod db;
pub mod form;
pub mod server;
pub mod utils;
