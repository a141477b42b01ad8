//! # atelier-api
//!
//! Typed wire records for the IDE-backend REST API: client-side views of
//! the JSON payloads the backend exchanges over HTTP. Every record is a
//! `dto!` instantiation — hydration from an untyped payload, typed
//! accessors with fluent `with_*` setters, and truthiness-gated
//! re-serialization via `to_json`.
//!
//! This crate carries shapes only. The HTTP client that moves these
//! payloads, and any validation of their contents, live with the consumer.

pub mod debug;
pub mod events;
pub mod factory;
pub mod git;
pub mod links;
pub mod machine;
pub mod project;
pub mod stack;
pub mod user;
pub mod workspace;
