//! Hero Record Store Library
//!
//! This library crate defines the core modules that make up the hero record
//! store. It serves as the foundation for the server binary (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`collection`**: The in-memory data model. An ordered list of opaque
//!   hero records with indexed read access and whole-collection replacement.
//! - **`selector`**: The daily-pick logic. Maps a UTC calendar date to a
//!   collection index through a pinned digest so that every client sees the
//!   same record on a given day, with no server-side scheduling.
//! - **`storage`**: The persistence layer. Translates the collection to and
//!   from a single JSON backing file and guards the cached copy for
//!   concurrently handled readers and writers.
//! - **`service`**: The HTTP boundary. Axum handlers for the public
//!   operations, their wire DTOs, and the CORS layer for the browser
//!   front-end.

pub mod collection;
pub mod selector;
pub mod service;
pub mod storage;
