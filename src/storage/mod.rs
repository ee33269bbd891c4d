//! Persistent Storage Module
//!
//! Translates the hero collection to and from its single JSON backing file
//! and guards the in-memory copy against concurrently handled requests.
//!
//! ## Core Concepts
//! - **Backing file**: one JSON array, UTF-8, 2-space indented, non-ASCII
//!   left unescaped. The sole persisted state of the service.
//! - **Soft-fail load**: a missing, unreadable, or malformed file loads as
//!   the empty collection. The service boots before the file ever exists.
//! - **Atomic save**: new content is fully prepared in a sibling temp file
//!   and renamed over the target; a failed save leaves the prior file intact.
//! - **Snapshots**: readers take cheap `Arc` snapshots of the cached
//!   collection and are never torn by a concurrent replace. Writers are
//!   serialized, so at most one save runs against the file at a time.

pub mod file;
pub mod store;
