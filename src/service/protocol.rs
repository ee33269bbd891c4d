//! Service Wire Protocol
//!
//! Defines the public API endpoints and the Data Transfer Objects returned
//! to clients.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Public endpoint returning the deterministic pick for the current UTC day.
pub const ENDPOINT_DAILY_HERO: &str = "/daily_hero";
/// Public endpoint returning the full collection.
pub const ENDPOINT_HEROES: &str = "/heroes";
/// Public endpoint replacing the whole collection.
pub const ENDPOINT_SAVE_HEROES: &str = "/save_heroes";

// --- Data Transfer Objects ---

/// Acknowledgement for replace requests.
///
/// `{"ok": true}` when the new collection was persisted; `{"ok": false,
/// "error": ...}` with the parse or storage error message when it was not.
/// On failure the prior collection and backing file are left untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
