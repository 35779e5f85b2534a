//! Character Search Proxy
//!
//! Forwards `GET /api/character?search=<name>` to the external character
//! API (`GET {base}/character/?name=<name>`). Successful and client-error
//! answers are passed back with their status and body unchanged; transport
//! failures, upstream 5xx and bodies that are not JSON become 502.
//!
//! - **`client`** - `CharacterClient`, the outbound HTTP call
//! - **`handlers`** - The public route handler

/// Outbound HTTP client
pub mod client;

/// HTTP handler
pub mod handlers;

pub use client::CharacterClient;
pub use handlers::{search_characters, CharacterQuery};
