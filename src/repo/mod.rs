//! Data access. One module per entity; handlers never hold SQL.
//!
//! "Not found" is `None` (via `fetch_optional`), never an error, so the
//! API layer decides the response code.

pub mod events;
pub mod medications;
pub mod pets;
pub mod reminders;
pub mod vaccinations;
pub mod weights;
