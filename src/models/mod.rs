//! API-facing types
//!
//! Response shapes serialize with camelCase field names; request payloads
//! model optional fields as `Option` and are coalesced to defaults at the
//! SQL layer.

pub mod coachee;
pub mod session;
pub mod source;

pub use coachee::Coachee;
pub use session::Session;
pub use source::Source;
