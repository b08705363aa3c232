//! Database repositories
//!
//! Repository pattern for database access, separating data access logic
//! from the HTTP handlers. One module per table, plus the transactional
//! demo seed.

pub mod coachees;
pub mod seed;
pub mod sessions;
pub mod sources;
