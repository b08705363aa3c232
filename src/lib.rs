//! Coaching tracker backend
//!
//! Record-keeping service for coaching work: sources (lead channels),
//! coachees and sessions, exposed as CRUD endpoints over PostgreSQL plus
//! a transactional demo-seed operation.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
