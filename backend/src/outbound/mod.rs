//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **persistence**: PostgreSQL repositories built on Diesel.

pub mod persistence;
