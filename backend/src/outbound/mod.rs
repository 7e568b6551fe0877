//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL Entity Store using Diesel
//! - **memory**: in-process Entity Store for development and tests
//! - **credentials**: Argon2 password hashing
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod credentials;
pub mod memory;
pub mod persistence;
