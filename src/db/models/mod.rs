//! This module contains all the sqlx structs for the database tables.

/// sqlx structs for question table.
pub mod question;
