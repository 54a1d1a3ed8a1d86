//! Employee Portal
//!
//! This crate manages in-memory employee accounts: it creates accounts with
//! generated credentials, enforces the password strength policy, tracks a
//! weekly timesheet and computes gross pay from the minutes logged.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod credentials;
pub mod directory;
pub mod error;
pub mod models;
