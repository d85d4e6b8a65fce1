//! Durable storage contracts for the shell.

pub mod prefs;
