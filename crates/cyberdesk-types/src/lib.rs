//! Foundation types for CYBERDESK.
//!
//! This crate contains the types shared by the interpreter and its hosts:
//! the error enum, the profile record that drives the command set, host
//! configuration, and platform-agnostic terminal events.

pub mod config;
pub mod error;
pub mod input;
pub mod profile;
