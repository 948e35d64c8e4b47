//! Roster console library: configuration and table rendering for the
//! `roster` binary.

pub mod config;
pub mod error;
pub mod render;
