//! Foundation types for coinshell.
//!
//! This crate contains the types shared by the terminal core and the
//! binary: the error enum, shell configuration, and the text styles used
//! to paint console output.

pub mod config;
pub mod error;
pub mod style;
