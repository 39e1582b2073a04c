//! Scanner module.
//!
//! This module organizes the scanner implementation into focused components:
//! - `core` - Main Scanner struct and per-token dispatch
//! - `ident` - Identifier accumulation
//! - `number` - Integer literal accumulation
//! - `lookup` - Single-character token table

mod core;
mod ident;
mod lookup;
mod number;

pub use core::Scanner;
