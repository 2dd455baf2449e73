//! Combinators over existing sequences.
//!
//! This module provides [`map`], which lazily transforms a sequence, and
//! [`all`], which tests it with short-circuiting.

mod all;
mod map;

pub use all::*;
pub use map::*;
