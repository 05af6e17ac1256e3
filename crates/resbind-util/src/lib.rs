#![forbid(unsafe_code)]
//! Filesystem and hashing helpers for resbind.

pub mod error;
pub mod fs;
pub mod hash;
