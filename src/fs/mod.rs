//! Filesystem utilities for stylecfg.

pub mod atomic;

pub use atomic::atomic_write_file;
