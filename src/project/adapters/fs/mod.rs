//! Filesystem-backed adapters.
//!
//! Storage opens a capability handle on its directory at construction time
//! and never touches paths outside it.

mod storage;

pub use storage::FsProjectStorage;
