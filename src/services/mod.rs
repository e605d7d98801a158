//! Service layer: orchestration of the synchronization run.

pub mod sync;

pub use sync::ReleaseSynchronizer;
