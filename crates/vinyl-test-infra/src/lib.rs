//! Disposable MongoDB and Redis servers for integration tests.

pub mod error;
pub mod mongo;
pub mod redis;

pub use error::{Result, TestInfraError};
