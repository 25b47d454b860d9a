pub mod error;
pub mod pool;
