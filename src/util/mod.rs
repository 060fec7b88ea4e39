/// Basic thread pool utility.
pub mod thread_pool;

/// Utility for creating mock trait implementations.
#[cfg(test)]
pub mod mock;

/// Stream utility for combining Read and Write traits into one.
pub mod stream;
