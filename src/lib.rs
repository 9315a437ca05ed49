pub mod log;
pub mod pooling;
pub mod tracing;
pub mod util;

#[cfg(test)]
mod testlib;
