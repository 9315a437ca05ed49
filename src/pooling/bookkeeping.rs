pub mod book;
pub mod holding;
pub mod pool;

pub use book::HoldingBook;
pub use holding::Holding;
pub use pool::PoolState;
