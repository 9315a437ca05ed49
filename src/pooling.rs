pub mod bookkeeping;
pub mod error;
pub mod model;

pub use self::error::*;
pub use self::model::matching::*;
pub use self::model::sub_tx::*;
