use crate::util::decimal::{GreaterEqualZeroDecimal, PosDecimal};

use super::model::sub_tx::Security;

/// Failures reported by the pool engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolingError {
    /// A disposal asked for more units than the pool currently holds.
    /// This means the upstream rules fed transactions out of
    /// chronological order, or routed a disposal here before its
    /// same-day/bed-and-breakfast portions were subtracted. Retrying
    /// with the same input would fail identically, so the calculation
    /// for this security should stop.
    #[error(
        "disposal of {requested} units of {security} exceeds the {held} units held in the pool"
    )]
    InvalidDisposalVolume {
        security: Security,
        requested: PosDecimal,
        held: GreaterEqualZeroDecimal,
    },
}
