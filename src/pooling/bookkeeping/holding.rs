use std::rc::Rc;

use tracing::Level;

use crate::log::DiagHandle;
use crate::pooling::{
    DisposalMatch, MatchRule, PoolingError, Security, SubTransaction,
};

use super::pool::PoolState;

/// The pool engine for a single security.
///
/// Owns the security's PoolState and is its only mutation path. The
/// caller must feed sub-transactions in chronological order, after the
/// upstream rules have taken their portions. Acquisitions always
/// succeed; a disposal larger than the held amount is rejected without
/// touching the state.
pub struct Holding {
    security: Security,
    state: PoolState,
    diag: DiagHandle,
}

impl Holding {
    pub fn new(security: Security, diag: DiagHandle) -> Holding {
        Holding {
            security,
            state: PoolState::new(),
            diag,
        }
    }

    pub fn security(&self) -> &Security {
        &self.security
    }

    pub fn state(&self) -> &PoolState {
        &self.state
    }

    pub fn process_acquisition(&mut self, acquisition: &SubTransaction) {
        assert_eq!(
            acquisition.security, self.security,
            "process_acquisition: securities do not match ({} and {})",
            acquisition.security, self.security
        );

        self.diag.record(
            Level::DEBUG,
            &format!("Pool {} +++: {}", self.security, acquisition),
        );
        self.state
            .add(acquisition.amount.into(), acquisition.total_cost());
        self.diag
            .record(Level::DEBUG, &format!("  New state: {}", self.state));
    }

    /// Matches a disposal against the pool.
    ///
    /// The returned match carries the pool's amount and cost basis from
    /// immediately before the removal. On failure the state is left
    /// byte-for-byte untouched, so the caller may correct its input and
    /// resume.
    pub fn process_disposal(
        &mut self,
        disposal: &Rc<SubTransaction>,
    ) -> Result<DisposalMatch, PoolingError> {
        assert_eq!(
            disposal.security, self.security,
            "process_disposal: securities do not match ({} and {})",
            disposal.security, self.security
        );

        self.diag.record(
            Level::DEBUG,
            &format!("Pool {} ---: {}", self.security, disposal),
        );

        if *self.state.amount() < *disposal.amount {
            return Err(PoolingError::InvalidDisposalVolume {
                security: self.security.clone(),
                requested: disposal.amount,
                held: self.state.amount(),
            });
        }

        let disposal_match = DisposalMatch::new(
            MatchRule::Pool,
            self.state.amount(),
            self.state.cost_basis(),
            disposal.clone(),
        );

        self.state.remove(disposal.amount);
        self.diag
            .record(Level::DEBUG, &format!("  New state: {}", self.state));

        Ok(disposal_match)
    }
}
