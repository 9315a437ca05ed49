use std::collections::HashMap;
use std::rc::Rc;

use crate::log::DiagHandle;
use crate::pooling::{DisposalMatch, PoolingError, Security, SubTransaction};

use super::holding::Holding;

/// Routes sub-transactions to one Holding per security.
///
/// Holdings are created zeroed on first use, and pools for distinct
/// securities are fully independent. Within one security the caller must
/// keep feeding sub-transactions in chronological order.
pub struct HoldingBook {
    holdings: HashMap<Security, Holding>,
    diag: DiagHandle,
}

impl HoldingBook {
    pub fn new(diag: DiagHandle) -> HoldingBook {
        HoldingBook {
            holdings: HashMap::new(),
            diag,
        }
    }

    pub fn holding(&self, security: &str) -> Option<&Holding> {
        self.holdings.get(security)
    }

    fn holding_mut(&mut self, security: &Security) -> &mut Holding {
        self.holdings
            .entry(security.clone())
            .or_insert_with(|| Holding::new(security.clone(), self.diag.clone()))
    }

    pub fn process_acquisition(&mut self, acquisition: &SubTransaction) {
        self.holding_mut(&acquisition.security)
            .process_acquisition(acquisition);
    }

    pub fn process_disposal(
        &mut self,
        disposal: &Rc<SubTransaction>,
    ) -> Result<DisposalMatch, PoolingError> {
        self.holding_mut(&disposal.security).process_disposal(disposal)
    }
}
