use std::fmt::Display;
use std::rc::Rc;

use rust_decimal::Decimal;

use crate::util::decimal::GreaterEqualZeroDecimal;

use super::sub_tx::SubTransaction;

/// Which matching rule a disposal was matched under.
///
/// Same-day and bed-and-breakfast matches are made upstream, before any
/// residual reaches the pool; the pool engine itself only ever produces
/// Pool matches. Downstream reporting switches on this tag.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MatchRule {
    SameDay,
    BedAndBreakfast,
    Pool,
}

impl MatchRule {
    fn pretty_str(&self) -> &str {
        match self {
            MatchRule::SameDay => "Same-Day",
            MatchRule::BedAndBreakfast => "B&B",
            MatchRule::Pool => "Pool",
        }
    }
}

impl Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty_str())
    }
}

/// Evidence record for one successfully matched disposal.
///
/// Carries the pool's amount and cost basis as they were immediately
/// before the disposal's removal. The disposed units are deemed to have
/// been acquired at that average cost, so the snapshot, not the
/// post-removal state, is what gain computation needs.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct DisposalMatch {
    rule: MatchRule,
    pool_amount: GreaterEqualZeroDecimal,
    cost_basis: GreaterEqualZeroDecimal,
    disposal: Rc<SubTransaction>,
}

impl DisposalMatch {
    pub(crate) fn new(
        rule: MatchRule,
        pool_amount: GreaterEqualZeroDecimal,
        cost_basis: GreaterEqualZeroDecimal,
        disposal: Rc<SubTransaction>,
    ) -> DisposalMatch {
        DisposalMatch {
            rule,
            pool_amount,
            cost_basis,
            disposal,
        }
    }

    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    pub fn pool_amount(&self) -> GreaterEqualZeroDecimal {
        self.pool_amount
    }

    pub fn cost_basis(&self) -> GreaterEqualZeroDecimal {
        self.cost_basis
    }

    pub fn disposal(&self) -> &Rc<SubTransaction> {
        &self.disposal
    }

    /// The cost the disposed units are deemed to have been acquired at.
    pub fn allowable_cost(&self) -> GreaterEqualZeroDecimal {
        GreaterEqualZeroDecimal::from(self.disposal.amount) * self.cost_basis
    }

    pub fn gain(&self) -> Decimal {
        self.disposal.proceeds() - *self.allowable_cost()
    }
}
