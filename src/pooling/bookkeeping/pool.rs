use std::fmt::Display;

use rust_decimal::Decimal;

use crate::util::decimal::{GreaterEqualZeroDecimal, PosDecimal};

/// Weighted-average bookkeeping state for one security's pool.
///
/// `cost` is the aggregate cost basis of the `amount` units currently
/// held. Both change only through `add`/`remove`, which the owning
/// Holding drives. `amount == 0` implies `cost == 0` after every
/// mutation.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PoolState {
    amount: GreaterEqualZeroDecimal,
    cost: GreaterEqualZeroDecimal,
}

impl PoolState {
    pub fn new() -> PoolState {
        PoolState {
            amount: GreaterEqualZeroDecimal::zero(),
            cost: GreaterEqualZeroDecimal::zero(),
        }
    }

    pub fn amount(&self) -> GreaterEqualZeroDecimal {
        self.amount
    }

    pub fn cost(&self) -> GreaterEqualZeroDecimal {
        self.cost
    }

    /// Average acquisition cost per unit held. Zero for an empty pool.
    pub fn cost_basis(&self) -> GreaterEqualZeroDecimal {
        match PosDecimal::try_from(*self.amount) {
            Ok(amount) => self.cost.div(amount),
            Err(_) => GreaterEqualZeroDecimal::zero(),
        }
    }

    pub(super) fn add(
        &mut self,
        amount: GreaterEqualZeroDecimal,
        cost: GreaterEqualZeroDecimal,
    ) {
        self.amount += amount;
        self.cost += cost;
    }

    /// Removes `amount` units at the current average cost. The caller
    /// must have checked `amount <= self.amount`.
    ///
    /// The proportional cost reduction leaves the remaining per-unit
    /// average equal to the pre-removal `cost_basis`.
    pub(super) fn remove(&mut self, amount: PosDecimal) {
        let basis = self.cost_basis();
        self.amount =
            GreaterEqualZeroDecimal::try_from(*self.amount - *amount).unwrap();
        if self.amount.is_zero() {
            // Sweep out any rounding residue from the basis division, so
            // an emptied pool carries a cost of exactly zero.
            self.cost = GreaterEqualZeroDecimal::zero();
        } else {
            // max() covers a sub-last-digit overshoot, where the rounded
            // basis times the amount comes out above the exact cost.
            let removed_cost = *amount * *basis;
            self.cost = GreaterEqualZeroDecimal::try_from(
                (*self.cost - removed_cost).max(Decimal::ZERO),
            )
            .unwrap();
        }
    }
}

impl Display for PoolState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<PoolState: amount={}, cost={}, cost_basis={}>",
            self.amount,
            self.cost,
            self.cost_basis()
        )
    }
}
