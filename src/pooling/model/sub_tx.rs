use std::fmt::Display;

use rust_decimal::Decimal;
use time::Date;

use crate::util::decimal::{GreaterEqualZeroDecimal, PosDecimal};

pub type Security = String;

/// An already-apportioned slice of a real transaction, as routed to the
/// pool by the upstream matching rules.
///
/// Same-day and bed-and-breakfast matching consume their portions of a
/// transaction first, so the amount here may be smaller than the amount
/// on the underlying transaction. Values arrive in the home currency.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SubTransaction {
    pub security: Security,
    pub settlement_date: Date,
    pub amount: PosDecimal,
    pub price: GreaterEqualZeroDecimal,
    pub expenses: GreaterEqualZeroDecimal,
}

impl SubTransaction {
    /// Full cost of acquiring these units, expenses included.
    pub fn total_cost(&self) -> GreaterEqualZeroDecimal {
        self.price * GreaterEqualZeroDecimal::from(self.amount) + self.expenses
    }

    /// Net proceeds when this slice is a disposal. Negative when the
    /// expenses exceed the gross sale value.
    pub fn proceeds(&self) -> Decimal {
        *self.price * *self.amount - *self.expenses
    }
}

impl Display for SubTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {} @ {} (expenses {})",
            self.security, self.settlement_date, self.amount, self.price, self.expenses
        )
    }
}

#[cfg(test)]
pub mod testlib {
    use crate::gezdec as gez;
    use crate::pdec;
    use crate::util::date::pub_testlib::doy_date;

    use super::SubTransaction;

    pub const DEFAULT_SECURITY: &str = "FOO";

    pub fn sub_tx_default() -> SubTransaction {
        SubTransaction {
            security: DEFAULT_SECURITY.to_string(),
            settlement_date: doy_date(2024, 0),
            amount: pdec!(1),
            price: gez!(0),
            expenses: gez!(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::gezdec as gez;
    use crate::pdec;

    use super::testlib::sub_tx_default;
    use super::SubTransaction;

    #[test]
    fn test_total_cost() {
        let tx = SubTransaction {
            amount: pdec!(100),
            price: gez!(10),
            expenses: gez!(5),
            ..sub_tx_default()
        };
        assert_eq!(tx.total_cost(), gez!(1005));

        let free_tx = SubTransaction {
            amount: pdec!(3),
            price: gez!(0),
            expenses: gez!(0),
            ..sub_tx_default()
        };
        assert_eq!(free_tx.total_cost(), gez!(0));
    }

    #[test]
    fn test_proceeds() {
        let tx = SubTransaction {
            amount: pdec!(40),
            price: gez!(12),
            expenses: gez!(1),
            ..sub_tx_default()
        };
        assert_eq!(tx.proceeds(), dec!(479));

        // Expenses larger than the gross sale value
        let tx = SubTransaction {
            amount: pdec!(1),
            price: gez!(0.50),
            expenses: gez!(2),
            ..sub_tx_default()
        };
        assert_eq!(tx.proceeds(), dec!(-1.50));
    }

    #[test]
    fn test_display() {
        let tx = SubTransaction {
            amount: pdec!(100),
            price: gez!(10),
            expenses: gez!(5),
            ..sub_tx_default()
        };
        assert_eq!(tx.to_string(), "FOO 2024-01-01: 100 @ 10 (expenses 5)");
    }
}
