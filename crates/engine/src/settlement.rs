//! Settlement derivation.
//!
//! Turns a balance table into point-to-point payment instructions. The
//! reduction is a greedy largest-first matching: it always zeroes every
//! balance, but makes no claim of the theoretically minimal transaction
//! count across all possible pairings.

use serde::{Deserialize, Serialize};

use crate::{Balances, Member, Money};

/// One payment instruction: `debtor` pays `creditor` `amount`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub debtor: Member,
    pub creditor: Member,
    pub amount: Money,
}

/// Reduces `balances` to an ordered list of payments driving every balance
/// to zero.
///
/// Members are partitioned into debtors (negative balance) and creditors
/// (positive balance), each tracked with its remaining magnitude and sorted
/// by magnitude descending. The sort is stable over roster order, so ties
/// resolve deterministically and identical input always yields an identical
/// instruction list. The current largest debtor and creditor are then
/// matched repeatedly, transferring `min` of the two remainders, until one
/// side is exhausted.
pub(crate) fn settle(balances: &Balances) -> Vec<Settlement> {
    let mut debtors: Vec<(&Member, Money)> = Vec::new();
    let mut creditors: Vec<(&Member, Money)> = Vec::new();

    for (member, balance) in balances.iter() {
        if balance.is_negative() {
            debtors.push((member, -balance));
        } else if balance.is_positive() {
            creditors.push((member, balance));
        }
    }

    debtors.sort_by(|a, b| b.1.cmp(&a.1));
    creditors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut payments = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let pay = debtors[i].1.min(creditors[j].1);
        if pay.is_positive() {
            payments.push(Settlement {
                debtor: debtors[i].0.clone(),
                creditor: creditors[j].0.clone(),
                amount: pay,
            });
        }
        debtors[i].1 -= pay;
        creditors[j].1 -= pay;
        if debtors[i].1.is_zero() {
            i += 1;
        }
        if creditors[j].1.is_zero() {
            j += 1;
        }
    }

    payments
}
