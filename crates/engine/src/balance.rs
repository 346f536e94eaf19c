//! Balance derivation.
//!
//! Balances are a pure function of the full expense history. They are never
//! cached or updated incrementally: every call replays the ledger from the
//! start, so there is no drift between stored and derived state.

use serde::{Deserialize, Serialize};

use crate::{Group, Member, Money, Split};

/// Net balances for every member of a group, in roster order.
///
/// Positive = the group owes this member; negative = this member owes the
/// group. The accumulator is an ordered list seeded from the member roster
/// rather than a hash map, so iteration order is deterministic and the
/// settlement tie-break (roster order) falls out of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balances {
    entries: Vec<(Member, Money)>,
}

impl Balances {
    fn seeded(members: &[Member]) -> Self {
        Self {
            entries: members
                .iter()
                .map(|m| (m.clone(), Money::ZERO))
                .collect(),
        }
    }

    fn entry_mut(&mut self, member: &Member) -> &mut Money {
        let index = match self.entries.iter().position(|(m, _)| m == member) {
            Some(index) => index,
            None => {
                self.entries.push((member.clone(), Money::ZERO));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    /// Returns the balance of `member`, `Money::ZERO` if unknown.
    #[must_use]
    pub fn get(&self, member: &Member) -> Money {
        self.entries
            .iter()
            .find(|(m, _)| m == member)
            .map(|(_, balance)| *balance)
            .unwrap_or(Money::ZERO)
    }

    /// Iterates members with their balance, in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&Member, Money)> {
        self.entries.iter().map(|(m, b)| (m, *b))
    }

    /// Number of tracked members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all balances. Always `Money::ZERO` for a valid ledger: money
    /// credited to payers equals money debited from participants.
    #[must_use]
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, b)| *b).sum()
    }
}

/// Replays every expense of `group` into a fresh balance table.
///
/// Per expense: the payer is credited the full amount, then each participant
/// is debited their share according to the split rule. For `Equal` and
/// `Shares` the last participant (roster order, resp. weights order) absorbs
/// the cent-rounding remainder so per-expense debits always sum exactly to
/// the amount. This is a deliberate deterministic policy, not an
/// approximation.
pub(crate) fn compute(group: &Group) -> Balances {
    let mut balances = Balances::seeded(group.members());

    for expense in group.expenses() {
        *balances.entry_mut(&expense.payer) += expense.amount;

        match &expense.split {
            Split::Equal => {
                let participants = group.members();
                let share = expense.amount.divided_by(participants.len() as i64);
                let mut debited = Money::ZERO;
                for (i, member) in participants.iter().enumerate() {
                    let owed = if i == participants.len() - 1 {
                        expense.amount - debited
                    } else {
                        share
                    };
                    debited += owed;
                    *balances.entry_mut(member) -= owed;
                }
            }
            Split::Shares(weights) => {
                let total_weight: f64 = weights.iter().map(|(_, w)| *w).sum();
                let mut debited = Money::ZERO;
                for (i, (member, weight)) in weights.iter().enumerate() {
                    let owed = if i == weights.len() - 1 {
                        expense.amount - debited
                    } else {
                        expense.amount.proportion(*weight, total_weight)
                    };
                    debited += owed;
                    *balances.entry_mut(member) -= owed;
                }
            }
            Split::Exact(amounts) => {
                // Already validated to sum to the amount; no correction.
                for (member, owed) in amounts {
                    *balances.entry_mut(member) -= *owed;
                }
            }
        }
    }

    balances
}
