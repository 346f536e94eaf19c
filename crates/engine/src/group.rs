//! The module contains the `Group` ledger and its validation rules.

use serde::{Deserialize, Serialize};

use crate::{
    Balances, Expense, LedgerError, LedgerResult, Member, Money, Settlement, Split, balance,
    settlement,
};

/// A group of people sharing expenses.
///
/// The group exclusively owns an ordered member roster and an ordered,
/// append-only expense sequence. Member order is significant: it is the
/// participant set (and iteration order) for equal splits and the tie-break
/// order everywhere balances or settlements are derived.
///
/// All operations are synchronous and perform no I/O. `add_expense` needs
/// exclusive access (`&mut self`); `balances()` and `settlements()` are pure
/// reads. Sharing a group across threads is the caller's responsibility to
/// serialize, as with any `&mut` access.
///
/// # Examples
///
/// ```rust
/// use engine::{Group, Split};
///
/// let mut group = Group::new("Ski Trip");
/// let alice = group.add_member("Alice");
/// group.add_member("Bob");
/// group.add_member("Chris");
///
/// group
///     .add_expense("Groceries", "120.00".parse().unwrap(), &alice, Split::Equal)
///     .unwrap();
///
/// let balances = group.balances();
/// assert_eq!(balances.get(&alice).cents(), 8000);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    members: Vec<Member>,
    expenses: Vec<Expense>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// Registers a new member and returns it.
    ///
    /// Duplicate names are not rejected by contract, but callers should
    /// avoid them: member equality is name-based, so a duplicate aliases the
    /// existing member in every derivation.
    pub fn add_member(&mut self, name: &str) -> Member {
        let member = Member::new(name);
        self.members.push(member.clone());
        member
    }

    /// The member roster, in insertion order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The recorded expenses, in insertion order.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Looks a member up by (canonicalized) name.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Member> {
        let wanted = Member::new(name);
        self.members.iter().find(|m| **m == wanted)
    }

    fn is_member(&self, member: &Member) -> bool {
        self.members.contains(member)
    }

    /// Validates and appends an expense.
    ///
    /// Validation is fail-fast in a fixed order and makes no mutation on
    /// failure:
    ///
    /// 1. `amount > 0`, else [`LedgerError::InvalidAmount`];
    /// 2. the payer is a current member, else [`LedgerError::UnknownPayer`];
    /// 3. shares/exact participant lists are non-empty, reference only
    ///    current members and list no member twice, else
    ///    [`LedgerError::InvalidSplitParticipants`] (shares weights must
    ///    also be finite, non-negative and sum above zero);
    /// 4. exact amounts sum to the expense amount to the cent, else
    ///    [`LedgerError::SplitMismatch`].
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: Money,
        payer: &Member,
        split: Split,
    ) -> LedgerResult<&Expense> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(format!(
                "amount must be > 0, got {amount}"
            )));
        }
        if !self.is_member(payer) {
            return Err(LedgerError::UnknownPayer(payer.name().to_string()));
        }

        match &split {
            Split::Equal => {}
            Split::Shares(weights) => {
                self.check_participants(weights.iter().map(|(m, _)| m))?;
                if weights.iter().any(|(_, w)| !w.is_finite() || *w < 0.0) {
                    return Err(LedgerError::InvalidSplitParticipants(
                        "share weights must be finite and non-negative".to_string(),
                    ));
                }
                if weights.iter().map(|(_, w)| *w).sum::<f64>() <= 0.0 {
                    return Err(LedgerError::InvalidSplitParticipants(
                        "share weights must sum above zero".to_string(),
                    ));
                }
            }
            Split::Exact(amounts) => {
                self.check_participants(amounts.iter().map(|(m, _)| m))?;
                let declared: Money = amounts.iter().map(|(_, owed)| *owed).sum();
                if declared != amount {
                    return Err(LedgerError::SplitMismatch {
                        declared: declared.to_string(),
                        amount: amount.to_string(),
                    });
                }
            }
        }

        self.expenses.push(Expense {
            description: description.to_string(),
            amount,
            payer: payer.clone(),
            split,
        });
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    fn check_participants<'a, I>(&self, participants: I) -> LedgerResult<()>
    where
        I: Iterator<Item = &'a Member>,
    {
        let mut seen: Vec<&Member> = Vec::new();
        for member in participants {
            if !self.is_member(member) {
                return Err(LedgerError::InvalidSplitParticipants(format!(
                    "{} is not a group member",
                    member.name()
                )));
            }
            if seen.contains(&member) {
                return Err(LedgerError::InvalidSplitParticipants(format!(
                    "{} is listed twice",
                    member.name()
                )));
            }
            seen.push(member);
        }
        if seen.is_empty() {
            return Err(LedgerError::InvalidSplitParticipants(
                "split participants must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Derives every member's net balance from the full expense history.
    #[must_use]
    pub fn balances(&self) -> Balances {
        balance::compute(self)
    }

    /// Derives the payment instructions that drive every balance to zero.
    #[must_use]
    pub fn settlements(&self) -> Vec<Settlement> {
        settlement::settle(&self.balances())
    }
}
