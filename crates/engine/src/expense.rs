//! Expense primitives.
//!
//! An `Expense` is one financial event: paid by one member, divided among
//! participants by a [`Split`] rule. Expenses are immutable once validated and
//! appended; they are constructed only through [`Group::add_expense`].
//!
//! [`Group::add_expense`]: crate::Group::add_expense

use serde::{Deserialize, Serialize};

use crate::{LedgerError, Member, Money};

/// The rule dividing an expense among participants.
///
/// The weights are insertion-ordered lists rather than maps: the order is
/// observable (the last listed participant absorbs the cent-rounding
/// remainder) and must survive serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Split {
    /// Uniform split over **all** group members, in roster order.
    Equal,
    /// Proportional to declared weights; participants are the listed members.
    Shares(Vec<(Member, f64)>),
    /// Caller-declared absolute amounts; must sum to the expense amount.
    Exact(Vec<(Member, Money)>),
}

impl Split {
    /// Returns the boundary mode tag for this split.
    #[must_use]
    pub fn mode(&self) -> SplitMode {
        match self {
            Self::Equal => SplitMode::Equal,
            Self::Shares(_) => SplitMode::Shares,
            Self::Exact(_) => SplitMode::Exact,
        }
    }
}

/// Boundary form of the split rule.
///
/// The typed API takes a [`Split`], which cannot express an unknown mode or a
/// shares split without weights. The string form exists for loosely-typed
/// boundaries (files, CLIs) and is where `InvalidSplitMode` is raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    Equal,
    Shares,
    Exact,
}

impl SplitMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Shares => "shares",
            Self::Exact => "exact",
        }
    }
}

impl TryFrom<&str> for SplitMode {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "equal" => Ok(Self::Equal),
            "shares" => Ok(Self::Shares),
            "exact" => Ok(Self::Exact),
            other => Err(LedgerError::InvalidSplitMode(other.to_string())),
        }
    }
}

/// One recorded financial event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: Money,
    pub payer: Member,
    pub split: Split,
}
