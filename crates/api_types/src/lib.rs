//! Boundary DTOs for the expense engine.
//!
//! The engine itself defines no file format or wire protocol; embedding
//! surfaces (the CLI, or any future API) describe groups and report results
//! with these types. Amounts cross the boundary as decimal strings
//! (`"120.00"`) and are parsed into cents on the engine side.

use serde::{Deserialize, Serialize};

pub mod group {
    use super::*;

    /// A complete group description: roster plus expense history.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct GroupFile {
        pub name: String,
        /// Member names, in roster order. Order is significant: it fixes the
        /// equal-split participant order and every tie-break downstream.
        pub members: Vec<String>,
        #[serde(default)]
        pub expenses: Vec<ExpenseDef>,
    }

    /// One expense to replay into the ledger.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct ExpenseDef {
        pub description: String,
        /// Decimal string, e.g. `"120.00"`.
        pub amount: String,
        /// Payer name; must be in `members`.
        pub payer: String,
        #[serde(default)]
        pub split: SplitDef,
    }

    /// Split rule in its loosely-typed boundary form.
    ///
    /// `mode` outside `equal`/`shares`/`exact` is rejected when replayed;
    /// `weights` is required for `shares` and `exact` and ignored for
    /// `equal`. Weight order is significant (the last listed participant
    /// absorbs the cent-rounding remainder).
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct SplitDef {
        pub mode: Option<String>,
        #[serde(default)]
        pub weights: Vec<WeightDef>,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct WeightDef {
        pub member: String,
        /// Share weight for `shares` mode; decimal amount string for `exact`.
        pub value: String,
    }
}

pub mod report {
    use super::*;

    /// A member's net position.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BalanceView {
        pub member: String,
        /// Signed decimal string; positive = is owed, negative = owes.
        pub balance: String,
    }

    /// One suggested payment.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettlementView {
        pub debtor: String,
        pub creditor: String,
        pub amount: String,
    }

    /// Full settlement report for a group.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct SettlementReport {
        pub group: String,
        pub balances: Vec<BalanceView>,
        pub settlements: Vec<SettlementView>,
    }
}
