//! Shared-expense ledger and debt-settlement engine.
//!
//! A [`Group`] owns a member roster and an append-only, validated expense
//! sequence. From those it derives, as pure reads, every member's net
//! [`Balances`] and a greedy list of [`Settlement`] instructions that bring
//! all balances to zero.
//!
//! The engine does not persist anything, performs no I/O and knows nothing
//! about currencies beyond integer cents: embedding systems own transport,
//! storage and presentation and serialize [`Expense`] and [`Settlement`]
//! values at their own boundary.

pub use balance::Balances;
pub use error::LedgerError;
pub use expense::{Expense, Split, SplitMode};
pub use group::Group;
pub use member::Member;
pub use money::Money;
pub use settlement::Settlement;

mod balance;
mod error;
mod expense;
mod group;
mod member;
mod money;
mod settlement;

pub type LedgerResult<T> = Result<T, LedgerError>;
