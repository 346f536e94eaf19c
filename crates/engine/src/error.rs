//! The module contains the errors the ledger can throw.
//!
//! Every variant is a validation failure raised synchronously while adding an
//! expense (or parsing boundary input); no partial state is ever committed on
//! failure.
use thiserror::Error;

/// Ledger validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    /// The expense amount is not strictly positive, or an amount string could
    /// not be parsed.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// The payer is not a member of the group.
    #[error("Unknown payer: {0}")]
    UnknownPayer(String),
    /// A split mode string outside `equal`/`shares`/`exact`.
    #[error("Invalid split mode: {0}")]
    InvalidSplitMode(String),
    /// A shares/exact split is empty, names a non-member, or lists the same
    /// member twice.
    #[error("Invalid split participants: {0}")]
    InvalidSplitParticipants(String),
    /// Exact split amounts do not sum to the expense amount.
    #[error("Split mismatch: declared amounts sum to {declared}, expense is {amount}")]
    SplitMismatch { declared: String, amount: String },
}
