//! Balance state and its append-only transaction ledger.

use std::fmt;

use crate::Amount;

/// Kind of balance mutation recorded in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Balance debited by a successful charge.
    Charge,
    /// Balance credited by a refund.
    Refund,
    /// Balance credited by added funds.
    Deposit,
}

/// One structured ledger record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    /// What happened.
    pub kind: EntryKind,
    /// The amount moved (always positive, direction given by `kind`).
    pub amount: Amount,
    /// Balance immediately after the mutation.
    pub balance_after: Amount,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::Charge => write!(f, "Payment: -${}", self.amount),
            EntryKind::Refund => write!(f, "Refund: +${}", self.amount),
            EntryKind::Deposit => write!(f, "Funds added: +${}", self.amount),
        }
    }
}

/// A balance together with its append-only ledger.
///
/// `credit` and `debit` are the only mutators, so every balance change carries
/// exactly one ledger entry.
#[derive(Debug, Default)]
pub struct Funds {
    balance: Amount,
    entries: Vec<LedgerEntry>,
}

impl Funds {
    /// Open with the given balance and an empty ledger.
    pub fn opening(balance: Amount) -> Self {
        Self {
            balance,
            entries: Vec::new(),
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Increase the balance and record the entry.
    pub(crate) fn credit(&mut self, kind: EntryKind, amount: Amount) {
        self.balance += amount;
        self.entries.push(LedgerEntry {
            kind,
            amount,
            balance_after: self.balance,
        });
    }

    /// Decrease the balance and record a `Charge` entry.
    pub(crate) fn debit(&mut self, amount: Amount) {
        self.balance -= amount;
        self.entries.push(LedgerEntry {
            kind: EntryKind::Charge,
            amount,
            balance_after: self.balance,
        });
    }
}
