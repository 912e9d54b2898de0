//! Payment methods.
//!
//! Three interchangeable implementations of the [`PaymentMethod`] capability:
//! credit card, digital wallet, and bank account. Each keeps its balance
//! behind an append-only ledger and applies its own limit policy. Rejected
//! operations never mutate state and never record a ledger entry.

use tracing::warn;

use crate::Amount;

mod ledger;
pub use ledger::{EntryKind, Funds, LedgerEntry};

mod error;
pub use error::PaymentError;

/// Capability shared by every payment method.
pub trait PaymentMethod {
    /// Debit `amount` if the method's limit policy allows it.
    fn charge(&mut self, amount: Amount) -> Result<(), PaymentError>;

    /// Credit `amount` back to the balance.
    fn refund(&mut self, amount: Amount) -> Result<(), PaymentError>;

    /// Credit `amount` as new funds.
    fn add_funds(&mut self, amount: Amount) -> Result<(), PaymentError>;

    /// Current balance.
    fn balance(&self) -> Amount;

    /// Every recorded balance mutation, oldest first.
    fn history(&self) -> &[LedgerEntry];

    /// Method name with its identifier, masked where the identifier is
    /// sensitive.
    fn display_name(&self) -> String;
}

/// Mask an identifier down to its last four characters.
///
/// Identifiers of four characters or fewer are returned unmasked.
fn mask_last4(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 4 {
        id.to_string()
    } else {
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("**** {tail}")
    }
}

/// A credit card. The balance is the remaining credit: it opens at the credit
/// limit, charges draw it down, and refunds or deposits may never push it
/// back above the limit.
pub struct CreditCard {
    card_number: String,
    limit: Amount,
    funds: Funds,
}

impl CreditCard {
    pub fn new(card_number: impl Into<String>, limit: Amount) -> Self {
        Self {
            card_number: card_number.into(),
            limit,
            funds: Funds::opening(limit),
        }
    }
}

impl PaymentMethod for CreditCard {
    fn charge(&mut self, amount: Amount) -> Result<(), PaymentError> {
        let usable = self.funds.balance();
        if amount > usable {
            return Err(PaymentError::Declined {
                requested: amount,
                usable,
            });
        }
        self.funds.debit(amount);
        Ok(())
    }

    fn refund(&mut self, amount: Amount) -> Result<(), PaymentError> {
        let balance = self.funds.balance();
        if balance + amount > self.limit {
            return Err(PaymentError::OverLimit {
                amount,
                balance,
                limit: self.limit,
            });
        }
        self.funds.credit(EntryKind::Refund, amount);
        Ok(())
    }

    fn add_funds(&mut self, amount: Amount) -> Result<(), PaymentError> {
        let balance = self.funds.balance();
        if balance + amount > self.limit {
            // Over-limit deposits are rejected explicitly rather than
            // silently dropped. State is untouched either way.
            return Err(PaymentError::OverLimit {
                amount,
                balance,
                limit: self.limit,
            });
        }
        self.funds.credit(EntryKind::Deposit, amount);
        Ok(())
    }

    fn balance(&self) -> Amount {
        self.funds.balance()
    }

    fn history(&self) -> &[LedgerEntry] {
        self.funds.entries()
    }

    fn display_name(&self) -> String {
        format!("Credit Card ({})", mask_last4(&self.card_number))
    }
}

/// A digital wallet. No credit: charges are limited to the balance, refunds
/// and deposits always succeed.
pub struct DigitalWallet {
    email: String,
    funds: Funds,
}

impl DigitalWallet {
    pub fn new(email: impl Into<String>, opening_balance: Amount) -> Self {
        Self {
            email: email.into(),
            funds: Funds::opening(opening_balance),
        }
    }
}

impl PaymentMethod for DigitalWallet {
    fn charge(&mut self, amount: Amount) -> Result<(), PaymentError> {
        let usable = self.funds.balance();
        if amount > usable {
            return Err(PaymentError::Declined {
                requested: amount,
                usable,
            });
        }
        self.funds.debit(amount);
        Ok(())
    }

    fn refund(&mut self, amount: Amount) -> Result<(), PaymentError> {
        self.funds.credit(EntryKind::Refund, amount);
        Ok(())
    }

    fn add_funds(&mut self, amount: Amount) -> Result<(), PaymentError> {
        self.funds.credit(EntryKind::Deposit, amount);
        Ok(())
    }

    fn balance(&self) -> Amount {
        self.funds.balance()
    }

    fn history(&self) -> &[LedgerEntry] {
        self.funds.entries()
    }

    fn display_name(&self) -> String {
        // Email doubles as the user-facing identity, so it is not masked.
        format!("Digital Wallet ({})", self.email)
    }
}

/// A bank account with an overdraft allowance: charges may take the balance
/// negative down to `-overdraft_limit`. Refunds and deposits always succeed.
pub struct BankAccount {
    account_number: String,
    overdraft_limit: Amount,
    funds: Funds,
}

impl BankAccount {
    pub fn new(
        account_number: impl Into<String>,
        opening_balance: Amount,
        overdraft_limit: Amount,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            overdraft_limit,
            funds: Funds::opening(opening_balance),
        }
    }
}

impl PaymentMethod for BankAccount {
    fn charge(&mut self, amount: Amount) -> Result<(), PaymentError> {
        let available = self.funds.balance();
        let usable = available + self.overdraft_limit;
        if amount > usable {
            return Err(PaymentError::Declined {
                requested: amount,
                usable,
            });
        }
        if amount > available {
            warn!(
                account = %mask_last4(&self.account_number),
                available = %available,
                requested = %amount,
                "charge dips into overdraft"
            );
        }
        self.funds.debit(amount);
        Ok(())
    }

    fn refund(&mut self, amount: Amount) -> Result<(), PaymentError> {
        self.funds.credit(EntryKind::Refund, amount);
        Ok(())
    }

    fn add_funds(&mut self, amount: Amount) -> Result<(), PaymentError> {
        self.funds.credit(EntryKind::Deposit, amount);
        Ok(())
    }

    fn balance(&self) -> Amount {
        self.funds.balance()
    }

    fn history(&self) -> &[LedgerEntry] {
        self.funds.entries()
    }

    fn display_name(&self) -> String {
        format!("Bank Account ({})", mask_last4(&self.account_number))
    }
}
