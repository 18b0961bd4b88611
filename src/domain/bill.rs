// SPDX-License-Identifier: MPL-2.0
//! Bill-split draft and the signed balance adjustment it produces.
//!
//! A draft only lives as long as the split form is shown. The friend's
//! share is always derived from the two stored amounts and never stored.

/// Who paid the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub const ALL: [Payer; 2] = [Payer::User, Payer::Friend];
}

/// Unsaved input of the split form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BillDraft {
    total_bill: Option<f64>,
    user_expense: Option<f64>,
    payer: Payer,
}

impl BillDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn total_bill(&self) -> Option<f64> {
        self.total_bill
    }

    #[must_use]
    pub fn user_expense(&self) -> Option<f64> {
        self.user_expense
    }

    #[must_use]
    pub fn payer(&self) -> Payer {
        self.payer
    }

    pub fn set_total_bill(&mut self, total: Option<f64>) {
        self.total_bill = total;
    }

    /// Sets the user's share unless it would exceed the current total.
    ///
    /// An unset total counts as zero. Returns `false` (and keeps the previous
    /// value) when the edit is rejected.
    pub fn set_user_expense(&mut self, expense: Option<f64>) -> bool {
        if let Some(value) = expense {
            if value > self.total_bill.unwrap_or(0.0) {
                return false;
            }
        }
        self.user_expense = expense;
        true
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// The friend's share: `total - user` when both are set and the total is
    /// strictly larger.
    #[must_use]
    pub fn friend_expense(&self) -> Option<f64> {
        match (self.total_bill, self.user_expense) {
            (Some(total), Some(user)) if total > user => Some(total - user),
            _ => None,
        }
    }

    /// Signed amount to add to the friend's balance, or `None` when the draft
    /// is incomplete (missing or zero amounts).
    ///
    /// When the user paid, the friend owes their share (`+friend_expense`).
    /// When the friend paid, the user owes their own share (`-user_expense`).
    #[must_use]
    pub fn settlement(&self) -> Option<f64> {
        let is_present = |value: &f64| *value != 0.0;
        self.total_bill.filter(is_present)?;
        let user = self.user_expense.filter(is_present)?;

        Some(match self.payer {
            Payer::User => self.friend_expense().unwrap_or(0.0),
            Payer::Friend => -user,
        })
    }
}
