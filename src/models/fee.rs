// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fee structure, payment history, and the derived balance.

use serde::{Deserialize, Serialize};

/// A recorded payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeePayment {
    pub id: u64,
    pub date: String,
    /// Amount in whole currency units
    pub amount: u64,
    /// "Partial Payment" or "Balance Payment"
    #[serde(rename = "type")]
    pub kind: String,
    /// "Bank Transfer", "Mobile Money", or "Cash"
    pub method: String,
    pub reference: String,
    /// "completed", "pending", or "failed"
    pub status: String,
    pub description: String,
}

/// Named fee lines for a term, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeStructure {
    pub items: Vec<(String, u64)>,
}

impl FeeStructure {
    pub fn total(&self) -> u64 {
        self.items.iter().map(|(_, amount)| amount).sum()
    }
}

/// Totals shown on the fee status card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeeBalance {
    pub total_due: u64,
    pub total_paid: u64,
    /// Never negative; overpayment shows as zero outstanding
    pub outstanding: u64,
}

impl FeeBalance {
    /// Balance from the fee structure and the payments that completed.
    pub fn compute(structure: &FeeStructure, payments: &[FeePayment]) -> Self {
        let total_due = structure.total();
        let total_paid = payments
            .iter()
            .filter(|p| p.status == "completed")
            .map(|p| p.amount)
            .sum();

        Self {
            total_due,
            total_paid,
            outstanding: total_due.saturating_sub(total_paid),
        }
    }
}
