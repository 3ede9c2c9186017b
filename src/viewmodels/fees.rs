// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fee status: payment history, the fee structure, and the outstanding
//! balance. Also the payment form.

use super::filter::{FilterTab, Filterable, Searchable, ALL};
use super::list::{ListView, ListViewModel};
use super::samples;
use crate::models::{FeeBalance, FeePayment, FeeStructure};
use validator::{Validate, ValidationError};

pub const STATUS_TABS: &[(&str, &str)] = &[
    (ALL, "All"),
    ("completed", "Completed"),
    ("pending", "Pending"),
    ("failed", "Failed"),
];

/// Shown for any invalid payment form.
pub const PAYMENT_ERROR: &str = "Please enter a valid account number and amount.";

impl Searchable for FeePayment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.description.as_str(),
            self.reference.as_str(),
            self.method.as_str(),
        ]
    }
}

impl Filterable for FeePayment {
    fn discriminator(&self) -> &str {
        &self.status
    }
}

#[derive(Debug, Clone)]
pub struct FeesViewModel {
    structure: FeeStructure,
    list: ListViewModel<FeePayment>,
}

impl FeesViewModel {
    pub fn new(structure: FeeStructure, payments: Vec<FeePayment>) -> Self {
        Self {
            structure,
            list: ListViewModel::seeded(payments, "fee status", "No payments found."),
        }
    }

    pub fn sample() -> Self {
        Self::new(samples::fee_structure(), samples::fee_payments())
    }

    pub fn structure(&self) -> &FeeStructure {
        &self.structure
    }

    pub fn list(&self) -> &ListViewModel<FeePayment> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListViewModel<FeePayment> {
        &mut self.list
    }

    pub fn render(&self) -> ListView<'_, FeePayment> {
        self.list.render()
    }

    pub fn tabs(&self) -> Vec<FilterTab> {
        self.list.tabs(STATUS_TABS)
    }

    /// Balance over every payment, ignoring filter and search.
    pub fn balance(&self) -> FeeBalance {
        FeeBalance::compute(&self.structure, self.list.items())
    }

    /// Share of the total already paid, capped at 100.
    pub fn paid_percentage(&self) -> u32 {
        let balance = self.balance();
        if balance.total_due == 0 {
            return 0;
        }
        let pct = (balance.total_paid as f64 / balance.total_due as f64 * 100.0).round();
        pct.min(100.0) as u32
    }
}

/// Payment form. There is no payment endpoint, so a valid submission only
/// produces the confirmation text.
#[derive(Debug, Clone, Default, Validate)]
pub struct PaymentForm {
    #[validate(length(min = 1))]
    pub account_number: String,
    #[validate(custom(function = "positive_amount"))]
    pub amount: String,
}

fn positive_amount(amount: &str) -> Result<(), ValidationError> {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(()),
        _ => Err(ValidationError::new("positive_amount")),
    }
}

impl PaymentForm {
    /// Confirmation message, or the fixed form error.
    pub fn submit(&self) -> Result<String, &'static str> {
        if let Err(e) = self.validate() {
            tracing::debug!(error = %e, "Payment form rejected");
            return Err(PAYMENT_ERROR);
        }
        Ok(format!(
            "You have paid GH₵ {} from account {}.",
            self.amount.trim(),
            self.account_number
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(account: &str, amount: &str) -> PaymentForm {
        PaymentForm {
            account_number: account.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_sample_balance() {
        let vm = FeesViewModel::sample();
        let balance = vm.balance();
        assert_eq!(balance.total_due, 3775);
        assert_eq!(balance.total_paid, 4775);
        assert_eq!(balance.outstanding, 0);
        assert_eq!(vm.paid_percentage(), 100);

        let partial = FeesViewModel::new(
            samples::fee_structure(),
            samples::fee_payments().into_iter().take(1).collect(),
        );
        assert_eq!(partial.paid_percentage(), 40);
    }

    #[test]
    fn test_search_by_method() {
        let mut vm = FeesViewModel::sample();
        vm.list_mut().set_search("mobile money");
        let ids: Vec<u64> = vm.list().visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_status_tabs() {
        let vm = FeesViewModel::sample();
        let counts: Vec<usize> = vm.tabs().iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![3, 3, 0, 0]);
    }

    #[test]
    fn test_payment_form_validation() {
        assert_eq!(
            form("0241234567", "250").submit().unwrap(),
            "You have paid GH₵ 250 from account 0241234567."
        );
        assert_eq!(form("", "250").submit(), Err(PAYMENT_ERROR));
        assert_eq!(form("0241234567", "").submit(), Err(PAYMENT_ERROR));
        assert_eq!(form("0241234567", "abc").submit(), Err(PAYMENT_ERROR));
        assert_eq!(form("0241234567", "-5").submit(), Err(PAYMENT_ERROR));
        assert_eq!(form("0241234567", "0").submit(), Err(PAYMENT_ERROR));
    }
}
