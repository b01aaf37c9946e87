use tracing::debug;

use super::ledger::{DistributionResult, LedgerEntry, Satisfaction, TopPriorityStatus};
use crate::catalog::Lien;

/// Allocates `total_amount` across `liens` in ascending ranking order.
///
/// Each lien takes at most its own claim; whatever is left after the last
/// lien is the leftover. A zero or negative amount pays nothing. Every lien
/// appears in the ledger, including those that receive no funds.
pub fn distribute(liens: &[Lien], total_amount: i64) -> DistributionResult {
    let mut ordered: Vec<&Lien> = liens.iter().collect();
    // stable: equal rankings keep their recorded order
    ordered.sort_by_key(|lien| lien.ranking);

    let mut remaining = u64::try_from(total_amount).unwrap_or(0);
    let mut ledger = Vec::with_capacity(ordered.len());

    for lien in ordered {
        if remaining == 0 {
            ledger.push(LedgerEntry {
                lien: lien.clone(),
                payout: 0,
                satisfaction: Satisfaction::NoFundsRemaining,
            });
            continue;
        }

        let payout = lien.amount.min(remaining);
        remaining -= payout;
        let satisfaction = if payout == lien.amount {
            Satisfaction::Full
        } else {
            Satisfaction::Partial
        };

        ledger.push(LedgerEntry {
            lien: lien.clone(),
            payout,
            satisfaction,
        });
    }

    let top_priority = top_priority_status(liens, total_amount);

    debug!(
        liens = liens.len(),
        total_amount,
        leftover = remaining,
        "distribution computed"
    );

    DistributionResult {
        total_amount,
        ledger,
        leftover: remaining,
        top_priority,
    }
}

/// Lowest ranking wins; ties resolve to the first recorded lien.
fn top_priority_status(liens: &[Lien], total_amount: i64) -> Option<TopPriorityStatus> {
    let lien = liens.iter().min_by_key(|lien| lien.ranking)?;

    Some(TopPriorityStatus {
        creditor: lien.creditor.clone(),
        ranking: lien.ranking,
        claim: lien.amount,
        recovered: i128::from(total_amount) >= i128::from(lien.amount),
    })
}
