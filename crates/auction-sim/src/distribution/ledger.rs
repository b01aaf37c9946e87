use serde::Serialize;

use crate::catalog::Lien;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Satisfaction {
    Full,
    Partial,
    NoFundsRemaining,
}

impl Satisfaction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full satisfaction",
            Self::Partial => "partial satisfaction",
            Self::NoFundsRemaining => "no funds remaining",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub lien: Lien,
    pub payout: u64,
    pub satisfaction: Satisfaction,
}

/// Recovery status of the best-ranked lien.
///
/// `recovered` compares the whole sale amount against the claim, not the
/// payout the ledger allocated to it, so the flag and the ledger tag can
/// disagree (a zero claim against a zero bid is "recovered" while the ledger
/// reads "no funds remaining"); see
/// [`DistributionResult::top_priority_matches_ledger`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopPriorityStatus {
    pub creditor: String,
    pub ranking: u32,
    pub claim: u64,
    pub recovered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionResult {
    pub total_amount: i64,
    pub ledger: Vec<LedgerEntry>,
    pub leftover: u64,
    /// `None` when no liens were recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_priority: Option<TopPriorityStatus>,
}

impl DistributionResult {
    pub fn total_paid(&self) -> u64 {
        self.ledger.iter().map(|entry| entry.payout).sum()
    }

    pub fn has_leftover(&self) -> bool {
        self.leftover > 0
    }

    /// Ledger entry for the lien reported as top priority.
    pub fn top_priority_entry(&self) -> Option<&LedgerEntry> {
        let status = self.top_priority.as_ref()?;
        self.ledger.iter().find(|entry| {
            entry.lien.ranking == status.ranking
                && entry.lien.creditor == status.creditor
                && entry.lien.amount == status.claim
        })
    }

    /// False when the top-priority recovery flag says "recovered" but the
    /// ledger did not fully pay that lien, or the reverse.
    pub fn top_priority_matches_ledger(&self) -> bool {
        match (&self.top_priority, self.top_priority_entry()) {
            (Some(status), Some(entry)) => {
                status.recovered == matches!(entry.satisfaction, Satisfaction::Full)
            }
            _ => true,
        }
    }
}
