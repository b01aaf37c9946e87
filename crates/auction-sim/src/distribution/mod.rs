//! Proceeds distribution across ranked liens.

mod engine;
mod ledger;

pub use engine::distribute;
pub use ledger::{DistributionResult, LedgerEntry, Satisfaction, TopPriorityStatus};
