use auction_sim::catalog::Property;
use auction_sim::distribution::{DistributionResult, Satisfaction};
use auction_sim::money::format_won;
use chrono::NaiveDate;
use serde::Serialize;

pub(crate) fn property_list(properties: &[&Property]) -> String {
    if properties.is_empty() {
        return "No properties of the requested type exist in the catalog.\n".to_string();
    }

    properties
        .iter()
        .map(|property| property.summary())
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn not_found(id: &str) -> String {
    format!("No property with ID '{id}' could be found.")
}

pub(crate) fn distribution_report(
    property: &Property,
    sale_date: NaiveDate,
    result: &DistributionResult,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.ledger.len() + 4);

    lines.push(format!(
        "Distribution simulation for an expected winning bid of {} as of {} (appraised value {}, starting bid {})",
        format_won(result.total_amount),
        sale_date,
        format_won(property.appraised_value),
        format_won(property.starting_bid),
    ));

    for entry in &result.ledger {
        let lien = &entry.lien;
        match entry.satisfaction {
            Satisfaction::NoFundsRemaining => lines.push(format!(
                "- Rank {} {}: no payout ({})",
                lien.ranking,
                lien.creditor,
                entry.satisfaction.label()
            )),
            Satisfaction::Full | Satisfaction::Partial => lines.push(format!(
                "- Rank {} {}: {} paid ({})",
                lien.ranking,
                lien.creditor,
                format_won(entry.payout),
                entry.satisfaction.label()
            )),
        }
    }

    if result.has_leftover() {
        lines.push(format!(
            "- Leftover: {} (refundable to junior creditors or owner)",
            format_won(result.leftover)
        ));
    } else {
        lines.push(format!("- Leftover: {}", format_won(0u64)));
    }

    match &result.top_priority {
        Some(top) => {
            let status = if top.recovered {
                "fully recovered"
            } else {
                "partially recovered"
            };
            lines.push(format!(
                "Top-priority creditor ({}) is {}.",
                top.creditor, status
            ));
            if !result.top_priority_matches_ledger() {
                lines.push(format!(
                    "Note: recovery status compares the full bid of {} against the {} claim, not the payout allocated above.",
                    format_won(result.total_amount),
                    format_won(top.claim)
                ));
            }
        }
        None => lines.push("No liens are recorded, so there is no top-priority creditor.".to_string()),
    }

    lines
}

#[derive(Debug, Serialize)]
pub(crate) struct SimulationReport<'a> {
    pub(crate) property_id: &'a str,
    pub(crate) property_name: &'a str,
    pub(crate) sale_date: NaiveDate,
    pub(crate) appraised_value: u64,
    pub(crate) starting_bid: u64,
    #[serde(flatten)]
    pub(crate) result: &'a DistributionResult,
}

impl<'a> SimulationReport<'a> {
    pub(crate) fn new(
        property: &'a Property,
        sale_date: NaiveDate,
        result: &'a DistributionResult,
    ) -> Self {
        Self {
            property_id: &property.id,
            property_name: &property.name,
            sale_date,
            appraised_value: property.appraised_value,
            starting_bid: property.starting_bid,
            result,
        }
    }
}
