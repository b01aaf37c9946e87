use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::info;

use super::domain::{Lien, Property, PropertyCategory, UnknownCategory};
use super::memory::InMemoryCatalog;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidCategory { row: usize, source: UnknownCategory },
    InconsistentProperty { row: usize, id: String },
    IncompleteLien { row: usize, id: String },
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read catalog file: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid catalog CSV data: {}", err),
            CatalogImportError::InvalidCategory { row, source } => {
                write!(f, "row {}: {}", row, source)
            }
            CatalogImportError::InconsistentProperty { row, id } => write!(
                f,
                "row {}: property '{}' repeats with different listing details",
                row, id
            ),
            CatalogImportError::IncompleteLien { row, id } => write!(
                f,
                "row {}: lien for property '{}' needs ranking, creditor and amount together",
                row, id
            ),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::InvalidCategory { source, .. } => Some(source),
            CatalogImportError::InconsistentProperty { .. }
            | CatalogImportError::IncompleteLien { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads a catalog from a flat CSV export holding one row per lien.
///
/// Rows sharing a `property_id` (compared case-insensitively) fold into one
/// property, in order of first appearance. A row with all three lien columns
/// blank contributes the listing without a lien.
pub struct CsvCatalogImporter;

impl CsvCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<InMemoryCatalog, CatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), properties = catalog.len(), "catalog imported");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<InMemoryCatalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records: Vec<Property> = Vec::new();

        for (index, row) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            // header occupies line 1
            let line = index + 2;
            let row = row?;
            let lien = row.lien(line)?;
            let listing = row.into_property(line)?;

            match records
                .iter_mut()
                .find(|existing| existing.id.eq_ignore_ascii_case(&listing.id))
            {
                Some(existing) => {
                    if !same_listing(existing, &listing) {
                        return Err(CatalogImportError::InconsistentProperty {
                            row: line,
                            id: listing.id,
                        });
                    }
                    existing.liens.extend(lien);
                }
                None => {
                    let mut listing = listing;
                    listing.liens.extend(lien);
                    records.push(listing);
                }
            }
        }

        Ok(InMemoryCatalog::new(records))
    }
}

fn same_listing(existing: &Property, candidate: &Property) -> bool {
    existing.name == candidate.name
        && existing.category == candidate.category
        && existing.address == candidate.address
        && existing.appraised_value == candidate.appraised_value
        && existing.starting_bid == candidate.starting_bid
        && existing.size_m2 == candidate.size_m2
        && existing.description == candidate.description
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    property_id: String,
    name: String,
    category: String,
    address: String,
    appraised_value: u64,
    starting_bid: u64,
    size_m2: f64,
    #[serde(default)]
    description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    lien_ranking: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    lien_creditor: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    lien_amount: Option<String>,
}

impl CatalogRow {
    fn lien(&self, line: usize) -> Result<Option<Lien>, CatalogImportError> {
        let incomplete = || CatalogImportError::IncompleteLien {
            row: line,
            id: self.property_id.clone(),
        };

        match (&self.lien_ranking, &self.lien_creditor, &self.lien_amount) {
            (None, None, None) => Ok(None),
            (Some(ranking), Some(creditor), Some(amount)) => {
                let ranking = ranking.parse::<u32>().map_err(|_| incomplete())?;
                let amount = amount.parse::<u64>().map_err(|_| incomplete())?;
                Ok(Some(Lien::new(ranking, creditor.clone(), amount)))
            }
            _ => Err(incomplete()),
        }
    }

    fn into_property(self, line: usize) -> Result<Property, CatalogImportError> {
        let category = self
            .category
            .parse::<PropertyCategory>()
            .map_err(|source| CatalogImportError::InvalidCategory { row: line, source })?;

        Ok(Property {
            id: self.property_id,
            name: self.name,
            category,
            address: self.address,
            appraised_value: self.appraised_value,
            starting_bid: self.starting_bid,
            size_m2: self.size_m2,
            description: self.description,
            liens: Vec::new(),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PropertyCatalog;

    const HEADER: &str = "property_id,name,category,address,appraised_value,starting_bid,size_m2,description,lien_ranking,lien_creditor,lien_amount\n";

    #[test]
    fn groups_rows_by_property_in_first_appearance_order() {
        let csv = format!(
            "{HEADER}\
HOU-010,Hill house,house,1 Hill-ro,400000000,280000000,120.5,garden,2,Tax office,5000000\n\
APT-010,River flat,apartment,2 River-ro,300000000,210000000,59.9,,1,Bank,150000000\n\
hou-010,Hill house,house,1 Hill-ro,400000000,280000000,120.5,garden,1,Bank,200000000\n"
        );

        let catalog = CsvCatalogImporter::from_reader(csv.as_bytes()).expect("import succeeds");
        let ids: Vec<&str> = catalog
            .properties()
            .iter()
            .map(|property| property.id.as_str())
            .collect();
        assert_eq!(ids, vec!["HOU-010", "APT-010"]);

        let house = catalog.find_property("HOU-010").expect("house present");
        assert_eq!(
            house.liens,
            vec![
                Lien::new(2, "Tax office", 5_000_000),
                Lien::new(1, "Bank", 200_000_000),
            ]
        );
        assert_eq!(house.category, PropertyCategory::House);
    }

    #[test]
    fn blank_lien_columns_produce_listing_without_liens() {
        let csv = format!("{HEADER}APT-011,Free flat,apartment,3 Free-ro,100,70,30.0,unencumbered,,,\n");
        let catalog = CsvCatalogImporter::from_reader(csv.as_bytes()).expect("import succeeds");
        let property = catalog.find_property("apt-011").expect("present");
        assert!(property.liens.is_empty());
    }

    #[test]
    fn rejects_unknown_category() {
        let csv = format!("{HEADER}VIL-001,Villa,villa,4 Villa-ro,100,70,30.0,,1,Bank,50\n");
        match CsvCatalogImporter::from_reader(csv.as_bytes()) {
            Err(CatalogImportError::InvalidCategory { row, source }) => {
                assert_eq!(row, 2);
                assert_eq!(source, UnknownCategory("villa".to_string()));
            }
            other => panic!("expected invalid category, got {other:?}"),
        }
    }

    #[test]
    fn rejects_partial_lien_columns() {
        let csv = format!("{HEADER}APT-012,Flat,apartment,5 Flat-ro,100,70,30.0,,1,,50\n");
        assert!(matches!(
            CsvCatalogImporter::from_reader(csv.as_bytes()),
            Err(CatalogImportError::IncompleteLien { row: 2, .. })
        ));
    }

    #[test]
    fn rejects_conflicting_listing_details() {
        let csv = format!(
            "{HEADER}\
APT-013,Flat,apartment,6 Flat-ro,100,70,30.0,,1,Bank,50\n\
APT-013,Flat,apartment,6 Flat-ro,999,70,30.0,,2,Tax,5\n"
        );
        assert!(matches!(
            CsvCatalogImporter::from_reader(csv.as_bytes()),
            Err(CatalogImportError::InconsistentProperty { row: 3, .. })
        ));
    }

    #[test]
    fn header_only_file_is_empty_catalog() {
        let catalog = CsvCatalogImporter::from_reader(HEADER.as_bytes()).expect("import succeeds");
        assert!(catalog.is_empty());
    }
}
