use super::domain::{Lien, Property, PropertyCategory};
use super::repository::PropertyCatalog;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<Property>,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<Property>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fictional Hwaseong-si listings shipped with the tool.
    pub fn hwaseong() -> Self {
        Self::new(vec![
            Property {
                id: "APT-001".to_string(),
                name: "Dongtan Station Central Park Seohui Starhills 84m2".to_string(),
                category: PropertyCategory::Apartment,
                address: "868 Osan-dong, Hwaseong-si, Gyeonggi-do".to_string(),
                appraised_value: 520_000_000,
                starting_bid: 364_000_000,
                size_m2: 84.9,
                description: "Walking distance to Dongtan station, strong amenities".to_string(),
                liens: vec![
                    Lien::new(1, "KB Kookmin Bank mortgage", 280_000_000),
                    Lien::new(2, "Hwaseong City tax office arrears", 8_000_000),
                    Lien::new(3, "Management office fees", 3_200_000),
                ],
            },
            Property {
                id: "APT-002".to_string(),
                name: "Dongtan Lake Xi 101m2".to_string(),
                category: PropertyCategory::Apartment,
                address: "533 Cheonggye-dong, Hwaseong-si, Gyeonggi-do".to_string(),
                appraised_value: 690_000_000,
                starting_bid: 483_000_000,
                size_m2: 101.4,
                description: "Next to the lake park, good school district".to_string(),
                liens: vec![
                    Lien::new(1, "Shinhan Bank mortgage", 360_000_000),
                    Lien::new(2, "Jungang Heights jeonse deposit", 120_000_000),
                    Lien::new(3, "Management office fees", 2_800_000),
                ],
            },
            Property {
                id: "HOU-001".to_string(),
                name: "Hyangnam-eup detached house 125m2".to_string(),
                category: PropertyCategory::House,
                address: "312-5 Hannae-ri, Hyangnam-eup, Hwaseong-si, Gyeonggi-do".to_string(),
                appraised_value: 410_000_000,
                starting_bid: 287_000_000,
                size_m2: 125.6,
                description: "Near the Hyangnam pharmaceutical complex".to_string(),
                liens: vec![
                    Lien::new(1, "IBK Industrial Bank mortgage", 220_000_000),
                    Lien::new(2, "Korea Housing & Urban Guarantee jeonse", 95_000_000),
                    Lien::new(3, "Hwaseong City property tax", 4_500_000),
                ],
            },
            Property {
                id: "HOU-002".to_string(),
                name: "Bongdam-eup multi-family house 198m2".to_string(),
                category: PropertyCategory::House,
                address: "89-12 Donghwa-ri, Bongdam-eup, Hwaseong-si, Gyeonggi-do".to_string(),
                appraised_value: 530_000_000,
                starting_bid: 371_000_000,
                size_m2: 198.2,
                description: "Bongdam 2 new town, multi-family".to_string(),
                liens: vec![
                    Lien::new(1, "Woori Bank mortgage", 310_000_000),
                    Lien::new(2, "Tenant deposits", 150_000_000),
                    Lien::new(3, "Maintenance fees", 5_600_000),
                ],
            },
        ])
    }
}

impl PropertyCatalog for InMemoryCatalog {
    fn properties(&self) -> &[Property] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    #[test]
    fn lookup_ignores_identifier_case() {
        let catalog = InMemoryCatalog::hwaseong();
        let upper = catalog.find_property("APT-001").expect("upper-case id");
        let lower = catalog.find_property("apt-001").expect("lower-case id");
        assert_eq!(upper, lower);
        assert_eq!(upper.starting_bid, 364_000_000);
    }

    #[test]
    fn lookup_reports_requested_identifier_when_missing() {
        let catalog = InMemoryCatalog::hwaseong();
        match catalog.find_property("apt-999") {
            Err(CatalogError::NotFound { id }) => assert_eq!(id, "apt-999"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let catalog = InMemoryCatalog::hwaseong();
        let houses: Vec<&str> = catalog
            .list_properties(Some(PropertyCategory::House))
            .into_iter()
            .map(|property| property.id.as_str())
            .collect();
        assert_eq!(houses, vec!["HOU-001", "HOU-002"]);
        assert_eq!(catalog.list_properties(None).len(), 4);
    }

    #[test]
    fn filter_on_empty_catalog_is_empty_not_error() {
        let catalog = InMemoryCatalog::default();
        assert!(catalog
            .list_properties(Some(PropertyCategory::Apartment))
            .is_empty());
    }
}
