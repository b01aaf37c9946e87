use crate::render;
use auction_sim::catalog::{
    CatalogError, CsvCatalogImporter, InMemoryCatalog, PropertyCatalog, PropertyCategory,
};
use auction_sim::config::CatalogConfig;
use auction_sim::distribution::distribute;
use auction_sim::error::AppError;
use chrono::{Local, NaiveDate};
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Filter by property type (apartment or house)
    #[arg(long = "type", value_parser = parse_category)]
    pub(crate) category: Option<PropertyCategory>,
    /// Emit the matching records as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// ID of the property to simulate
    pub(crate) property_id: String,
    /// Expected winning bid (won)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) price: i64,
    /// Auction decision date shown in the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) sale_date: Option<NaiveDate>,
    /// Emit the distribution ledger as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn parse_category(raw: &str) -> Result<PropertyCategory, String> {
    raw.parse::<PropertyCategory>().map_err(|err| err.to_string())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<InMemoryCatalog, AppError> {
    match &config.path {
        Some(path) => Ok(CsvCatalogImporter::from_path(path)?),
        None => Ok(InMemoryCatalog::hwaseong()),
    }
}

pub(crate) fn run_list<C: PropertyCatalog>(catalog: &C, args: ListArgs) -> Result<(), AppError> {
    let ListArgs { category, json } = args;
    let properties = catalog.list_properties(category);
    info!(
        filter = category.map(PropertyCategory::as_str),
        matches = properties.len(),
        "listing properties"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&properties)?);
    } else {
        print!("{}", render::property_list(&properties));
    }

    Ok(())
}

pub(crate) fn run_simulate<C: PropertyCatalog>(
    catalog: &C,
    args: SimulateArgs,
) -> Result<(), AppError> {
    let SimulateArgs {
        property_id,
        price,
        sale_date,
        json,
    } = args;

    let property = match catalog.find_property(&property_id) {
        Ok(property) => property,
        Err(CatalogError::NotFound { id }) => {
            info!(%id, "property not in catalog");
            println!("{}", render::not_found(&id));
            return Ok(());
        }
    };

    let sale_date = sale_date.unwrap_or_else(|| Local::now().date_naive());
    let result = distribute(&property.liens, price);
    info!(
        property = %property.id,
        price,
        leftover = result.leftover,
        "simulation complete"
    );

    if json {
        let report = render::SimulationReport::new(property, sale_date, &result);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in render::distribution_report(property, sale_date, &result) {
            println!("{line}");
        }
    }

    Ok(())
}
