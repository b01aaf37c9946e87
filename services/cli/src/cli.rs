use crate::commands::{load_catalog, run_list, run_simulate, ListArgs, SimulateArgs};
use auction_sim::config::AppConfig;
use auction_sim::error::AppError;
use auction_sim::telemetry;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "auction-sim",
    about = "Simulate how a foreclosure auction's winning bid is distributed across recorded liens",
    version
)]
pub(crate) struct Cli {
    /// CSV catalog to use instead of the built-in listings
    #[arg(long, global = true)]
    pub(crate) catalog: Option<PathBuf>,
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List available properties
    List(ListArgs),
    /// Simulate lien distribution for a property
    Simulate(SimulateArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    execute(Cli::parse())
}

pub(crate) fn execute(cli: Cli) -> Result<(), AppError> {
    let Cli { catalog, command } = cli;

    let Some(command) = command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = AppConfig::load_with_catalog(catalog)?;
    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(&config.catalog)?;
    match command {
        Command::List(args) => run_list(&catalog, args),
        Command::Simulate(args) => run_simulate(&catalog, args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_sim::catalog::PropertyCategory;
    use chrono::NaiveDate;

    #[test]
    fn no_subcommand_parses_to_help() {
        let cli = Cli::try_parse_from(["auction-sim"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn executing_without_subcommand_prints_help() {
        let cli = Cli::try_parse_from(["auction-sim"]).expect("parses");
        assert!(execute(cli).is_ok());
    }

    #[test]
    fn help_path_does_not_load_catalog() {
        let cli = Cli {
            catalog: Some(PathBuf::from("/nonexistent/auction-sim.csv")),
            command: None,
        };
        assert!(execute(cli).is_ok());
    }

    // only test in this crate that installs the global subscriber
    #[test]
    fn catalog_flag_is_used_by_commands() {
        let cli = Cli::try_parse_from([
            "auction-sim",
            "--catalog",
            "/nonexistent/auction-sim.csv",
            "list",
        ])
        .expect("parses");
        assert!(matches!(execute(cli), Err(AppError::Catalog(_))));
    }

    #[test]
    fn list_accepts_type_filter() {
        let cli = Cli::try_parse_from(["auction-sim", "list", "--type", "house"]).expect("parses");
        match cli.command {
            Some(Command::List(args)) => {
                assert_eq!(args.category, Some(PropertyCategory::House));
                assert!(!args.json);
            }
            other => panic!("expected list command, got {other:?}"),
        }
    }

    #[test]
    fn list_rejects_unknown_type() {
        assert!(Cli::try_parse_from(["auction-sim", "list", "--type", "castle"]).is_err());
    }

    #[test]
    fn simulate_requires_price() {
        let err = Cli::try_parse_from(["auction-sim", "simulate", "APT-001"])
            .expect_err("price is mandatory");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn simulate_accepts_negative_price_and_sale_date() {
        let cli = Cli::try_parse_from([
            "auction-sim",
            "--catalog",
            "listings.csv",
            "simulate",
            "apt-001",
            "--price",
            "-100",
            "--sale-date",
            "2025-03-14",
        ])
        .expect("parses");

        assert_eq!(cli.catalog, Some(PathBuf::from("listings.csv")));
        match cli.command {
            Some(Command::Simulate(args)) => {
                assert_eq!(args.property_id, "apt-001");
                assert_eq!(args.price, -100);
                assert_eq!(
                    args.sale_date,
                    Some(NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"))
                );
            }
            other => panic!("expected simulate command, got {other:?}"),
        }
    }
}
