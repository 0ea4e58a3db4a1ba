// src/main.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod catalog;
pub mod config;
pub mod error;
pub mod io;
pub mod layout;
pub mod model;
pub mod state;
pub mod utils;

use catalog::ElementCatalog;
use config::Config;
use layout::PeriodicGrid;
use model::Category;
use state::AppState;
use utils::report;

#[derive(Parser, Debug)]
#[command(name = "elementii")]
#[command(version, about = "Browse and search the periodic table", long_about = None)]
struct Cli {
    /// Element dataset to use instead of the bundled one
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Plain log prefixes
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Free-text search by number, symbol, name or category
    Search {
        #[arg(default_value = "")]
        query: String,
        /// Print which rule matched
        #[arg(long)]
        explain: bool,
    },
    /// Full details of one element (number, symbol or name)
    Show { element: String },
    /// Periodic table layout
    Grid {
        /// Highlight one category, e.g. "noble gas"
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Bohr-model shells and orbit radii
    Bohr {
        element: String,
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Categories and their members
    Categories,
    /// Print the effective settings, optionally writing them to disk
    Config {
        #[arg(long)]
        write: bool,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_label(s).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category '{}' (expected one of: {})", s, known.join(", "))
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_msg) = Config::load();
    let level = config.log_level.raised(cli.verbose).to_filter();
    let use_color = config.display.use_color && !cli.no_color;
    if let Err(e) = utils::logger::init(level, use_color) {
        eprintln!("Logger already initialised: {}", e);
    }
    log::info!("{}", config_msg);

    if let Command::Config { write } = cli.command {
        return show_config(&config, write);
    }

    let state = AppState::with_dataset(config, cli.data);
    let catalog = match state.wait_catalog() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Could not load element data: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&state, catalog, cli.command) {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(msg) => {
            log::error!("{}", msg);
            ExitCode::FAILURE
        }
    }
}

fn run(state: &AppState, catalog: &ElementCatalog, command: Command) -> Result<String, String> {
    match command {
        Command::Search { query, explain } => {
            let results = catalog.search(&query);
            let mut out = String::new();
            if explain {
                out.push_str(&format!("Matched by: {:?}\n", catalog.explain(&query)));
            }
            out.push_str(&report::search_table(&results, state.config.display.max_results));
            log::debug!("Query cache: {:?}", catalog.cache_stats());
            Ok(out)
        }
        Command::Show { element } => catalog
            .lookup(&element)
            .map(report::element_detail)
            .ok_or_else(|| format!("No element matches '{}'", element)),
        Command::Grid { category } => {
            let grid = PeriodicGrid::build(catalog.records());
            Ok(report::grid_text(&grid, category))
        }
        Command::Bohr { element, radius } => {
            let e = catalog
                .lookup(&element)
                .ok_or_else(|| format!("No element matches '{}'", element))?;
            let layout = match radius {
                Some(r) if r > 0.0 => layout::BohrLayout::for_element(e, r),
                Some(r) => return Err(format!("Radius must be positive, got {}", r)),
                None => state.bohr_layout(e),
            };
            Ok(report::bohr_summary(e, &layout))
        }
        Command::Categories => Ok(report::category_summary(catalog)),
        Command::Config { .. } => Err("config takes no catalog".to_string()),
    }
}

fn show_config(config: &Config, write: bool) -> ExitCode {
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Could not serialise settings: {}", e);
            return ExitCode::FAILURE;
        }
    }
    if write {
        match config.save() {
            Ok(msg) => log::info!("{}", msg),
            Err(msg) => {
                log::error!("{}", msg);
                return ExitCode::FAILURE;
            }
        }
    }
    eprintln!("Settings file: {:?}", Config::get_path());
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let catalog = ElementCatalog::build(io::load_bundled().unwrap()).unwrap();
        AppState::with_catalog(Config::default(), catalog)
    }

    fn exec(args: &[&str]) -> Result<String, String> {
        let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
        let state = state();
        let catalog = state.wait_catalog().map_err(|e| e.to_string())?;
        run(&state, catalog, cli.command)
    }

    #[test]
    fn test_cli_parses_globals() {
        let cli = Cli::try_parse_from(["elementii", "-vv", "search", "he", "--data", "x.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data, Some(PathBuf::from("x.json")));
    }

    #[test]
    fn test_category_argument() {
        let cli = Cli::try_parse_from(["elementii", "grid", "--category", "Noble Gas"]).unwrap();
        assert!(matches!(cli.command, Command::Grid { category: Some(Category::NobleGas) }));
        assert!(Cli::try_parse_from(["elementii", "grid", "--category", "plasma"]).is_err());
    }

    #[test]
    fn test_search_command() {
        let out = exec(&["elementii", "search", "26", "--explain"]).unwrap();
        assert!(out.starts_with("Matched by: AtomicNumber"));
        assert!(out.contains("Iron"));
    }

    #[test]
    fn test_show_unknown_element() {
        assert!(exec(&["elementii", "show", "Oxygen"]).unwrap().contains("Oxygen (O)"));
        assert_eq!(
            exec(&["elementii", "show", "Zz"]).unwrap_err(),
            "No element matches 'Zz'"
        );
    }

    #[test]
    fn test_bohr_radius_validation() {
        assert!(exec(&["elementii", "bohr", "Ne", "--radius", "50"]).unwrap().contains("Neon"));
        assert!(exec(&["elementii", "bohr", "Ne", "--radius", "-1"]).is_err());
    }
}
