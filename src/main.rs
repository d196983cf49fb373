use clap::{Args, Parser, Subcommand};
use eyre::Result;
use filtertrack::{
    ExitStatus, FilterChangeUpdate, NewFilterChange, Store, StoreError, UpdateOutcome, config, export, render,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "filtertrack")]
#[command(about = "Air filter change tracker - record and review maintenance events per location")]
#[command(version)]
struct Cli {
    /// Path to the SQLite database file (default: filters.db, or the config file's `database`)
    #[arg(long, global = true, env = "FILTERTRACK_DB")]
    db: Option<PathBuf>,

    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON (check, list, last_changes)
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a filter change
    Add {
        #[arg(long)]
        location: String,

        #[arg(long)]
        size: String,

        #[arg(long = "product_number", alias = "product-number")]
        product_number: String,

        /// YYYY-MM-DD (default: today)
        #[arg(long = "change_date", alias = "change-date")]
        change_date: Option<String>,
    },

    /// Show the last change at a location
    Check {
        #[arg(long)]
        location: String,
    },

    /// List every recorded change
    List,

    /// Show the last change at each location
    #[command(name = "last_changes", alias = "last-changes")]
    LastChanges,

    /// Delete a record by ID
    Delete {
        #[arg(long)]
        id: i64,
    },

    /// Edit fields of a record by ID
    Edit {
        #[arg(long)]
        id: i64,

        #[command(flatten)]
        fields: EditFields,
    },

    /// Export every record to CSV
    #[command(name = "export_all", alias = "export-all")]
    ExportAll {
        #[arg(long)]
        filename: PathBuf,
    },

    /// Export the last change per location to CSV
    #[command(name = "export_last", alias = "export-last")]
    ExportLast {
        #[arg(long)]
        filename: PathBuf,
    },

    /// Import records from a CSV export (IDs are reassigned)
    Import {
        #[arg(long)]
        filename: PathBuf,
    },
}

#[derive(Args)]
struct EditFields {
    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    size: Option<String>,

    #[arg(long = "product_number", alias = "product-number")]
    product_number: Option<String>,

    #[arg(long = "change_date", alias = "change-date")]
    change_date: Option<String>,
}

impl From<EditFields> for FilterChangeUpdate {
    fn from(fields: EditFields) -> Self {
        Self {
            location: fields.location,
            size: fields.size,
            product_number: fields.product_number,
            change_date: fields.change_date,
        }
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            if e.print().is_err() {
                eprintln!("{}", e);
            }
            process::exit(ExitStatus::Validation.code());
        }
        Err(e) => e.exit(),
    };

    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let status = match run(cli) {
        Ok(status) => status,
        Err(report) => {
            let status = report
                .downcast_ref::<StoreError>()
                .map(StoreError::exit_code)
                .unwrap_or(ExitStatus::Storage);

            if status == ExitStatus::NotFound {
                println!("{}", report);
            } else {
                eprintln!("Error: {:#}", report);
            }
            status
        }
    };

    process::exit(status.code());
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitStatus> {
    let db_path = config::resolve_db_path(cli.db, cli.config)?;
    debug!(path = ?db_path, "Opening store");
    let store = Store::open(&db_path)?;

    match cli.command {
        Commands::Add {
            location,
            size,
            product_number,
            change_date,
        } => {
            let new = NewFilterChange {
                location,
                size,
                product_number,
                change_date,
            };
            let id = store.create(&new)?;
            let record = store.get(id)?;
            println!(
                "Filter change recorded for {} on {}.",
                record.location,
                record.change_date_str()
            );
        }
        Commands::Check { location } => {
            let record = store.find_latest_by_location(&location)?;
            if cli.json {
                println!("{}", render::json(&record)?);
            } else {
                println!("{}", render::last_change(&record));
            }
        }
        Commands::List => {
            let records = store.list_all()?;
            if cli.json {
                println!("{}", render::json(&records)?);
            } else {
                println!("{}", render::record_table(&records));
            }
        }
        Commands::LastChanges => {
            let latest = store.latest_per_location()?;
            if cli.json {
                println!("{}", render::json(&latest)?);
            } else {
                println!("{}", render::latest_table(&latest));
            }
        }
        Commands::Delete { id } => {
            store.delete(id)?;
            println!("Record with ID {} deleted.", id);
        }
        Commands::Edit { id, fields } => match store.update(id, &fields.into())? {
            UpdateOutcome::Updated => println!("Record with ID {} updated.", id),
            UpdateOutcome::NoChanges => println!("No fields provided to update."),
        },
        Commands::ExportAll { filename } => {
            if export_records(&filename, &store.export_all()?)? {
                println!("All records exported to {}.", filename.display());
            }
        }
        Commands::ExportLast { filename } => {
            if export_records(&filename, &store.export_latest_per_location()?)? {
                println!("Last filter change per location exported to {}.", filename.display());
            }
        }
        Commands::Import { filename } => {
            let records = export::read_csv(&filename)?;
            let count = store.import(&records)?;
            println!("Imported {} records from {}.", count, filename.display());
        }
    }

    Ok(ExitStatus::Success)
}

/// Write a CSV export unless there is nothing to write
fn export_records(filename: &Path, records: &[filtertrack::FilterChange]) -> Result<bool> {
    if records.is_empty() {
        println!("No records to export.");
        return Ok(false);
    }

    export::write_csv(filename, records)?;
    Ok(true)
}
