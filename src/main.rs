//! GuessBook CLI
//!
//! Terminal front end for the guess book:
//! - Record a guess
//! - List guesses and show statistics
//! - Export or reset the stored list

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use guessbook::config::{generate_default_config, Config};
use guessbook::guess::{DraftField, GuessBook, GuessRecord, Submission, SummaryStats};
use guessbook::store::{FileStore, KeyValueStore};

#[derive(Parser)]
#[command(name = "guessbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect guesses about the baby and see what everyone thinks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory, overrides the config file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a guess
    Add {
        /// Who is guessing
        #[arg(short, long)]
        name: String,
        /// masculino or feminino
        #[arg(short, long)]
        sex: String,
        /// Weight in kilograms
        #[arg(short, long)]
        weight: String,
        /// Length in centimetres
        #[arg(short, long)]
        length: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(short, long)]
        birth_date: String,
    },

    /// List every guess in the order it was made
    List,

    /// Show counts by sex and averages
    Stats,

    /// Export all guesses
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete the stored guess list
    Reset {
        /// Skip the confirmation check
        #[arg(long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Flat CSV row
#[derive(serde::Serialize)]
struct ExportRow<'a> {
    id: u64,
    name: &'a str,
    sex: &'a str,
    weight_kg: f64,
    length_cm: u32,
    birth_date: String,
    submitted_at: &'a str,
}

impl<'a> From<&'a GuessRecord> for ExportRow<'a> {
    fn from(record: &'a GuessRecord) -> Self {
        Self {
            id: record.id.0,
            name: &record.guesser_name,
            sex: record.sex.as_str(),
            weight_kg: record.weight_kg,
            length_cm: record.length_cm,
            birth_date: record.birth_date_display(),
            submitted_at: &record.submitted_at,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.to_string_lossy().to_string();
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    guessbook::init_logging(&config.logging);

    tracing::debug!(data_dir = %config.storage.data_dir, key = %config.storage.key, "opening guess book");
    let store = FileStore::new(&config.storage.data_dir);
    let mut book = GuessBook::load(store, config.storage.key.clone()).with_bounds(config.form);

    match cli.command {
        Commands::Add {
            name,
            sex,
            weight,
            length,
            birth_date,
        } => {
            book.update_draft_field(DraftField::GuesserName, name);
            book.update_draft_field(DraftField::Sex, sex);
            book.update_draft_field(DraftField::WeightKg, weight);
            book.update_draft_field(DraftField::LengthCm, length);
            book.update_draft_field(DraftField::BirthDate, birth_date);

            match book.submit_guess()? {
                Submission::Recorded(record) => {
                    println!(
                        "Recorded guess #{} from {}: {}, {}, {}, born {}",
                        book.len(),
                        record.guesser_name,
                        record.sex.label(),
                        record.weight_display(),
                        record.length_display(),
                        record.birth_date_display()
                    );
                }
                Submission::Incomplete { missing } => {
                    let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
                    bail!("missing fields: {}", names.join(", "));
                }
            }
        }

        Commands::List => {
            if book.is_empty() {
                println!("No guesses yet. Be the first:");
                println!("  guessbook add -n Ana -s feminino -w 3.4 -l 50 -b 2024-03-07");
            } else {
                print_table(book.records());
            }
        }

        Commands::Stats => {
            print_stats(&book.statistics());
        }

        Commands::Export { format, output } => {
            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    std::fs::File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?,
                ),
                None => Box::new(std::io::stdout()),
            };

            match format {
                ExportFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, book.records())?;
                    writeln!(out)?;
                }
                ExportFormat::Csv => {
                    let mut writer = csv::Writer::from_writer(out);
                    for record in book.records() {
                        writer.serialize(ExportRow::from(record))?;
                    }
                    writer.flush()?;
                }
            }

            if let Some(path) = output {
                eprintln!("Exported {} guesses to {}", book.len(), path.display());
            }
        }

        Commands::Reset { yes } => {
            if !yes {
                bail!(
                    "this deletes {} guesses; run again with --yes to confirm",
                    book.len()
                );
            }
            let key = book.key().to_string();
            let mut store = book.into_store();
            store.remove(&key)?;
            println!("Guess list cleared");
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_table(records: &[GuessRecord]) {
    println!(
        "{:<20} {:<10} {:<10} {:<13} {:<19} {}",
        "Nome", "Sexo", "Peso", "Tamanho", "Data de Nascimento", "Registrado em"
    );
    println!("{}", "-".repeat(96));

    for record in records {
        println!(
            "{:<20} {:<10} {:<10} {:<13} {:<19} {}",
            record.guesser_name,
            record.sex.label(),
            record.weight_display(),
            record.length_display(),
            record.birth_date_display(),
            record.submitted_at
        );
    }
}

fn print_stats(stats: &SummaryStats) {
    println!("Total de palpites: {}", stats.total);
    if stats.is_empty() {
        return;
    }

    println!();
    println!("Distribuição por Sexo:");
    for slice in stats.sex_distribution() {
        println!("  {:<10} {}", slice.label, slice.value as usize);
    }

    println!();
    println!("Médias dos Palpites:");
    println!("  Peso Médio     {:.2} kg", stats.average_weight_kg);
    println!("  Tamanho Médio  {:.2} cm", stats.average_length_cm);
}
