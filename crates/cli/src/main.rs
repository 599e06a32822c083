use anyhow::bail;
use api_shared::{
    CheckSymptomsRes, ConditionListRes, ConditionRes, ExtractSymptomsRes, MatchSummary,
    RecommendationRes, SymptomOptionsRes,
};
use arogya_core::{CheckerService, ConditionRecord, CoreConfig, Treatment, SYMPTOM_OPTIONS};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arogya")]
#[command(about = "Arogya symptom checker CLI")]
struct Cli {
    /// Directory containing core.yaml and extended.yaml (default: embedded catalog)
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank conditions for the given symptoms
    Check {
        /// Symptom labels, e.g. "Sore Throat"
        #[arg(required = true)]
        symptoms: Vec<String>,
    },
    /// Search core conditions by name or symptom
    Search {
        query: String,
    },
    /// Show a condition by id
    Info {
        /// Condition id, e.g. common_cold
        id: String,
    },
    /// List the symptom labels offered to users
    Symptoms,
    /// Spot symptom keywords in free text
    Extract {
        transcript: String,
    },
}

/// Errors are printed to stderr by the `anyhow` report and the process exits non-zero.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

fn run(cli: Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        writeln!(out, "Use 'arogya --help' for commands")?;
        return Ok(());
    };

    let cfg = CoreConfig::new(cli.catalog_dir)?;
    let service = CheckerService::from_catalog(cfg.load_catalog()?);

    match command {
        Commands::Check { symptoms } => {
            let check = service.check(&symptoms);

            if cli.json {
                let res = CheckSymptomsRes {
                    matches: check.matches.iter().map(MatchSummary::from).collect(),
                    recommendation: RecommendationRes::from(&check.recommendation),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&res)?)?;
            } else {
                if check.matches.is_empty() {
                    writeln!(out, "No matching conditions.")?;
                }
                for (rank, m) in check.matches.iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} [{}] score {}, {}",
                        rank + 1,
                        m.condition.name,
                        m.condition.id,
                        m.score,
                        m.condition.severity
                    )?;
                }
                writeln!(out)?;
                write!(out, "{}", check.recommendation.summary_text())?;
                for t in &check.recommendation.treatments {
                    writeln!(out, "  * {}", format_treatment(t))?;
                }
            }
        }
        Commands::Search { query } => {
            let results = service.search(&query);
            if cli.json {
                let res = ConditionListRes::from_records(results);
                writeln!(out, "{}", serde_json::to_string_pretty(&res)?)?;
            } else if results.is_empty() {
                writeln!(out, "No conditions found for '{}'.", query)?;
            } else {
                for c in results {
                    writeln!(out, "{}: {} ({})", c.id, c.name, c.severity)?;
                }
            }
        }
        Commands::Info { id } => {
            let Some(c) = service.condition(&id) else {
                bail!("Unknown condition id: {}", id);
            };
            if cli.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&ConditionRes::from(c))?)?;
            } else {
                print_condition(out, c)?;
            }
        }
        Commands::Symptoms => {
            if cli.json {
                let res = SymptomOptionsRes {
                    symptoms: SYMPTOM_OPTIONS.iter().map(|s| s.to_string()).collect(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&res)?)?;
            } else {
                for s in SYMPTOM_OPTIONS {
                    writeln!(out, "{}", s)?;
                }
            }
        }
        Commands::Extract { transcript } => {
            let scan = service.scan_transcript(&transcript);
            if cli.json {
                let res = ExtractSymptomsRes {
                    keywords: scan.keywords.iter().map(|k| k.to_string()).collect(),
                    context: scan.context,
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&res)?)?;
            } else {
                writeln!(out, "Keywords: {}", scan.keywords.join(", "))?;
                if let Some(context) = scan.context {
                    writeln!(out, "{}", context)?;
                }
            }
        }
    }

    Ok(())
}

fn format_treatment(t: &Treatment) -> String {
    let mut line = format!("{} {}, {}, {}", t.name, t.dosage, t.frequency, t.duration);
    if let Some(notes) = &t.notes {
        line.push_str(&format!(" ({})", notes));
    }
    line
}

fn print_condition(out: &mut impl Write, c: &ConditionRecord) -> std::io::Result<()> {
    writeln!(out, "{} [{}]", c.name, c.id)?;
    writeln!(out, "{}", c.description)?;
    writeln!(out, "Severity: {}", c.severity)?;
    writeln!(out, "Duration: {}", c.duration)?;
    writeln!(out, "Symptoms: {}", c.symptoms.join(", "))?;
    writeln!(out, "Common causes: {}", c.common_causes.join(", "))?;
    writeln!(out, "Treatments:")?;
    for t in &c.treatments {
        writeln!(out, "  * {}", format_treatment(t))?;
    }
    writeln!(out, "Home remedies: {}", c.home_remedies.join(", "))?;
    writeln!(out, "Red flags: {}", c.red_flags.join(", "))
}
