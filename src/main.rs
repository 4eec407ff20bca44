//! factweave CLI: knowledge-graph triple extraction from text.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use factweave::annotate::RuleAnnotator;
use factweave::model::{Model, ModelConfig};

#[derive(Parser)]
#[command(name = "factweave", version, about = "Knowledge-graph triple extraction")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract entity pairs from a document and print the knowledge graph.
    Extract {
        /// Path to a plain-text file. Reads stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format: list, table, or json.
        #[arg(long, default_value = "table")]
        format: String,

        /// Run the coreference-resolution pass before extraction.
        #[arg(long)]
        coref: bool,

        /// Persist the extracted collection to this path.
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print a previously saved collection.
    Show {
        /// Path to a saved collection blob.
        #[arg(long)]
        load: PathBuf,

        /// Output format: list, table, or json.
        #[arg(long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            format,
            coref,
            save,
        } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(&path).into_diagnostic()?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf).into_diagnostic()?;
                    buf
                }
            };

            let mut model = Model::new(RuleAnnotator::new(), ModelConfig { coreference: coref });
            model.fit(&text)?;

            print_graph(&model, &format)?;

            if let Some(path) = save {
                model.save(&path)?;
                eprintln!("Saved {} pairs to {}", model.pairs().len(), path.display());
            }
        }

        Commands::Show { load, format } => {
            let model = Model::load(&load, RuleAnnotator::new(), ModelConfig::default())?;
            print_graph(&model, &format)?;
        }
    }

    Ok(())
}

fn print_graph(model: &Model<RuleAnnotator>, format: &str) -> Result<()> {
    if format == "json" {
        let json = serde_json::to_string_pretty(model.pairs()).into_diagnostic()?;
        println!("{json}");
        return Ok(());
    }
    let view = model.knowledge_graph(format)?;
    print!("{view}");
    Ok(())
}
