use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use diagville::{AppError, DiagnoseOptions};

#[derive(Parser)]
#[command(name = "diagville")]
#[command(version)]
#[command(
    about = "Generate city diagnostic reports from a remote model or a local template",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a diagnostic report for a city
    #[clap(visible_alias = "d")]
    Diagnose {
        /// City name (omit together with --population to use the wizard)
        #[arg(long)]
        city: Option<String>,
        /// Population count
        #[arg(long)]
        population: Option<u64>,
        /// Challenge to include (repeatable); see `diagville catalog`
        #[arg(long = "challenge")]
        challenges: Vec<String>,
        /// Priority to include (repeatable); see `diagville catalog`
        #[arg(long = "priority")]
        priorities: Vec<String>,
        /// Free-text comment
        #[arg(long)]
        comment: Option<String>,
        /// Generation engine: remote or local
        #[arg(long)]
        backend: Option<String>,
        /// TOML config file overriding the default knobs
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the report to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the prompt that would be sent, without dispatching
        #[arg(long)]
        prompt_preview: bool,
    },
    /// List the available challenges and priorities
    #[clap(visible_alias = "c")]
    Catalog,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Diagnose {
            city,
            population,
            challenges,
            priorities,
            comment,
            backend,
            config,
            out,
            prompt_preview,
        } => {
            let options = DiagnoseOptions {
                city,
                population,
                challenges,
                priorities,
                comment,
                backend,
                config_path: config,
                prompt_preview,
            };
            diagville::diagnose(options).and_then(|outcome| match out {
                Some(path) => {
                    fs::write(&path, outcome.text())?;
                    println!("✅ Rapport écrit dans {}", path.display());
                    Ok(())
                }
                None => {
                    println!("{}", outcome.text());
                    Ok(())
                }
            })
        }
        Commands::Catalog => {
            print!("{}", diagville::catalog());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
