mod error;
mod fetch;
mod harvest;
mod resume;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "doc_harvest",
    about = "Tag/class/id table harvester and resume field extractor"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and write its class/id-bearing tags as a CSV table
    Harvest {
        /// Page URL to fetch
        url: String,
        /// Output CSV path (fully overwritten on each run)
        #[arg(short, long, default_value = "class_and_id_table.csv")]
        out: PathBuf,
        /// Prepend an unnamed 0-based row-index column
        #[arg(long)]
        row_index: bool,
    },
    /// Extract profile fields from a stored resume PDF
    Resume {
        /// User id; resolves to <dir>/<user_id>_resume.pdf
        user_id: String,
        /// Resume storage directory
        #[arg(short, long, default_value = "resumes")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Harvest { url, out, row_index } => {
            let markup = fetch::fetch_markup(&url).await?;
            let records = harvest::harvest(&markup);
            harvest::table::write_table_path(&records, &out, row_index)?;
            println!("Saved {} records to {}", records.len(), out.display());
            Ok(())
        }
        Commands::Resume { user_id, dir } => {
            let path = resume::source::resume_path(&dir, &user_id);
            let text = match resume::source::load_resume_text(&path) {
                Ok(text) => text,
                Err(error::Error::ResumeNotFound(path)) => {
                    anyhow::bail!(
                        "no resume found for '{}' (expected {})",
                        user_id,
                        path.display()
                    );
                }
                Err(e) => return Err(e.into()),
            };
            let profile = resume::extract(&text);
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(())
        }
    }
}
