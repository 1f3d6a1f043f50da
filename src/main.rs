use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use match_engine::{config, score_match, utils, CvRecord, JdRecord};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cvmatch")]
#[command(about = "Score a candidate CV against a job description")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a structured CV record against a structured JD record
    Score {
        /// Path to the JD record (JSON)
        #[arg(long)]
        jd: PathBuf,
        /// Path to the CV record (JSON)
        #[arg(long)]
        cv: PathBuf,
        /// Write the report into this directory instead of stdout
        #[arg(long)]
        save: Option<PathBuf>,
        /// Optional YAML file overriding the scoring weights
        #[arg(long)]
        weights: Option<PathBuf>,
        /// Pretty-print the report JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Extract likely skill tokens from a raw CV text file
    Scan {
        /// Path to the raw CV text
        #[arg(long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Score {
            jd,
            cv,
            save,
            weights,
            pretty,
        } => run_score(jd, cv, save, weights, pretty).await,
        Command::Scan { input } => run_scan(input).await,
    }
}

async fn run_score(
    jd_path: PathBuf,
    cv_path: PathBuf,
    save: Option<PathBuf>,
    weights_path: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let jd_content = utils::read_file_content(&jd_path).await?;
    let jd: JdRecord = serde_json::from_str(&jd_content)
        .with_context(|| format!("Failed to parse JD record: {}", jd_path.display()))?;

    let cv_content = utils::read_file_content(&cv_path).await?;
    let cv: CvRecord = serde_json::from_str(&cv_content)
        .with_context(|| format!("Failed to parse CV record: {}", cv_path.display()))?;

    let weights = config::load_weights(weights_path.as_deref())?;

    info!(
        "Scoring candidate '{}' against role '{}'",
        cv.candidate_name, jd.role_title
    );

    let report = score_match(&jd, &cv, &weights);

    let json = if pretty {
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        serde_json::to_string(&report).context("Failed to serialize report")?
    };

    match save {
        Some(dir) => {
            utils::ensure_directory(&dir).await?;
            let path = utils::report_file_path(&dir, &cv.candidate_name);
            utils::write_file_content(&path, &json).await?;
            info!("Report written to: {}", path.display());
            println!("{}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

async fn run_scan(input: PathBuf) -> Result<()> {
    let text = utils::read_file_content(&input).await?;
    for skill in match_engine::extract_skills_from_text(&text) {
        println!("{}", skill);
    }
    Ok(())
}
