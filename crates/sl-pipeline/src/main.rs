use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

use sl_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use sl_pipeline::{
    load_candidate_profiles, load_job_requirements, rank, render_report, screen_all, PipelineError,
};

#[derive(Debug, Parser)]
#[command(
    name = "sl-pipeline",
    about = "Screen structured candidate profiles against a job requirements file"
)]
struct Cli {
    /// Path to the structured job requirements JSON document
    #[arg(long, env = "SL_JOB_FILE")]
    job: PathBuf,

    /// Directory of structured candidate profile JSON files
    #[arg(long, env = "SL_PROFILE_DIR")]
    profiles: PathBuf,
}

fn run(cli: &Cli) -> Result<String, PipelineError> {
    let job = load_job_requirements(&cli.job)?;
    let profiles = load_candidate_profiles(&cli.profiles)?;
    info!(
        candidates = profiles.len(),
        required_skills = job.required_skills.len(),
        minimum_experience_years = job.minimum_experience_years,
        "screening batch loaded"
    );

    let mut results = screen_all(&job, &profiles);
    rank(&mut results);
    Ok(render_report(&results))
}

fn main() -> ExitCode {
    dotenv().ok();
    install_tracing_panic_hook("sl-pipeline");
    init_tracing_subscriber("sl-pipeline");

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "pipeline failed");
            ExitCode::FAILURE
        }
    }
}
