use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use jobdesk::presentation::commands::{dispatch, AdminCommand};
use jobdesk::presentation::dto::{
    ApiResponse, ApplicationFormDto, ConnectivityReport, JobFormDto, JobView, MutationView,
};
use jobdesk::shared::AppConfig;
use jobdesk::state::AppState;

#[derive(Parser)]
#[command(name = "jobdesk")]
#[command(about = "Job board admin console with a local mirror fallback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the remote job store (overrides JOBDESK_REMOTE_URL)
    #[arg(long)]
    remote_url: Option<String>,

    /// Directory holding the local mirror database (overrides JOBDESK_DATA_DIR)
    #[arg(long)]
    data_dir: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all jobs, newest first
    List,
    /// Post a new job
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        vacancy: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        last_date: Option<String>,
        #[arg(long)]
        apply_link: Option<String>,
        #[arg(long)]
        short_desc: Option<String>,
        #[arg(long)]
        full_desc: Option<String>,
    },
    /// Edit an existing job; flags you leave out keep their current values
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        vacancy: Option<String>,
        #[arg(long)]
        salary: Option<String>,
        #[arg(long)]
        last_date: Option<String>,
        #[arg(long)]
        apply_link: Option<String>,
        #[arg(long)]
        short_desc: Option<String>,
        #[arg(long)]
        full_desc: Option<String>,
    },
    /// Delete a job by id
    Delete { id: i64 },
    /// Submit a freelance application
    Apply {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: Option<String>,
        #[arg(long)]
        portfolio_link: Option<String>,
    },
    /// Check whether the remote store is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    jobdesk::init_logging();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.remote_url {
        config.remote.base_url = url;
    }
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    info!("Starting jobdesk v{}", env!("CARGO_PKG_VERSION"));
    let state = AppState::new(config).await?;

    match cli.command {
        Commands::List => {
            let data = expect_data(dispatch(&state, AdminCommand::ListJobs).await)?;
            let jobs: Vec<JobView> = serde_json::from_value(data)?;
            print_jobs(&jobs);
        }
        Commands::Add {
            title,
            department,
            location,
            vacancy,
            salary,
            last_date,
            apply_link,
            short_desc,
            full_desc,
        } => {
            let form = JobFormDto {
                title,
                department,
                location,
                vacancy,
                salary,
                last_date,
                apply_link,
                short_desc,
                full_desc,
                status: None,
            };
            let data = expect_data(dispatch(&state, AdminCommand::SubmitJob(form)).await)?;
            let view: MutationView = serde_json::from_value(data)?;
            println!("{}", view.message);
        }
        Commands::Edit {
            id,
            title,
            department,
            location,
            vacancy,
            salary,
            last_date,
            apply_link,
            short_desc,
            full_desc,
        } => {
            // Same shape as the admin page: fetch the list, open the record in
            // the form, submit the full form with any edited fields applied.
            expect_data(dispatch(&state, AdminCommand::ListJobs).await)?;
            let prefill = expect_data(dispatch(&state, AdminCommand::BeginEdit { id }).await)?;
            let current: JobView = serde_json::from_value(prefill)?;

            let form = JobFormDto {
                title: title.unwrap_or(current.title),
                department: department.or(current.department),
                location: location.or(current.location),
                vacancy: vacancy.or(current.vacancy),
                salary: salary.or(current.salary),
                last_date: last_date.or(current.last_date),
                apply_link: apply_link.or(current.apply_link),
                short_desc: short_desc.or(current.short_desc),
                full_desc: full_desc.or(current.full_desc),
                status: Some(current.status),
            };
            let data = expect_data(dispatch(&state, AdminCommand::SubmitJob(form)).await)?;
            let view: MutationView = serde_json::from_value(data)?;
            println!("{}", view.message);
        }
        Commands::Delete { id } => {
            let data = expect_data(dispatch(&state, AdminCommand::DeleteJob { id }).await)?;
            let view: MutationView = serde_json::from_value(data)?;
            println!("{}", view.message);
        }
        Commands::Apply {
            name,
            email,
            message,
            portfolio_link,
        } => {
            let form = ApplicationFormDto {
                name,
                email,
                message,
                portfolio_link,
            };
            let data = expect_data(dispatch(&state, AdminCommand::SubmitApplication(form)).await)?;
            let message: String = serde_json::from_value(data)?;
            println!("{message}");
        }
        Commands::Check => {
            let data = expect_data(dispatch(&state, AdminCommand::CheckRemote).await)?;
            let report: ConnectivityReport = serde_json::from_value(data)?;
            if report.reachable {
                println!("{}", report.detail);
            } else {
                println!("Remote store is unreachable: {}", report.detail);
            }
        }
    }

    Ok(())
}

fn expect_data(response: ApiResponse<Value>) -> Result<Value> {
    if response.success {
        Ok(response.data.unwrap_or(Value::Null))
    } else {
        anyhow::bail!(
            response
                .error
                .unwrap_or_else(|| "Unknown error".to_string())
        )
    }
}

fn print_jobs(jobs: &[JobView]) {
    if jobs.is_empty() {
        println!("No jobs posted yet.");
        return;
    }
    println!("{:>8}  {:<32} {:<16} {:<14} {}", "ID", "TITLE", "DEPARTMENT", "LOCATION", "CREATED");
    for job in jobs {
        println!(
            "{:>8}  {:<32} {:<16} {:<14} {}",
            job.id,
            job.title,
            job.department.as_deref().unwrap_or("-"),
            job.location.as_deref().unwrap_or("-"),
            job.created_at
        );
    }
}
