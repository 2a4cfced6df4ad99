mod analyze;
mod gitlab;
mod model;
mod report;
mod utils;

use crate::analyze::{Analyzer, ReportData};
use crate::gitlab::{
    GitlabClient, HttpTransport, RateLimiter, DEFAULT_PARALLEL, DEFAULT_PER_PAGE,
    DEFAULT_REQUESTS_PER_SECOND,
};
use crate::report::MarkdownReport;
use crate::utils::MultiProgressNew;
use clap::{Parser, Subcommand};
use chrono::{DateTime, Utc};
use indicatif::{MultiProgress, ProgressBar};
use model::{parse_datetime, Config, IssuesFilters, Result};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "time-report", version, about = "GitLab time tracking reports")]
struct Args {
    /// API root, e.g. https://gitlab.example.com/api/v4 (env: GITLAB_URL)
    #[arg(long = "url", global = true)]
    gitlab_url: Option<String>,
    /// Private access token (env: GITLAB_TOKEN)
    #[arg(long = "token", global = true)]
    gitlab_token: Option<String>,
    #[arg(long = "per-page", global = true, default_value_t = DEFAULT_PER_PAGE)]
    per_page: u32,
    /// Page requests in flight per listing
    #[arg(long = "parallel", global = true, default_value_t = DEFAULT_PARALLEL)]
    parallel: usize,
    /// Requests allowed per second
    #[arg(long = "rate-limit", global = true, default_value_t = DEFAULT_REQUESTS_PER_SECOND)]
    rate_limit: usize,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Time spent and estimated per user
    Report(ReportArgs),
    /// Today's time tracking notes of one user
    Log(LogArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ReportArgs {
    #[arg(short = 'l', long = "labels", num_args = 1..)]
    labels: Vec<String>,
    /// Only closed issues and merged merge requests
    #[arg(short = 'c', long = "closed")]
    closed: bool,
    #[arg(short = 'u', long = "username")]
    username: Option<String>,
    #[arg(short = 'm', long = "milestone")]
    milestone: Option<String>,
    /// RFC 3339 timestamp or YYYY-MM-DD
    #[arg(long = "closed-after", value_parser = parse_datetime)]
    closed_after: Option<DateTime<Utc>>,
    /// RFC 3339 timestamp or YYYY-MM-DD
    #[arg(long = "closed-before", value_parser = parse_datetime)]
    closed_before: Option<DateTime<Utc>>,
    /// One row per task instead of per-user totals
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
    /// Write the verbose rows as JSON to this file
    #[arg(long = "export", requires = "verbose")]
    export: Option<PathBuf>,
}

impl ReportArgs {
    fn filters(&self) -> IssuesFilters {
        fn non_empty(value: &Option<String>) -> Option<String> {
            value.clone().filter(|value| !value.trim().is_empty())
        }

        IssuesFilters {
            labels: self.labels.clone(),
            just_closed: self.closed,
            milestone: non_empty(&self.milestone),
            verbose: self.verbose,
            username: non_empty(&self.username),
            closed_after: self.closed_after,
            closed_before: self.closed_before,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
struct LogArgs {
    #[arg(short = 'u', long = "username")]
    username: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(error) = run(&args).await {
        eprintln!("\nerror: {error}");
        if error.is_transport() {
            eprintln!("check GITLAB_URL, GITLAB_TOKEN and the network connection");
        }
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = Config::from_env(args.gitlab_url.clone(), args.gitlab_token.clone())?;
    let limiter = Arc::new(RateLimiter::per_second(args.rate_limit)?);
    let client = GitlabClient::new(HttpTransport::new(), limiter, &config)
        .with_paging(args.per_page, args.parallel);

    match &args.command {
        Command::Report(report_args) => report(&client, report_args).await,
        Command::Log(log_args) => time_log(&client, log_args).await,
    }
}

async fn report(client: &GitlabClient<HttpTransport>, args: &ReportArgs) -> Result<()> {
    let filters = args.filters();
    let multi_progress = MultiProgress::default();
    let pb = multi_progress.add_spinner("retrieving data ...");

    let data: ReportData = with_spinner(&pb, analyze::collect(client, &filters)).await?;
    pb.finish_with_message(format!(
        "✅ Retrieved {} issues, {} merge requests, {} multi-assign issues",
        data.issues.len(),
        data.merge_requests.len(),
        data.multi_assign_issues.len(),
    ));

    if filters.verbose {
        let rows = data.full_report(&filters);
        println!("{}", rows.report_create()?);
        if let Some(path) = &args.export {
            report::write_export(path, &rows)?;
        }
    } else {
        println!("{}", data.group_report(&filters).report_create()?);
    }
    Ok(())
}

async fn time_log(client: &GitlabClient<HttpTransport>, args: &LogArgs) -> Result<()> {
    let since = utils::start_of_today()?;
    let multi_progress = MultiProgress::default();
    let pb = multi_progress.add_spinner("loading issues ...");

    let entries = with_spinner(
        &pb,
        analyze::fetch_time_log(client, &args.username, &since),
    )
    .await?;
    pb.finish_with_message(format!("✅ Found {} time log notes", entries.len()));

    println!("{}", entries.report_create()?);
    Ok(())
}

async fn with_spinner<T>(pb: &ProgressBar, future: impl Future<Output = Result<T>>) -> Result<T> {
    let result = future.await;
    if result.is_err() {
        pb.finish_and_clear();
    }
    result
}
