//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, FilterArgs, OutputFormat};
use crate::config::FeedConfig;
use crate::error::Result;
use crate::feed::{FetchState, JobsFeed};
use crate::pagination::{PageChange, PaginationControl};
use crate::source::JobBoard;
use crate::types::{Job, OptionStringExt, PageRequest, StringMap};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch { filters, page } => self.fetch(filters, *page).await,
            Commands::Browse { filters } => self.browse(filters).await,
        }
    }

    fn feed_config(&self) -> FeedConfig {
        match &self.cli.base_url {
            Some(url) => FeedConfig::builder().base_url(url).build(),
            None => FeedConfig::default(),
        }
    }

    fn make_feed(&self) -> Result<JobsFeed> {
        let board = JobBoard::new(self.feed_config())?;
        Ok(JobsFeed::new(Arc::new(board)))
    }

    async fn fetch(&self, filters: &FilterArgs, page: u32) -> Result<()> {
        let mut feed = self.make_feed()?;
        feed.set_query(PageRequest::with_params(page, filter_params(filters)));

        let state = feed.settled().await;
        self.print_state(page, &state)
    }

    async fn browse(&self, filters: &FilterArgs) -> Result<()> {
        let mut feed = self.make_feed()?;
        let params = filter_params(filters);
        let mut page = 1u32;

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            feed.set_query(PageRequest::with_params(page, params.clone()));
            let state = feed.settled().await;
            self.print_state(page, &state)?;
            println!("(n)ext, (p)revious, (f)irst, (q)uit");

            let Some(line) = lines.next_line().await? else {
                return Ok(());
            };

            let change = match line.trim() {
                "n" | "next" => PageChange::Delta(1),
                "p" | "prev" | "previous" => PageChange::Delta(-1),
                "f" | "first" => PageChange::Absolute(1),
                "q" | "quit" => return Ok(()),
                "" => continue,
                other => {
                    println!("unknown command: {other}");
                    continue;
                }
            };

            let control = PaginationControl::from_state(page, &state);
            // Forward movement needs a confirmed next page
            if change == PageChange::Delta(1) && !control.has_next_page() {
                println!("already on the last page");
                continue;
            }
            page = control.change(change);
        }
    }

    fn print_state(&self, page: u32, state: &FetchState) -> Result<()> {
        if let Some(error) = &state.error {
            eprintln!("fetch failed: {error}");
        }

        match self.cli.format {
            OutputFormat::Json => {
                for job in &state.jobs {
                    println!("{}", serde_json::to_string(job.as_value())?);
                }
            }
            OutputFormat::Pretty => {
                if state.jobs.is_empty() && state.error.is_none() {
                    println!("no listings on page {page}");
                }
                for job in &state.jobs {
                    print_job(job);
                }
                println!("{}", PaginationControl::from_state(page, state));
            }
        }

        Ok(())
    }
}

fn filter_params(filters: &FilterArgs) -> StringMap {
    let mut params = StringMap::new();
    if let Some(description) = filters.description.clone().none_if_empty() {
        params.insert("description".to_string(), description);
    }
    if let Some(location) = filters.location.clone().none_if_empty() {
        params.insert("location".to_string(), location);
    }
    if filters.full_time {
        params.insert("full_time".to_string(), "true".to_string());
    }
    params
}

fn print_job(job: &Job) {
    let title = job.title().unwrap_or("(untitled)");
    let company = job.company().unwrap_or("(unknown company)");
    println!("{title} — {company}");
    if let Some(location) = job.location() {
        println!("    {location}");
    }
    if let Some(url) = job.url() {
        println!("    {url}");
    }
}
