use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "submit-guard")]
pub struct Args {
    /// Run as host bridge (NDJSON request/response over stdio)
    #[arg(long)]
    pub bridge: bool,

    /// Logging level (stderr). Also supports RUST_LOG.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Form snapshot JSON file to check (one-shot mode).
    #[arg(long)]
    pub form: Option<PathBuf>,

    /// Fallback parameter limit when the host environment provides none.
    /// 0 disables the fallback, leaving the limit unknown.
    #[arg(long, default_value_t = 1000)]
    pub default_limit: u64,

    /// Force the parameter limit, bypassing the host environment.
    #[arg(long)]
    pub max_count: Option<u64>,

    /// Extra limit candidate (repeatable); joins the environment-provided ones.
    #[arg(long)]
    pub limit_candidate: Vec<String>,

    /// Warning template; {max_count} and {form_count} are substituted.
    #[arg(long)]
    pub message: Option<String>,

    /// Print the table of parameters the counter attributes to the submission.
    #[arg(long)]
    pub inspect: bool,

    /// Answer the over-limit confirmation automatically (non-interactive use).
    #[arg(long)]
    pub assume_yes: bool,
}
