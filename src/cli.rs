use approval_hierarchy::application::dto::OutputFormat;
use approval_hierarchy::hierarchy::domain::HierarchyModule;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Maintain multi-level approval hierarchies in the back-office
#[derive(Parser, Debug)]
#[command(name = "hierarchy-admin")]
#[command(version)]
#[command(
    about = "Maintain multi-level approval hierarchies in the back-office",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./hierarchy-admin.config.yml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. https://backoffice.example.com/api
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Module: custom-duty, import-payment, jvm or credit-deviation
    #[arg(short, long, global = true)]
    pub module: Option<HierarchyModule>,

    /// Context field, e.g. -c companyId=C-001
    /// Can be specified multiple times
    #[arg(
        short = 'c',
        long = "context",
        global = true,
        value_name = "FIELD=VALUE",
        value_parser = parse_key_val
    )]
    pub context: Vec<(String, String)>,

    /// Output format: json or markdown
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the hierarchy for the selected context with its eligible approvers
    Show,

    /// List the approvers eligible for the selected context
    Approvers,

    /// Activate or deactivate one level immediately
    Toggle {
        /// Level to toggle (1-based)
        #[arg(short, long)]
        level: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Replace one level's approvers and save the whole hierarchy
    Assign {
        /// Level to assign (1-based)
        #[arg(short, long)]
        level: i64,

        /// Approver id; repeat for several. Omit to clear the level
        #[arg(short, long = "approver", value_name = "ID")]
        approvers: Vec<String>,
    },

    /// Apply a YAML or TOML assignment plan and save the whole hierarchy
    Apply {
        /// Plan file (.yml, .yaml or .toml)
        #[arg(short, long, value_name = "FILE")]
        plan: PathBuf,

        /// Print the request that would be sent instead of sending it
        #[arg(long)]
        dry_run: bool,
    },
}

impl Command {
    /// Whether the command changes data on the backend
    pub fn is_mutating(&self) -> bool {
        match self {
            Command::Show | Command::Approvers => false,
            Command::Apply { dry_run, .. } => !dry_run,
            Command::Toggle { .. } | Command::Assign { .. } => true,
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses a `field=value` pair
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid FIELD=VALUE: no '=' found in '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid FIELD=VALUE: empty field name in '{}'", s));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
