mod cli;
mod config;

use approval_hierarchy::adapters::outbound::console::{
    AutoConfirm, StderrStatusReporter, TerminalInteraction,
};
use approval_hierarchy::adapters::outbound::filesystem::FileSystemReader;
use approval_hierarchy::adapters::outbound::network::{
    CachingApproverDirectory, RestClientConfig, RestHierarchyClient, DEFAULT_TIMEOUT_SECS,
};
use approval_hierarchy::application::dto::{
    AssignmentPlan, MutationOutcome, OutputFormat, PlannedLevel,
};
use approval_hierarchy::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use approval_hierarchy::application::use_cases::EditHierarchyUseCase;
use approval_hierarchy::hierarchy::domain::{ContextKey, HierarchyModule, Permission, Session};
use approval_hierarchy::hierarchy::policies::HierarchyProfile;
use approval_hierarchy::ports::outbound::{
    HierarchyFormatter, OutputPresenter, PlanReader, UserInteraction,
};
use approval_hierarchy::shared::error::{ExitCode, HierarchyError};
use approval_hierarchy::shared::Result;
use cli::{Args, Command};
use config::{discover_config, load_config_from_path, ConfigFile};
use std::process;
use std::str::FromStr;
use std::time::Duration;

type UseCase<U> = EditHierarchyUseCase<
    CachingApproverDirectory<RestHierarchyClient>,
    RestHierarchyClient,
    U,
    StderrStatusReporter,
>;

/// Everything a command needs once CLI, config file and defaults are merged
struct RunContext {
    profile: HierarchyProfile,
    context_key: ContextKey,
    client: RestHierarchyClient,
    formatter: Box<dyn HierarchyFormatter>,
    presenter: Box<dyn OutputPresenter>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;

    let session = config.session()?;
    let permission = if args.command.is_mutating() {
        Permission::ManageHierarchy
    } else {
        Permission::ViewHierarchy
    };
    session.authorize(permission)?;
    report_session(&session);

    let module = resolve_module(&args, &config)?;
    let context = RunContext {
        profile: HierarchyProfile::for_module(module),
        context_key: resolve_context(module, &args, &config)?,
        client: build_client(&args, &config)?,
        formatter: FormatterFactory::create(resolve_format(&args, &config)?),
        presenter: PresenterFactory::create(PresenterType::from_output(args.output.clone())),
    };

    match args.command {
        Command::Toggle { yes: true, .. } => execute(&args.command, context, AutoConfirm).await,
        _ => execute(&args.command, context, TerminalInteraction::new()).await,
    }
}

async fn execute<U: UserInteraction>(
    command: &Command,
    context: RunContext,
    interaction: U,
) -> Result<ExitCode> {
    if command.is_mutating() || matches!(command, Command::Approvers | Command::Apply { .. }) {
        context.context_key.require_complete()?;
    }

    let RunContext {
        profile,
        context_key,
        client,
        formatter,
        presenter,
    } = context;

    let mut use_case: UseCase<U> = EditHierarchyUseCase::new(
        profile,
        CachingApproverDirectory::new(client.clone()),
        client,
        interaction,
        StderrStatusReporter::new(),
    )?;
    use_case.switch_context(context_key).await?;

    let outcome = match command {
        Command::Show => None,
        Command::Approvers => {
            let output = formatter.format_directory(&use_case.directory_read_model())?;
            presenter.present(&output)?;
            return Ok(ExitCode::Success);
        }
        Command::Toggle { level, .. } => Some(use_case.toggle_active(*level).await?),
        Command::Assign { level, approvers } => {
            let plan = AssignmentPlan {
                levels: vec![PlannedLevel {
                    level: *level,
                    approvers: approvers.clone(),
                }],
            };
            use_case.apply_plan(&plan)?;
            Some(use_case.save_all().await?)
        }
        Command::Apply { plan, dry_run } => {
            let plan = FileSystemReader::new().read_plan(plan)?;
            use_case.apply_plan(&plan)?;

            if *dry_run {
                let request = use_case.pending_request()?;
                presenter.present(&format!("{}\n", serde_json::to_string_pretty(&request)?))?;
                return Ok(ExitCode::Success);
            }
            Some(use_case.save_all().await?)
        }
    };

    let code = match outcome {
        None | Some(MutationOutcome::Completed) => ExitCode::Success,
        Some(MutationOutcome::Declined) => return Ok(ExitCode::Declined),
        Some(MutationOutcome::Failed { .. }) => return Ok(ExitCode::ApplicationError),
    };

    let output = formatter.format_hierarchy(&use_case.read_model())?;
    presenter.present(&output)?;
    Ok(code)
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

fn report_session(session: &Session) {
    let principal = session.principal();
    eprintln!(
        "👤 Running as {} ({})",
        principal.username, principal.role
    );
}

fn resolve_module(args: &Args, config: &ConfigFile) -> Result<HierarchyModule> {
    if let Some(module) = args.module {
        return Ok(module);
    }
    match &config.module {
        Some(module) => HierarchyModule::from_str(module).map_err(anyhow::Error::msg),
        None => Err(HierarchyError::Validation {
            message: "No module selected. Pass --module or set 'module' in the config file"
                .to_string(),
        }
        .into()),
    }
}

/// Config context applies only when it was written for the selected module
fn resolve_context(module: HierarchyModule, args: &Args, config: &ConfigFile) -> Result<ContextKey> {
    let config_module = config
        .module
        .as_deref()
        .and_then(|m| HierarchyModule::from_str(m).ok());

    let mut context_key = ContextKey::empty(module);
    if config_module.is_none() || config_module == Some(module) {
        for (field, value) in config.context.iter().flatten() {
            context_key.set_field(field, value)?;
        }
    }
    for (field, value) in &args.context {
        context_key.set_field(field, value)?;
    }
    Ok(context_key)
}

fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = args.format {
        return Ok(format);
    }
    match &config.format {
        Some(format) => OutputFormat::from_str(format).map_err(anyhow::Error::msg),
        None => Ok(OutputFormat::default()),
    }
}

fn build_client(args: &Args, config: &ConfigFile) -> Result<RestHierarchyClient> {
    let base_url = args
        .base_url
        .clone()
        .or_else(|| config.base_url.clone())
        .ok_or_else(|| HierarchyError::Validation {
            message: "No backend URL configured. Pass --base-url or set 'base_url' in the config file"
                .to_string(),
        })?;

    let bearer_token = match &config.auth_token_env {
        Some(name) => match std::env::var(name) {
            Ok(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
            _ => {
                eprintln!(
                    "⚠️  Warning: Environment variable '{}' is not set; requests are sent without a token.",
                    name
                );
                None
            }
        },
        None => None,
    };

    RestHierarchyClient::new(RestClientConfig {
        base_url,
        timeout: Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        bearer_token,
        endpoints: config.endpoint_catalog()?,
    })
}
