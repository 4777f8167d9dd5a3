#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
use clap::{Parser, Subcommand};
#[cfg(feature = "native")]
use color_eyre::eyre::{WrapErr, eyre};
#[cfg(feature = "native")]
use trialplan::data::{AppConfig, DataDirectory};
#[cfg(feature = "native")]
use trialplan::state::{AppError, AppState, ScreenId, StatusMessage};
#[cfg(feature = "native")]
use trialplan::util::format::{format_currency, format_currency_short};
#[cfg(feature = "native")]
use trialplan::{HttpServices, init_logging};
#[cfg(feature = "native")]
use trialplan_core::model::{CostEstimate, GenerationMethod};
#[cfg(feature = "native")]
use trialplan_core::templates::{RegulatoryPhase, TemplateSpec};

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "trialplan")]
#[command(about = "Plan a clinical trial, generate matching synthetic data and check it against the plan")]
struct Args {
    /// Path to the data directory (default: ~/.trialplan/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[cfg(feature = "native")]
#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the trial budget from cost.yaml (or defaults)
    Cost {
        /// Per-arm enrollment to use instead of the saved value
        #[arg(long)]
        n_per_arm: Option<u32>,

        /// Store the parameters used back to cost.yaml
        #[arg(long)]
        save: bool,
    },

    /// List built-in and custom planning templates
    Templates,

    /// Assess feasibility, hand the result to data generation and check the data
    Run {
        /// Built-in (phase1, phase2, phase3) or custom template key
        #[arg(short, long, default_value = "phase2")]
        template: String,

        /// Scenario name; when given the scenario is also saved
        #[arg(short, long)]
        name: Option<String>,

        /// Generation method (mvn, bootstrap, rules)
        #[arg(short, long, default_value = "mvn", value_parser = parse_method)]
        method: GenerationMethod,

        /// Random seed for generation (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List planning scenarios saved on the server
    Scenarios,
}

#[cfg(feature = "native")]
fn parse_method(name: &str) -> Result<GenerationMethod, String> {
    GenerationMethod::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = GenerationMethod::ALL.iter().map(|m| m.name()).collect();
        format!("unknown method '{name}' (expected one of: {})", known.join(", "))
    })
}

#[cfg(feature = "native")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = DataDirectory::new(args.data_dir.unwrap_or_else(DataDirectory::default_path));

    init_logging(data_dir.root(), &args.log_level)?;

    let config = data_dir
        .load_or_init_config()
        .wrap_err("Failed to load config.yaml")?;

    match args.command {
        Command::Cost { n_per_arm, save } => run_cost(&data_dir, n_per_arm, save),
        Command::Templates => run_templates(&data_dir),
        Command::Run {
            template,
            name,
            method,
            seed,
        } => run_workflow(&data_dir, &config, &template, name, method, seed).await,
        Command::Scenarios => run_scenarios(&config).await,
    }
}

#[cfg(feature = "native")]
fn connect(config: &AppConfig) -> color_eyre::Result<HttpServices> {
    tracing::info!(url = %config.service_url, "connecting to services");
    HttpServices::new(&config.service_url, config.request_timeout())
        .wrap_err("Failed to configure service client")
}

/// Print a screen's status line; errors abort the command
#[cfg(feature = "native")]
fn check(message: Option<&StatusMessage>) -> color_eyre::Result<()> {
    match message {
        Some(message) if message.is_error => Err(eyre!("{}", message.text)),
        Some(message) => {
            println!("{}", message.text);
            Ok(())
        }
        None => Ok(()),
    }
}

#[cfg(feature = "native")]
fn print_estimate(estimate: &CostEstimate) {
    println!("Total cost:        {}", format_currency(estimate.total_cost));
    println!("Cost per patient:  {}", format_currency(estimate.cost_per_patient));
    println!("Cost per arm:      {}", format_currency(estimate.cost_per_arm));
    println!("Monthly burn rate: {}", format_currency(estimate.monthly_burn_rate));
    println!("Patients:          {} ({} per arm)", estimate.total_patients, estimate.n_per_arm);
    println!();
    for (category, amount) in estimate.breakdown.categories() {
        println!("  {:<18} {:>14}", category.label(), format_currency_short(amount));
    }
    println!();
    println!(
        "Sensitivity: {} / {} / {}",
        format_currency_short(estimate.sensitivity.low),
        format_currency_short(estimate.sensitivity.base),
        format_currency_short(estimate.sensitivity.high)
    );
}

// ============================================================================
// Commands
// ============================================================================

#[cfg(feature = "native")]
fn run_cost(data_dir: &DataDirectory, n_per_arm: Option<u32>, save: bool) -> color_eyre::Result<()> {
    let mut params = data_dir.load_cost_parameters()?;
    if let Some(n) = n_per_arm {
        params.n_per_arm = n;
    }

    let mut state = AppState::new(params);
    state.navigate(ScreenId::Cost);
    state.calculate_cost();
    check(state.cost.message.as_ref())?;

    if let Some(estimate) = &state.cost.estimate {
        print_estimate(estimate);
    }
    if save {
        data_dir.save_cost_parameters(&state.cost.params)?;
        println!("Saved cost parameters to {}", data_dir.root().display());
    }
    Ok(())
}

#[cfg(feature = "native")]
fn run_templates(data_dir: &DataDirectory) -> color_eyre::Result<()> {
    let describe = |key: &str, spec: &TemplateSpec| {
        let status = match spec.validate() {
            Ok(inputs) => format!("{} enrollment scenarios", inputs.enrollment_scenarios.len()),
            Err(e) => format!("invalid: {e}"),
        };
        println!(
            "{:<14} {:<40} {}",
            key,
            spec.description.as_deref().or(spec.name.as_deref()).unwrap_or(""),
            status
        );
    };

    println!("Built-in:");
    for phase in RegulatoryPhase::ALL {
        describe(phase.key(), &phase.template());
    }

    let custom = data_dir.load_templates()?;
    if !custom.is_empty() {
        println!("\nCustom:");
        for (key, spec) in &custom {
            describe(key, spec);
        }
    }
    Ok(())
}

/// Built-in templates take precedence over custom files with the same key
#[cfg(feature = "native")]
fn resolve_template(data_dir: &DataDirectory, key: &str) -> Result<TemplateSpec, AppError> {
    if let Some(phase) = RegulatoryPhase::from_key(key) {
        return Ok(phase.template());
    }
    data_dir
        .load_template(key)?
        .ok_or_else(|| trialplan_core::TemplateError::UnknownTemplate(key.to_string()).into())
}

#[cfg(feature = "native")]
async fn run_workflow(
    data_dir: &DataDirectory,
    config: &AppConfig,
    template: &str,
    name: Option<String>,
    method: GenerationMethod,
    seed: Option<u64>,
) -> color_eyre::Result<()> {
    let services = connect(config)?;
    let mut state = AppState::new(data_dir.load_cost_parameters()?);

    // Planning
    let spec = resolve_template(data_dir, template)?;
    state.planning.apply_template(&spec)?;
    check(state.planning.message.as_ref())?;

    state.planning.assess(&services).await;
    check(state.planning.message.as_ref())?;

    if let Some(name) = name {
        state.planning.scenario_name = name;
        state.planning.save_scenario(&services).await;
        // A failed save does not block generation
        if let Some(message) = &state.planning.message {
            println!("{}", message.text);
        }
    }
    state.planning.use_for_generation(&mut state.store)?;
    check(state.planning.message.as_ref())?;

    // Generation
    state.navigate(ScreenId::Generation);
    check(state.generation.message.as_ref())?;
    state.generation.form.method = method;
    state.generation.form.seed = Some(seed.unwrap_or_else(rand::random));
    tracing::info!(form = ?state.generation.form, "requesting generation");

    state.generation.generate(&services).await;
    check(state.generation.message.as_ref())?;

    // Quality
    state.navigate(ScreenId::Quality);
    println!();
    if let Some(scenario) = state.active_scenario() {
        println!("Checking data against '{}' ({})", scenario.name(), scenario.id());
    }
    for line in state.quality.summary_lines() {
        println!("{line}");
    }

    // Cost
    state.navigate(ScreenId::Cost);
    state.calculate_cost();
    check(state.cost.message.as_ref())?;
    if let Some(estimate) = &state.cost.estimate {
        println!();
        print_estimate(estimate);
    }

    Ok(())
}

#[cfg(feature = "native")]
async fn run_scenarios(config: &AppConfig) -> color_eyre::Result<()> {
    let services = connect(config)?;
    let mut state = AppState::new(Default::default());

    state.planning.refresh_saved(&services).await;
    check(state.planning.message.as_ref())?;
    for listing in &state.planning.saved_scenarios {
        println!(
            "{:<38} {:<30} {:<28} {} records",
            listing.id, listing.dataset_name, listing.created_at, listing.record_count
        );
    }
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("This binary requires the 'native' feature.");
}
