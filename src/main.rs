mod app;
mod config;
mod logging;
mod ui;
mod wizard;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;

use app::App;
use config::Config;
use wizard::fields::technique_fields;
use wizard::{dispatch, DeviceTarget, FieldId, Navigation, Screen, ScreenId, Technique, Transition, WizardState};

#[derive(Parser)]
#[command(name = "compress-wizard")]
#[command(version)]
#[command(about = "A TUI wizard for configuring neural network compression")]
struct Cli {
    /// Path to an alternative config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    project: ProjectArgs,

    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Values that prefill the project setup page
#[derive(Args, Debug, Default)]
struct ProjectArgs {
    /// Project name
    #[arg(long, global = true)]
    project: Option<String>,
    /// Directory the compressed model is written to
    #[arg(long, global = true)]
    output: Option<String>,
    /// Path to the trained model
    #[arg(long, global = true)]
    model: Option<String>,
    /// Path to the dataset loader
    #[arg(long, global = true)]
    data_loader: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration without the TUI
    Validate(ValidateArgs),

    /// List supported techniques and their parameters
    Techniques,

    /// Print the config file location
    ConfigPath,

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct ValidateArgs {
    /// Deployment target
    #[arg(long, value_enum, default_value_t = TargetArg::Mcu)]
    target: TargetArg,

    /// Enable a technique (repeatable)
    #[arg(long = "technique", value_enum)]
    techniques: Vec<TechniqueArg>,

    /// Pruning factor for dense layers
    #[arg(long, allow_hyphen_values = true)]
    prune_dense: Option<String>,
    /// Pruning factor for convolutional layers
    #[arg(long, allow_hyphen_values = true)]
    prune_conv: Option<String>,
    /// Distillation temperature
    #[arg(long, allow_hyphen_values = true)]
    distill_temperature: Option<String>,
    /// Distillation loss weight in percent
    #[arg(long, allow_hyphen_values = true)]
    distill_alpha: Option<String>,
    /// Weight clusters for dense layers
    #[arg(long, allow_hyphen_values = true)]
    huffman_dense: Option<String>,
    /// Weight clusters for convolutional layers
    #[arg(long, allow_hyphen_values = true)]
    huffman_conv: Option<String>,

    /// Print the configuration as JSON
    #[arg(long)]
    json: bool,
}

impl ValidateArgs {
    fn param(&self, field: FieldId) -> Option<&str> {
        let value = match field {
            FieldId::PruningDense => &self.prune_dense,
            FieldId::PruningConv => &self.prune_conv,
            FieldId::DistillationTemperature => &self.distill_temperature,
            FieldId::DistillationAlpha => &self.distill_alpha,
            FieldId::HuffmanDense => &self.huffman_dense,
            FieldId::HuffmanConv => &self.huffman_conv,
            _ => &None,
        };
        value.as_deref()
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetArg {
    Mcu,
    Fpga,
}

impl From<TargetArg> for DeviceTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Mcu => DeviceTarget::Microcontroller,
            TargetArg::Fpga => DeviceTarget::Fpga,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TechniqueArg {
    Pruning,
    Distillation,
    Huffman,
}

impl From<TechniqueArg> for Technique {
    fn from(arg: TechniqueArg) -> Self {
        match arg {
            TechniqueArg::Pruning => Technique::Pruning,
            TechniqueArg::Distillation => Technique::KnowledgeDistillation,
            TechniqueArg::Huffman => Technique::HuffmanCoding,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Validate(args)) => {
            init_logging(&config);
            cmd_validate(&cli.project, &args)
        }
        Some(Commands::Techniques) => cmd_techniques(),
        Some(Commands::ConfigPath) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(Commands::InitConfig { force }) => cmd_init_config(&config_path, force),
        None => {
            init_logging(&config);
            let state = initial_state(&cli.project, &config);
            if let Some(finished) = run_tui(config, state)? {
                print_summary(&finished);
            }
            Ok(())
        }
    }
}

fn init_logging(config: &Config) {
    if let Err(e) = logging::init(config) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

/// Wizard state seeded from command-line values and config defaults
fn initial_state(args: &ProjectArgs, config: &Config) -> WizardState {
    let mut state = WizardState::default();
    let project = &mut state.project;
    project.project_name = args.project.clone().unwrap_or_default();
    project.output_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.default_output_path.display().to_string());
    project.model_path = args.model.clone().unwrap_or_default();
    project.data_loader_path = args.data_loader.clone().unwrap_or_default();
    state
}

/// Guard that ensures terminal is restored on drop (even on panic)
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best effort restoration - ignore errors since we may be panicking
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        );
    }
}

/// Run the wizard; returns the final state if the user finished it
fn run_tui(config: Config, state: WizardState) -> Result<Option<WizardState>> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create guard AFTER setup so it only cleans up if setup succeeded
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, state);
    ui::run(&mut terminal, &mut app)?;

    if app.completed {
        Ok(Some(app.state))
    } else {
        tracing::info!("wizard cancelled");
        Ok(None)
    }
}

/// Drive one transition headlessly, expecting another screen
fn step(state: &mut WizardState, leaving: &Screen, transition: Transition) -> Result<Screen> {
    match dispatch(state, leaving, transition)? {
        Navigation::Show(screen) => Ok(screen),
        Navigation::Complete => anyhow::bail!("wizard finished early at {:?}", transition),
        Navigation::Stay => anyhow::bail!("{:?} is not available on {:?}", transition, leaving.id),
    }
}

/// Walk the same transitions the TUI would: start, target, optimizations, finish
fn validate_state(project: &ProjectArgs, args: &ValidateArgs) -> Result<WizardState> {
    let mut state = WizardState::default();

    let mut start = Screen::build(ScreenId::Start, &state);
    let values = [&project.project, &project.output, &project.model, &project.data_loader];
    for (field, value) in wizard::fields::PROJECT_FIELDS.into_iter().zip(values) {
        start.form.set(field, value.clone().unwrap_or_default());
    }

    let target = step(&mut state, &start, Transition::StartNext)?;
    let mut optimization = step(&mut state, &target, Transition::TargetNext(args.target.into()))?;

    for technique in &args.techniques {
        state.optimizations.insert((*technique).into());
    }
    for technique in Technique::ALL {
        for field in technique_fields(technique) {
            if let Some(value) = args.param(field) {
                optimization.form.set(field, value);
            }
        }
    }

    let summary = step(&mut state, &optimization, Transition::OptimizationNext)?;
    match dispatch(&mut state, &summary, Transition::Finish)? {
        Navigation::Complete => Ok(state),
        Navigation::Show(screen) => anyhow::bail!("unexpected screen {:?} after finish", screen.id),
        Navigation::Stay => anyhow::bail!("finish is not available on {:?}", summary.id),
    }
}

fn cmd_validate(project: &ProjectArgs, args: &ValidateArgs) -> Result<()> {
    let state = validate_state(project, args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&state).context("Failed to serialize configuration")?;
        println!("{}", json);
    } else {
        print_summary(&state);
    }
    Ok(())
}

fn print_summary(state: &WizardState) {
    println!("Compression configuration:");
    println!();
    for (key, value) in state.summary_lines() {
        println!("  {:24} {}", format!("{}:", key), value);
    }
}

fn cmd_techniques() -> Result<()> {
    println!("Supported techniques:");
    println!();
    for technique in Technique::ALL {
        println!("{}", technique.label());
        println!("  {}", technique.blurb());
        let [first, second] = technique_fields(technique);
        println!("  parameters: {}, {}", first.label(), second.label());
        println!();
    }
    Ok(())
}

fn cmd_init_config(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
