use clap::{Parser, ValueEnum};
use flowsmith::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TriggerCli {
    Webhook,
    Schedule,
    Manual,
}

impl From<TriggerCli> for TriggerKind {
    fn from(value: TriggerCli) -> Self {
        match value {
            TriggerCli::Webhook => TriggerKind::Webhook,
            TriggerCli::Schedule => TriggerKind::Schedule,
            TriggerCli::Manual => TriggerKind::Manual,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ComplexityCli {
    Simple,
    Medium,
    Complex,
}

impl From<ComplexityCli> for Complexity {
    fn from(value: ComplexityCli) -> Self {
        match value {
            ComplexityCli::Simple => Complexity::Simple,
            ComplexityCli::Medium => Complexity::Medium,
            ComplexityCli::Complex => Complexity::Complex,
        }
    }
}

/// Generate an importable workflow document from a plain-language description
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// What the workflow should do
    description: Option<String>,

    /// How the workflow is started
    #[arg(short, long, value_enum, default_value = "manual")]
    trigger: TriggerCli,

    /// Size class of the generated workflow
    #[arg(short, long, value_enum, default_value = "medium")]
    complexity: ComplexityCli,

    /// Optional engine configuration JSON file
    #[arg(long)]
    config: Option<String>,

    /// Write the workflow to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flowsmith=info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn load_config(path: Option<&str>) -> EngineConfig {
    match path {
        Some(path) => EngineConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EngineConfig::default(),
    }
}

fn run_generation(
    request: GenerationRequest,
    config: EngineConfig,
    output: Option<String>,
    compact: bool,
) {
    let start = Instant::now();
    let orchestrator = GenerationOrchestrator::new(config);

    let workflow = orchestrator
        .generate(&request)
        .unwrap_or_else(|e| exit_with_error(&format!("Generation failed: {}", e)));
    let duration = start.elapsed();

    let json = if compact {
        workflow.to_json()
    } else {
        workflow.to_json_pretty()
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize workflow: {}", e)));

    match output {
        Some(path) => {
            fs::write(&path, &json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write workflow to '{}': {}", path, e))
            });
            eprintln!("Wrote workflow to '{}'", path);
        }
        None => println!("{}", json),
    }

    eprintln!("\n--- Generation Summary ---");
    eprintln!("Name:        {}", workflow.name);
    eprintln!("Category:    {}", workflow.meta.category);
    eprintln!("Strategy:    {}", workflow.meta.strategy);
    eprintln!("Nodes:       {}", workflow.nodes.len());
    eprintln!("Connections: {}", workflow.connections.edge_count());
    eprintln!("Generated in {:?}", duration);
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let description = cli.description.unwrap_or_else(|| {
        exit_with_error("A description is required in non-interactive mode.");
    });
    let config = load_config(cli.config.as_deref());
    let request = GenerationRequest::new(description, cli.trigger.into(), cli.complexity.into());
    run_generation(request, config, cli.output, cli.compact);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    eprintln!("--- Flowsmith Interactive Mode ---");

    let description = prompt_for_input("Describe the workflow", cli.description.as_deref());

    let trigger = loop {
        eprintln!("\nHow should the workflow start?");
        eprintln!("  1: Webhook (incoming HTTP request)");
        eprintln!("  2: Schedule (runs on an interval)");
        eprintln!("  3: Manual");
        match prompt_for_input("Enter choice", Some("3")).as_str() {
            "1" => break TriggerKind::Webhook,
            "2" => break TriggerKind::Schedule,
            "3" => break TriggerKind::Manual,
            _ => eprintln!("Invalid choice. Please enter 1, 2 or 3."),
        }
    };

    let complexity = loop {
        eprintln!("\nHow large should the workflow be?");
        eprintln!("  1: Simple");
        eprintln!("  2: Medium");
        eprintln!("  3: Complex");
        match prompt_for_input("Enter choice", Some("2")).as_str() {
            "1" => break Complexity::Simple,
            "2" => break Complexity::Medium,
            "3" => break Complexity::Complex,
            _ => eprintln!("Invalid choice. Please enter 1, 2 or 3."),
        }
    };

    let output = prompt_for_input("Output file (optional)", None);
    let output = if output.is_empty() { None } else { Some(output) };

    let config = load_config(cli.config.as_deref());
    let request = GenerationRequest::new(description, trigger, complexity);
    run_generation(request, config, output, cli.compact);
}

/// Prompts on stderr and reads a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    eprint!("> {}{}: ", prompt_text, default_prompt);
    io::stderr().flush().ok();

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read input: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
