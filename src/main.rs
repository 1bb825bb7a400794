use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use linescribe::Config;
use linescribe::input::{EditMode, Tool, ToolBehavior, ToolKind};
use linescribe::script::{EventScript, ReplayReport};
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LINESCRIBE_GIT_HASH"),
    ")"
);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One draw command per line
    Text,
    /// A single JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "linescribe")]
#[command(version = VERSION, about = "Interactive polyline drawing and editing tool")]
struct Cli {
    /// Replay pointer events from a TOML event script
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Output format for the final view
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the stored points
    #[arg(long, short = 'p', action = ArgAction::SetTrue)]
    points: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the example configuration to the default location and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        print_usage();
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = EventScript::load(&script_path)
        .with_context(|| format!("Cannot replay {}", script_path.display()))?;

    let kind = ToolKind::from_name(&config.tool.default_tool)
        .with_context(|| format!("Unknown tool '{}'", config.tool.default_tool))?;
    let mut tool = kind.create(0, config.line_style(), config.palette());

    let report = script.replay(&mut tool);
    log::info!(
        "Replayed {} events: {} presses, {} redraws",
        script.events.len(),
        report.presses.len(),
        report.redraws
    );

    match cli.format {
        OutputFormat::Text => print_text(&tool, cli.points),
        OutputFormat::Json => print_json(&tool, &report, cli.points)?,
    }

    Ok(())
}

fn mode_name(mode: EditMode) -> &'static str {
    match mode {
        EditMode::Draw => "draw",
        EditMode::Modify => "modify",
    }
}

fn print_text(tool: &Tool, with_points: bool) {
    print!("{}", tool.view());

    if !with_points {
        return;
    }
    let Some(line) = tool.as_line() else {
        return;
    };
    println!();
    println!("points ({} mode):", mode_name(tool.mode()));
    for (index, point) in line.points().iter().enumerate() {
        let role = if index % 2 == 0 { "vertex" } else { "midpoint" };
        println!("  {index:>3} {role:<8} {point}");
    }
}

fn print_json(tool: &Tool, report: &ReplayReport, with_points: bool) -> anyhow::Result<()> {
    let mut document = serde_json::json!({
        "tool": tool.name(),
        "mode": mode_name(tool.mode()),
        "remain_active": report.remain_active(),
        "commands": tool.view(),
    });

    if with_points {
        let points = tool
            .as_line()
            .map(|line| line.points().as_slice().to_vec())
            .unwrap_or_default();
        document["points"] = serde_json::to_value(points)?;
    }

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn print_usage() {
    println!("linescribe: Interactive polyline drawing and editing tool");
    println!();
    println!("Usage:");
    println!("  linescribe --script <FILE>          Replay an event script and print the view");
    println!("  linescribe --script <FILE> --points Also print vertices and midpoints");
    println!("  linescribe --init-config            Write an example config file");
    println!("  linescribe --help                   Show help");
    println!();
    println!("Event scripts:");
    println!("  [[events]]");
    println!("  kind = \"select\"");
    println!();
    println!("  [[events]]");
    println!("  kind = \"click\"   # or down, move, up, pick, deselect");
    println!("  x = 10.0");
    println!("  y = 20.0");
}
