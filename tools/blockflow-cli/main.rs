use blockflow::prelude::*;
use clap::{Parser, Subcommand};
use std::fs;
use std::time::Instant;

/// Replays recorded editor sessions against the block pipeline model
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay an editor script and print the resulting pipeline
    Replay {
        /// Path to the editor script JSON file
        script_path: String,

        /// Override the workflow name from the script
        #[arg(short, long)]
        name: Option<String>,

        /// Write the final `{name, blocks}` snapshot to this file
        #[arg(short, long)]
        output: Option<String>,

        /// Use timestamp-based block ids instead of sequential ones
        #[arg(long)]
        timestamp_ids: bool,
    },
    /// List the blocks that can be added to a pipeline
    Palette,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Command::Replay {
            script_path,
            name,
            output,
            timestamp_ids,
        } => run_replay(&script_path, name, output.as_deref(), timestamp_ids),
        Command::Palette => {
            print_palette();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_replay(
    script_path: &str,
    name: Option<String>,
    output: Option<&str>,
    timestamp_ids: bool,
) -> Result<()> {
    let mut script = EditorScript::from_file(script_path)?;
    if name.is_some() {
        script.name = name;
    }
    log::info!(
        "Loaded {} commands from '{}'",
        script.commands.len(),
        script_path
    );

    let builder = PipelineEditor::builder();
    let builder = if timestamp_ids {
        builder.with_id_generator(TimestampIds::default())
    } else {
        builder.with_id_generator(SequentialIds::default())
    };
    let mut editor = builder.build();

    let start = Instant::now();
    let changed = script.replay(&mut editor);
    log::info!(
        "Replayed {} commands ({} changed state) in {:?}",
        script.commands.len(),
        changed,
        start.elapsed()
    );

    println!("{}", PipelineFormatter::format_editor(&editor));

    if let Some(path) = output {
        let json = editor.snapshot().to_json_pretty()?;
        fs::write(path, json)?;
        log::info!("Wrote snapshot to '{}'", path);
    }
    Ok(())
}

fn print_palette() {
    let mut current_category = "";
    for entry in palette() {
        if entry.category != current_category {
            println!("{}", entry.category);
            current_category = entry.category;
        }
        println!("  {:<10} {}", entry.block_type, entry.title);
    }
}
