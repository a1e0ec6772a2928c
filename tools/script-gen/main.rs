use blockflow::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// A CLI tool to generate random editor scripts for replay and stress testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_script.json")]
    output: String,

    /// The number of commands to generate
    #[arg(short = 'n', long, default_value_t = 50)]
    commands: usize,

    /// Seed for reproducible scripts
    #[arg(long)]
    seed: Option<u64>,

    /// Probability (0.0 to 1.0) of emitting a command that refers to a stale block or index
    #[arg(long, default_value_t = 0.1)]
    stale: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.stale) {
        eprintln!("Error: --stale ({}) must be between 0.0 and 1.0", cli.stale);
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating {} editor commands...", cli.commands);
    let script = generate_script(&mut rng, cli.commands, cli.stale);
    script.save(&cli.output)?;
    println!("Successfully generated and saved script to '{}'", cli.output);

    Ok(())
}

/// Generates commands while mirroring them on a scratch editor, so that most
/// of them refer to blocks and indices that actually exist.
fn generate_script(rng: &mut StdRng, count: usize, stale: f64) -> EditorScript {
    let mut shadow = PipelineEditor::new();
    let mut commands = Vec::with_capacity(count);

    while commands.len() < count {
        let len = shadow.pipeline().len();
        let stale_pick = rng.random_bool(stale);
        let ids: Vec<BlockId> = shadow.pipeline().ids().cloned().collect();
        let pick_id = |rng: &mut StdRng| -> BlockId {
            match ids.choose(rng) {
                Some(id) if !stale_pick => id.clone(),
                _ => BlockId::new(format!("missing-{}", rng.random_range(0..1000))),
            }
        };
        let pick_index = |rng: &mut StdRng| -> usize {
            if stale_pick || len == 0 {
                len + rng.random_range(0..3)
            } else {
                rng.random_range(0..len)
            }
        };

        let batch = match rng.random_range(0..10) {
            0..=2 => {
                let block_type = *BlockType::ALL.choose(rng).unwrap_or(&BlockType::Source);
                vec![EditorCommand::AddBlock {
                    block_type,
                    title: None,
                }]
            }
            3 => vec![EditorCommand::DeleteBlock { id: pick_id(rng) }],
            4 => vec![EditorCommand::UpdateBlockTitle {
                id: pick_id(rng),
                title: format!("Step {}", rng.random_range(1..100)),
            }],
            5 => vec![EditorCommand::SelectBlock { id: pick_id(rng) }],
            6 => vec![EditorCommand::MoveBlock {
                from: pick_index(rng),
                to: pick_index(rng),
            }],
            _ => {
                let from = pick_index(rng);
                let target = pick_index(rng);
                let point = DropPoint::new(rng.random_range(0.0..40.0), 40.0);
                let mut gesture = vec![
                    EditorCommand::DragStart { index: from },
                    EditorCommand::DragOver {
                        index: target,
                        point,
                    },
                ];
                if rng.random_bool(0.8) {
                    gesture.push(EditorCommand::Drop {
                        index: target,
                        point,
                    });
                } else {
                    gesture.push(EditorCommand::DragLeave);
                }
                gesture.push(EditorCommand::DragEnd);
                gesture
            }
        };

        for command in batch {
            shadow.dispatch(command.clone());
            commands.push(command);
        }
    }

    commands.truncate(count);
    EditorScript {
        name: Some("Generated workflow".to_string()),
        commands,
    }
}
