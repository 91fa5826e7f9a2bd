mod config;
mod seed;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env};
use log::info;
use maze_core::maze::render_ascii;
use maze_core::perception::{EnemyRoster, MazeOccluder};
use maze_core::{EnemyAction, GeneratedMaze, GenerationConfig, MazeGenerator, WorldPos};

use crate::config::ToolConfig;
use crate::seed::SeedChoice;

#[derive(Parser)]
#[command(author, version, about = "Maze carving and enemy perception tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a maze and print or save it
    Generate {
        #[command(flatten)]
        maze: MazeArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the fingerprint, treasure, and spawn cells of a maze
    Inspect {
        #[command(flatten)]
        maze: MazeArgs,
    },
    /// Park a target on the start cell and let the spawned enemies run
    Chase {
        #[command(flatten)]
        maze: MazeArgs,
        /// Simulated seconds
        #[arg(long, default_value_t = 10.0)]
        seconds: f32,
    },
}

#[derive(Args)]
struct MazeArgs {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    depth: Option<usize>,
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of enemies to spawn
    #[arg(long)]
    enemies: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

struct Resolved {
    tool_config: ToolConfig,
    generation: GenerationConfig,
    seed: SeedChoice,
}

impl MazeArgs {
    fn resolve(&self) -> Result<Resolved> {
        let tool_config = ToolConfig::load_or_default(self.config.as_deref())?;
        let mut generation = tool_config.maze.generation;
        if let Some(width) = self.width {
            generation.width = width;
        }
        if let Some(depth) = self.depth {
            generation.depth = depth;
        }
        if let Some(enemies) = self.enemies {
            generation.enemy_count = enemies;
        }
        let seed = SeedChoice::resolve(self.seed, tool_config.maze.seed);
        info!("using seed {} ({seed:?})", seed.value());
        Ok(Resolved { tool_config, generation, seed })
    }

    fn generate(&self) -> Result<(Resolved, GeneratedMaze)> {
        let resolved = self.resolve()?;
        let maze = MazeGenerator::new(resolved.generation).generate(resolved.seed.value());
        Ok((resolved, maze))
    }
}

fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}

fn render(maze: &GeneratedMaze, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_ascii(maze)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(maze).context("Failed to serialize maze to JSON")
        }
    }
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { maze, format, output } => {
            let (_, generated) = maze.generate()?;
            let body = render(&generated, format)?;
            match output {
                Some(path) => {
                    fs::write(&path, body)
                        .with_context(|| format!("Failed to write maze to {}", path.display()))?;
                    println!("Maze saved to: {}", path.display());
                }
                None => print!("{body}"),
            }
        }
        Commands::Inspect { maze } => {
            let (resolved, generated) = maze.generate()?;
            println!("Seed: {}", resolved.seed.value());
            println!("Size: {}x{}", generated.grid.width(), generated.grid.depth());
            println!("Fingerprint: {}", format_fingerprint(generated.fingerprint()));
            println!("Passages: {}", generated.passages.len());
            match (generated.treasure, generated.treasure_world()) {
                (Some(cell), Some(world)) => println!(
                    "Treasure: cell ({}, {}) at world ({:.1}, {:.1})",
                    cell.x, cell.z, world.x, world.z
                ),
                _ => println!("Treasure: none"),
            }
            for (cell, world) in generated.enemy_spawns.iter().zip(generated.enemy_spawns_world()) {
                println!(
                    "Enemy: cell ({}, {}) at world ({:.1}, {:.1})",
                    cell.x, cell.z, world.x, world.z
                );
            }
        }
        Commands::Chase { maze, seconds } => {
            let (resolved, generated) = maze.generate()?;
            run_chase(&generated, &resolved, seconds)?;
        }
    }

    Ok(())
}

/// Number of fixed steps needed to cover `seconds`.
fn chase_ticks(seconds: f32, step: f32) -> Result<u64> {
    ensure!(
        seconds.is_finite() && seconds >= 0.0,
        "--seconds must be a finite, non-negative number, got {seconds}"
    );
    Ok((seconds / step).ceil() as u64)
}

fn run_chase(maze: &GeneratedMaze, resolved: &Resolved, seconds: f32) -> Result<()> {
    let perception = resolved.tool_config.perception;
    let mut roster = EnemyRoster::from_maze(maze, perception);
    let occluder = MazeOccluder::new(&maze.grid, maze.cell_scale);
    let target = WorldPos::from_cell(maze.start, maze.cell_scale);
    let step = perception.check_interval.max(0.01);
    let ticks = chase_ticks(seconds, step)?;

    println!("Chasing target at ({:.1}, {:.1}) with {} enemies", target.x, target.z, roster.len());

    for tick in 1..=ticks {
        let actions = roster.advance_all(step, target, &occluder);
        if actions.iter().any(|&(_, action)| action == EnemyAction::TargetCaught) {
            println!("Target caught after {:.1}s", tick as f64 * f64::from(step));
            return Ok(());
        }
    }

    for (_, enemy) in roster.iter() {
        let position = enemy.position();
        println!("Enemy ended at ({:.1}, {:.1}): {:?}", position.x, position.z, enemy.state());
    }
    println!("Target survived {seconds:.1}s");
    Ok(())
}
