use anyhow::{Result, ensure};
use clap::Parser;
use maze_core::perception::{EnemyRoster, MazeOccluder};
use maze_core::types::Wall;
use maze_core::{EnemyAction, GenerationConfig, MazeGenerator, PerceptionConfig, Pos, WorldPos};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of mazes to generate and check
    #[arg(short, long, default_value_t = 200)]
    mazes: u32,
    /// Target moves per maze
    #[arg(long, default_value_t = 50)]
    moves: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} mazes...", args.seed, args.mazes);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut catches = 0_u32;

    for _ in 0..args.mazes {
        let config = GenerationConfig {
            width: 1 + rng.next_u64() as usize % 30,
            depth: 1 + rng.next_u64() as usize % 30,
            enemy_count: rng.next_u64() as usize % 6,
            ..GenerationConfig::default()
        };
        let maze_seed = rng.next_u64();
        let maze = MazeGenerator::new(config).generate(maze_seed);
        let cells = config.width * config.depth;

        // Assert invariants
        ensure!(maze.grid.cells().all(|cell| cell.visited), "unvisited cell (seed={maze_seed})");
        ensure!(
            maze.grid.open_passage_count() == cells - 1,
            "passage count is not a spanning tree (seed={maze_seed})"
        );
        ensure!(
            maze.enemy_spawns.iter().all(|&pos| maze.grid.is_inner(pos)),
            "enemy spawned on the border (seed={maze_seed})"
        );

        // Random-walk a target through open passages while the enemies hunt it.
        let mut roster = EnemyRoster::from_maze(&maze, PerceptionConfig::default());
        let occluder = MazeOccluder::new(&maze.grid, maze.cell_scale);
        let mut target = maze.start;
        for _ in 0..args.moves {
            let open: Vec<Pos> = Wall::ALL
                .into_iter()
                .filter(|&wall| !maze.grid.has_wall(target, wall))
                .map(|wall| target.step(wall))
                .filter(|&next| maze.grid.in_bounds(next))
                .collect();
            if !open.is_empty() {
                target = choose(&mut rng, &open);
            }

            let target_world = WorldPos::from_cell(target, maze.cell_scale);
            let actions = roster.advance_all(0.5, target_world, &occluder);
            for (_, enemy) in roster.iter() {
                let position = enemy.position();
                ensure!(
                    position.x.is_finite() && position.z.is_finite(),
                    "enemy position diverged (seed={maze_seed})"
                );
            }
            if actions.iter().any(|&(_, action)| action == EnemyAction::TargetCaught) {
                catches += 1;
                break;
            }
        }
    }

    println!("Fuzzing completed successfully ({catches} catches).");
    Ok(())
}
