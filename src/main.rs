//! Gem Crossing headless runner
//!
//! The game is normally hosted by a browser page (see `web.rs`). Natively we
//! run a scripted session at a fixed 60 Hz step and print the board as text.
//!
//! Usage: gem-crossing [--seed N] [--frames N] [--config PATH] [--dump-config]

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use gem_crossing::consts::FRAME_DT;
    use gem_crossing::renderer::{SpriteCanvas, render_world, score_label};
    use gem_crossing::sim::{Direction, Grid, SpriteId, StepOutcome, World, tick};
    use gem_crossing::{GameConfig, GameError};
    use std::path::PathBuf;

    use clap::Parser;

    /// Frames between player hops
    const HOP_INTERVAL: u64 = 12;

    #[derive(Parser, Debug)]
    #[command(name = "gem-crossing")]
    #[command(about = "Run a scripted Gem Crossing session and print the final board", long_about = None)]
    pub struct Args {
        /// RNG seed (random when omitted)
        #[arg(long)]
        pub seed: Option<u64>,

        /// Frames to simulate at 60 Hz
        #[arg(long, default_value_t = 3600)]
        pub frames: u64,

        /// JSON config file (reference board when omitted)
        #[arg(long)]
        pub config: Option<PathBuf>,

        /// Print the effective config as JSON and exit
        #[arg(long)]
        pub dump_config: bool,
    }

    /// Paints the board as one character per cell
    struct TextCanvas {
        grid: Grid,
        cells: Vec<Vec<char>>,
        hud: String,
    }

    impl TextCanvas {
        fn new(grid: &Grid) -> Self {
            let mut cells = vec![vec!['.'; grid.columns as usize]; grid.rows as usize];
            cells[0].fill('~');
            Self {
                grid: grid.clone(),
                cells,
                hud: String::new(),
            }
        }

        fn glyph(sprite: SpriteId) -> char {
            match sprite {
                SpriteId::EnemyBug => 'B',
                SpriteId::CatGirl => '@',
                SpriteId::Rock => '#',
                SpriteId::GemOrange | SpriteId::GemBlue | SpriteId::GemGreen => '*',
                SpriteId::Star => '+',
                SpriteId::Heart => 'h',
                SpriteId::Key => 'k',
            }
        }

        fn print(&self) {
            println!("{}", self.hud);
            for row in &self.cells {
                println!("{}", row.iter().collect::<String>());
            }
        }
    }

    impl SpriteCanvas for TextCanvas {
        fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32) {
            // Bugs between cells are drawn where most of their body is
            let column = self.grid.column_at(x + self.grid.column_width / 2.0);
            let row = self.grid.row_at(y);
            if column < 0 || row < 0 || column >= self.grid.columns as i32 || row >= self.grid.rows as i32 {
                return;
            }
            self.cells[row as usize][column as usize] = Self::glyph(sprite);
        }

        fn draw_score(&mut self, score: u64) {
            self.hud = score_label(score);
        }
    }

    /// Hop up when the lane above is clear, otherwise wait or sidestep rocks
    fn choose_command(world: &World) -> Direction {
        let grid = world.grid();
        let me = world.avatar.pos;
        let above_y = me.y - grid.row_height;

        let rock_above = world
            .obstacles
            .iter()
            .any(|rock| rock.pos.y == above_y && rock.pos.x == me.x);
        if rock_above {
            return if me.x > 0.0 { Direction::Left } else { Direction::Right };
        }

        let bug_near = world.movers.iter().any(|bug| {
            bug.pos.y == above_y
                && bug.pos.x > me.x - 2.5 * grid.column_width
                && bug.pos.x < me.x + grid.column_width
        });
        if bug_near { Direction::None } else { Direction::Up }
    }

    pub fn run(args: Args) -> Result<(), GameError> {
        let seed = args.seed.unwrap_or_else(rand::random);
        let config = match &args.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if args.dump_config {
            println!("{}", config.to_json_string()?);
            return Ok(());
        }

        let mut world = World::new(config, seed)?;
        for frame in 0..args.frames {
            if frame % HOP_INTERVAL == 0 {
                let command = choose_command(&world);
                if world.handle_command(command) == StepOutcome::ReachedGoal {
                    log::info!("Crossing done at frame {}", frame);
                }
            }
            tick(&mut world, FRAME_DT);
            for event in world.drain_events() {
                log::debug!("{:?}", event);
            }
        }

        let mut canvas = TextCanvas::new(world.grid());
        render_world(&world, &mut canvas);
        canvas.print();

        let stats = world.stats;
        println!(
            "seed {} | {} frames | {} crossings, {} bug hits, {} gems ({} left)",
            world.seed,
            world.time_ticks,
            stats.wins,
            stats.bug_hits,
            stats.collected,
            world.available_collectibles().count()
        );
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    let args = native::Args::parse();
    log::info!("Gem Crossing (native) starting...");

    if let Err(e) = native::run(args) {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_start in the library, this is just to satisfy the compiler
}
