//! Trek plans the cheapest journey from the hero's house through three
//! dungeons to the Master Sword.
//!
//! Usage: `trek [MAP_DIR] [--reverse-homeward] [--replay]`
//!
//! `MAP_DIR` (default `maps`) holds `overworld.txt` and `dungeon1.txt` to
//! `dungeon3.txt`.

mod load;
mod render;

use std::path::PathBuf;
use std::thread;

use clap::Parser;
use trek_route::{HomewardPolicy, Layer, PlaybackCursor, QuestPlan, RouteConfig, plan_route};

/// Plan the cheapest route through the three dungeons.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding overworld.txt and dungeon1.txt to dungeon3.txt
    #[arg(default_value = "maps")]
    map_dir: PathBuf,

    /// Walk back out of each dungeon along the reversed inward path
    #[arg(long)]
    reverse_homeward: bool,

    /// Replay the journey step by step after planning
    #[arg(long)]
    replay: bool,
}

impl Args {
    fn homeward(&self) -> HomewardPolicy {
        if self.reverse_homeward {
            HomewardPolicy::Reverse
        } else {
            HomewardPolicy::Recompute
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let quest = load::load_quest(&args.map_dir)?;
    let plan = QuestPlan::resolve(quest)?;
    let config = RouteConfig::default().with_homeward(args.homeward());

    println!("Computing the best route...");
    let worker = thread::spawn(move || {
        let route = plan_route(&plan, &config);
        (plan, route)
    });
    let (plan, route) = worker.join().map_err(|_| "route planner panicked")?;
    let route = route?;

    println!("{}", render::summary(&route));
    println!("Overworld path:");
    println!("{}", render::render_grid(plan.overworld(), &route.outer_path));
    for w in &route.dungeons {
        let grid = plan.dungeon_grid(w.dungeon);
        println!("{}, entrance to pendant:", w.dungeon);
        println!("{}", render::render_grid(grid, &w.outward.positions));
        println!("{}, pendant to entrance:", w.dungeon);
        println!("{}", render::render_grid(grid, &w.homeward.positions));
    }

    if args.replay {
        let timeline = route.timeline();
        let mut cursor = PlaybackCursor::new(timeline.len());
        let mut layer = Layer::Overworld;
        while let Some(i) = cursor.advance() {
            let step = timeline[i];
            if step.layer != layer {
                match step.layer {
                    Layer::Dungeon(d) => println!("Entering {d}..."),
                    Layer::Overworld => println!("Leaving the dungeon..."),
                }
                layer = step.layer;
            }
            println!(
                "{}",
                render::step_line(step, i, cursor.len(), cursor.progress())
            );
        }
        println!("Journey complete! Total cost: {}", route.total_cost);
    }
    Ok(())
}
