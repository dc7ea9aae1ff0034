//! Headless demo: runs the full impact cinematic without a render host and
//! prints the frame-by-frame milestones.

use anyhow::{ensure, Result};
use clap::Parser;

use helios_engine::{InputEvent, NullHost, Runner};
use helios_orrery::{SceneMode, SolarSim, EVENT_IMPACT, EVENT_MODE_CHANGED};

#[derive(Debug, Parser)]
#[command(about = "Run the solar-system impact cinematic headlessly")]
struct Args {
    /// Total frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// RNG seed (moons, debris, shake).
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Frame at which the impact button is pressed.
    #[arg(long, default_value_t = 1)]
    trigger_at: u32,

    /// Frame at which the reset button is pressed (0 = never).
    #[arg(long, default_value_t = 0)]
    reset_at: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        args.trigger_at < args.frames,
        "--trigger-at must fall inside the simulated frame range"
    );

    let mut runner = Runner::new(SolarSim::with_seed(args.seed));
    runner.init();
    let mut host = NullHost::default();

    for frame in 0..args.frames {
        if frame == args.trigger_at || (args.reset_at > 0 && frame == args.reset_at) {
            runner.push_input(InputEvent::Activate);
        }
        runner.step(&mut host);

        for event in &runner.context().events {
            if event.kind == EVENT_MODE_CHANGED {
                let label = if event.a > 0.5 { "impact" } else { "peaceful" };
                println!("frame {:>5}: mode -> {}", frame, label);
            } else if event.kind == EVENT_IMPACT {
                println!("frame {:>5}: asteroid struck body #{}", frame, event.a as u32);
            }
        }
    }

    let sim = runner.simulation();
    let seq = sim.sequencer();
    let ctx = runner.context();
    println!();
    println!("frames rendered:   {}", host.frames_rendered);
    println!(
        "final mode:        {}",
        match seq.mode() {
            SceneMode::Peaceful => "peaceful",
            SceneMode::Impact => "impact",
        }
    );
    println!("debris particles:  {}", seq.debris().len());
    println!("shake remaining:   {}", seq.shake_frames_remaining());
    println!("system drift:      {:.1}", sim.animator().drift());
    println!(
        "camera position:   ({:.1}, {:.1}, {:.1})",
        ctx.camera.position.x, ctx.camera.position.y, ctx.camera.position.z
    );
    println!("scene nodes:       {}", ctx.scene.len());
    println!("textures requested: {}", ctx.textures.len());
    for (handle, path) in ctx.textures.iter() {
        println!("  #{:<3} {}", handle.0, path);
    }

    Ok(())
}
