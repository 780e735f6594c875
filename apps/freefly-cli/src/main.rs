use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use freefly_camera::{Camera, CameraConfig, SceneBounds};
use freefly_input::DirectionFlags;
use freefly_render::{CameraUniforms, DebugTextRenderer, RenderView, Renderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "freefly-cli", about = "Scripted free-fly camera sessions")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the default camera config as YAML
    Config,
    /// Fly the camera for a number of frames while holding a fixed set of directions
    Fly {
        /// Viewport width
        #[arg(long, default_value = "1280")]
        width: f32,
        /// Viewport height
        #[arg(long, default_value = "720")]
        height: f32,
        /// YAML camera config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of frames to simulate
        #[arg(short, long, default_value = "60")]
        frames: u32,
        /// Seconds per frame
        #[arg(long, default_value = "0.016")]
        dt: f32,
        /// Held directions, comma separated (e.g. forward,yaw-left)
        #[arg(short, long, default_value = "")]
        keys: String,
        /// Place the camera over square content of this side length first
        #[arg(long)]
        scene_extent: Option<f32>,
        /// Average height of that content
        #[arg(long, default_value = "0")]
        scene_height: f32,
        /// Print the final camera state as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("freefly-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("math: {}", freefly_math::crate_info());
            println!("camera: {}", freefly_camera::crate_info());
            println!("input: {}", freefly_input::crate_info());
            println!("render: {}", freefly_render::crate_info());
        }
        Commands::Config => {
            print!("{}", CameraConfig::default().to_yaml_string()?);
        }
        Commands::Fly {
            width,
            height,
            config,
            frames,
            dt,
            keys,
            scene_extent,
            scene_height,
            json,
        } => {
            let config = match config {
                Some(path) => CameraConfig::load(&path)
                    .with_context(|| format!("loading camera config {}", path.display()))?,
                None => CameraConfig::default(),
            };
            let mut camera = Camera::with_config(width, height, &config)?;

            if let Some(extent) = scene_extent {
                camera.place_over(&SceneBounds {
                    extent,
                    average_height: scene_height,
                });
            }

            let flags = DirectionFlags::parse_list(&keys)?;
            tracing::info!(frames, dt, ?flags, "starting flight");

            let mut moved_frames = 0;
            for frame in 0..frames {
                let motion = camera.frame_motion(dt);
                if flags.drive(&mut camera, motion) {
                    camera.recompute_view();
                    moved_frames += 1;
                }
                tracing::debug!(frame, position = ?camera.position(), "frame done");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&camera.state())?);
            } else {
                let view = RenderView::from_camera(&camera);
                println!("Flew {frames} frames ({moved_frames} with motion)");
                println!(
                    "Yaw: {:.2} deg, pitch: {:.2} deg",
                    camera.yaw(),
                    camera.pitch()
                );
                print!("{}", DebugTextRenderer::new().render(&view));
                println!(
                    "Uniform block: {} bytes",
                    CameraUniforms::from(&view).as_bytes().len()
                );
            }
        }
    }

    Ok(())
}
