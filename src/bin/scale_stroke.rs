//! Simulated tree scaling stroke
//!
//! Scatters trees on a synthetic terrain tile, drags the scale brush across
//! it for a number of frames, releases, and reports what changed.
//!
//! Usage:
//!     scale_stroke [OPTIONS]
//!
//! Options:
//!     -n, --trees <N>         Number of trees to scatter (default: 2000)
//!     -f, --frames <N>        Drag frames before release (default: 30)
//!     -r, --radius <R>        Brush half-size in meters (default: 40.0)
//!     --shrink                Shrink instead of grow
//!     --mask <PNG>            Brush mask image
//!     --config <JSON>         Scaler config file
//!     --save <JSON>           Write resulting foliage to a file
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use glam::{Mat4, Vec3};

use treebrush::config::ScalerConfig;
use treebrush::core::EditingFlag;
use treebrush::foliage::{FoliageData, TreeInstance};
use treebrush::mask::MaskTexture;
use treebrush::painter::{
    FoliagePainter, MouseEvent, PaintOutcome, PainterAction, PainterArgs, RandomSource, SimpleRng,
    TreeScaler,
};
use treebrush::terrain::{SceneState, Terrain, TerrainData, TerrainGeometry};

fn print_help() {
    eprintln!("scale_stroke - Simulated tree scaling stroke");
    eprintln!();
    eprintln!("Usage: scale_stroke [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    -n, --trees <N>         Number of trees to scatter (default: 2000)");
    eprintln!("    -f, --frames <N>        Drag frames before release (default: 30)");
    eprintln!("    -r, --radius <R>        Brush half-size in meters (default: 40.0)");
    eprintln!("    --shrink                Shrink instead of grow");
    eprintln!("    --mask <PNG>            Brush mask image");
    eprintln!("    --config <JSON>         Scaler config file");
    eprintln!("    --save <JSON>           Write resulting foliage to a file");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    scale_stroke -n 5000 -f 60 --mask brush.png");
}

#[derive(Debug)]
struct Args {
    trees: usize,
    frames: u32,
    radius: f32,
    shrink: bool,
    mask: Option<PathBuf>,
    config: Option<PathBuf>,
    save: Option<PathBuf>,
}

/// Advance past an option and return its value.
fn take_value(args: &[String], i: &mut usize, name: &str) -> Result<String, String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| format!("Missing value for {}", name))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut parsed = Args {
        trees: 2000,
        frames: 30,
        radius: 40.0,
        shrink: false,
        mask: None,
        config: None,
        save: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-n" | "--trees" => {
                let v = take_value(&args, &mut i, "--trees")?;
                parsed.trees = v.parse().map_err(|_| format!("Invalid tree count: {}", v))?;
            }
            "-f" | "--frames" => {
                let v = take_value(&args, &mut i, "--frames")?;
                parsed.frames = v.parse().map_err(|_| format!("Invalid frame count: {}", v))?;
            }
            "-r" | "--radius" => {
                let v = take_value(&args, &mut i, "--radius")?;
                parsed.radius = v.parse().map_err(|_| format!("Invalid radius: {}", v))?;
            }
            "--shrink" => parsed.shrink = true,
            "--mask" => parsed.mask = Some(PathBuf::from(take_value(&args, &mut i, "--mask")?)),
            "--config" => parsed.config = Some(PathBuf::from(take_value(&args, &mut i, "--config")?)),
            "--save" => parsed.save = Some(PathBuf::from(take_value(&args, &mut i, "--save")?)),
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(parsed)
}

fn scatter_trees(count: usize, rng: &mut SimpleRng) -> Vec<TreeInstance> {
    (0..count)
        .map(|_| {
            let position = Vec3::new(rng.value(), 0.0, rng.value());
            TreeInstance::new(rng.range(0, 3), position)
        })
        .collect()
}

fn run(args: Args) -> treebrush::core::Result<()> {
    let config = match &args.config {
        Some(path) => ScalerConfig::load_sync(path)?,
        None => ScalerConfig::default(),
    };
    let mask = args.mask.as_deref().map(MaskTexture::open).transpose()?;

    let mut rng = SimpleRng::new(config.seed);
    let geometry = TerrainGeometry::new(500.0, 100.0, 500.0);
    let foliage = FoliageData::new(scatter_trees(args.trees, &mut rng));
    let mut terrain = Terrain::new(Mat4::IDENTITY, TerrainData::new(geometry, foliage));
    let mut scene = SceneState::new();

    let editing = EditingFlag::new();
    let scaler = TreeScaler::new(config.clone(), editing.clone());
    log::info!("{}", scaler.instruction());

    let start = Instant::now();
    let mut mutated = 0;
    for frame in 0..args.frames {
        // Drag diagonally across the tile
        let t = frame as f32 / args.frames.max(1) as f32;
        let center = Vec3::new(50.0 + 400.0 * t, 0.0, 50.0 + 400.0 * t);

        let mut frame_args = PainterArgs::from_config(&config, PainterArgs::square_corners(center, args.radius));
        frame_args.mask = mask.as_ref();
        frame_args.tree_indices = vec![0, 1, 2];
        frame_args.mouse_event = if frame == 0 { MouseEvent::Down } else { MouseEvent::Drag };
        if args.shrink {
            frame_args.action = PainterAction::Negative;
        }

        if let PaintOutcome::Painted(stats) = scaler.paint(&mut terrain, &mut scene, &mut rng, &frame_args) {
            mutated += stats.mutated;
        }
    }
    log::info!(
        "Painted {} frames in {:.2}ms, {} instance updates, editing={}",
        args.frames,
        start.elapsed().as_secs_f64() * 1000.0,
        mutated,
        editing.is_editing()
    );

    let mut release = PainterArgs::from_config(&config, [Vec3::ZERO; 4]);
    release.tree_indices = vec![0, 1, 2];
    release.mouse_event = MouseEvent::Up;
    scaler.paint(&mut terrain, &mut scene, &mut rng, &release);

    let Some(data) = terrain.data.as_mut() else {
        return Ok(());
    };
    let (min, max) = data
        .foliage
        .trees()
        .unwrap_or_default()
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), t| (lo.min(t.scale.y), hi.max(t.scale.y)));
    log::info!(
        "Released: editing={}, scene dirty={}, scale range {:.3}..{:.3}",
        editing.is_editing(),
        scene.is_dirty(),
        min,
        max
    );

    if let Some(path) = &args.save {
        data.foliage.save_sync(path)?;
        log::info!("Saved foliage to {}", path.display());
    }

    Ok(())
}

fn main() {
    treebrush::core::logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
