use argh::FromArgs;
use glam::DVec3;
use std::{fs, path::PathBuf};

use flypath::{
    geom::{
        interpolate::interpolate_points,
        io::points::{read_points_txt, write_points_txt},
        look::{LookDirectionMode, LookPointParams},
    },
    traj::{
        camera::{CameraPolar, PinholeIntrinsics},
        engine::{recording::RecordingEngine, RenderConfig},
        naming::{FrameCounter, FrameNaming},
        render::TrajectoryRenderer,
        trajectory::{Drift, Regaze, Spiral},
    },
};

#[derive(FromArgs)]
/// Generate camera trajectories and record one camera file per frame
struct Args {
    /// output directory, receives traj/ and cams/
    #[argh(option, short = 'o', default = "PathBuf::from(\"out\")")]
    out: PathBuf,

    /// index of the first frame
    #[argh(option, default = "0")]
    start_frame: u64,

    /// image width in pixels
    #[argh(option, default = "1280")]
    width: u32,

    /// image height in pixels
    #[argh(option, default = "720")]
    height: u32,

    /// focal length in pixels
    #[argh(option, default = "1280.0")]
    focal: f64,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Path(PathArgs),
    Spiral(SpiralArgs),
    Drift(DriftArgs),
    Regaze(RegazeArgs),
}

#[derive(FromArgs)]
/// Fly along a point file looking sideways at the ground
#[argh(subcommand, name = "path")]
struct PathArgs {
    /// point file with the flight path
    #[argh(option, short = 'p')]
    points: PathBuf,

    /// number of points inserted between waypoints
    #[argh(option, default = "0")]
    num_between: usize,

    /// look angle off nadir in degrees
    #[argh(option, default = "45.0")]
    incline: f64,

    /// half width of the look direction smoothing window
    #[argh(option, default = "20")]
    smooth: usize,

    /// widen the gaze in turns with this curvature gain
    #[argh(option)]
    curvature_gain: Option<f64>,
}

#[derive(FromArgs)]
/// Orbit around a look point
#[argh(subcommand, name = "spiral")]
struct SpiralArgs {
    /// look point as x,y,z
    #[argh(option, from_str_fn(parse_triple))]
    look: DVec3,

    /// first camera position as azimuth,inclination,radius
    #[argh(option, from_str_fn(parse_triple))]
    camera: DVec3,

    /// per frame increment as azimuth,inclination,radius
    #[argh(option, from_str_fn(parse_triple))]
    delta: DVec3,

    /// number of frames
    #[argh(option, short = 'n')]
    num_images: usize,
}

#[derive(FromArgs)]
/// Translate the camera while its look point moves
#[argh(subcommand, name = "drift")]
struct DriftArgs {
    /// first look point as x,y,z
    #[argh(option, from_str_fn(parse_triple))]
    look0: DVec3,

    /// last look point as x,y,z
    #[argh(option, from_str_fn(parse_triple))]
    look1: DVec3,

    /// camera position as azimuth,inclination,radius around look0
    #[argh(option, from_str_fn(parse_triple))]
    camera: DVec3,

    /// number of frames
    #[argh(option, short = 'n')]
    num_images: usize,
}

#[derive(FromArgs)]
/// Move the gaze from one look point to another
#[argh(subcommand, name = "regaze")]
struct RegazeArgs {
    /// first look point as x,y,z
    #[argh(option, from_str_fn(parse_triple))]
    look0: DVec3,

    /// last look point as x,y,z
    #[argh(option, from_str_fn(parse_triple))]
    look1: DVec3,

    /// camera position as azimuth,inclination,radius
    #[argh(option, from_str_fn(parse_triple))]
    camera: DVec3,

    /// number of frames
    #[argh(option, short = 'n')]
    num_images: usize,
}

fn parse_triple(value: &str) -> Result<DVec3, String> {
    let parts = value
        .split(',')
        .map(|s| s.trim().parse::<f64>().map_err(|e| format!("{}: {}", s, e)))
        .collect::<Result<Vec<_>, _>>()?;
    match parts[..] {
        [a, b, c] => Ok(DVec3::new(a, b, c)),
        _ => Err(format!("expected three comma separated values, got {:?}", value)),
    }
}

fn polar(v: DVec3) -> CameraPolar {
    CameraPolar::new(v.x, v.y, v.z)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let img_dir = args.out.join("traj");
    let cam_dir = args.out.join("cams");
    fs::create_dir_all(&img_dir)?;
    fs::create_dir_all(&cam_dir)?;

    let config = RenderConfig {
        intrinsics: PinholeIntrinsics::centered(args.focal, args.width, args.height),
        width: args.width,
        height: args.height,
    };
    let mut frames = FrameCounter::new(args.start_frame);
    let mut engine = RecordingEngine::new().with_camera_files(true);
    let mut renderer = TrajectoryRenderer::new(
        &mut engine,
        config,
        FrameNaming::six_digit(&img_dir, &cam_dir),
    );

    match args.command {
        Command::Path(cmd) => {
            let points = read_points_txt(&cmd.points)?;
            let dense = interpolate_points(&points, cmd.num_between)?;
            log::info!("{} waypoints densified to {}", points.len(), dense.len());

            let params = LookPointParams {
                incline_deg: cmd.incline,
                smooth: cmd.smooth,
                mode: match cmd.curvature_gain {
                    Some(gain) => LookDirectionMode::CurvatureWeighted { gain },
                    None => LookDirectionMode::SidewaysNormal,
                },
            };
            let look = renderer.fly_path(&dense, &params, &mut frames)?;

            write_points_txt(args.out.join("path.txt"), &dense)?;
            write_points_txt(args.out.join("look_points.txt"), &look)?;
        }
        Command::Spiral(cmd) => {
            let spiral = Spiral {
                look_at: cmd.look,
                start: polar(cmd.camera),
                delta: polar(cmd.delta),
                num_images: cmd.num_images,
            };
            let last = renderer.spiral(&spiral, &mut frames)?;
            println!(
                "final camera: azimuth {} inclination {} radius {}",
                last.azimuth, last.inclination, last.radius
            );
        }
        Command::Drift(cmd) => {
            let drift = Drift::new(cmd.look0, cmd.look1, polar(cmd.camera), cmd.num_images)?;
            let center = renderer.drift(&drift, &mut frames)?;
            println!("final camera center: {}", center);
        }
        Command::Regaze(cmd) => {
            renderer.set_naming(FrameNaming::three_digit(&img_dir));
            let regaze = Regaze::new(cmd.look0, cmd.look1, polar(cmd.camera), cmd.num_images)?;
            renderer.regaze(&regaze, &mut frames)?;
        }
    }

    println!(
        "recorded {} frames, next frame index {}",
        engine.cameras().len(),
        frames.current()
    );

    Ok(())
}
