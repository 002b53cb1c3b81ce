//! Sphere Geometry Tool
//!
//! Command line access to the spherekit conversions, projections and
//! circumcircle computation. Every subcommand prints its result as JSON.
//!
//! Usage:
//!   cargo run --bin sphere-tool -- latlon 0,0,1
//!   cargo run --bin sphere-tool -- plane 1,0,0 --pole south
//!   cargo run --bin sphere-tool -- arc 1,0,0 0,1,0 --config plot.json

use clap::{ArgAction, Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use spherekit::plot::{self, Color, PlotConfig, SceneRecorder};
use spherekit::{
    circumcenter, euclidean_distance, latitude_longitude, project_to_unit_sphere, to_cartesian,
    Cartesian3, PlaneProjection, PlanePoint, Pole, Stereographic,
};

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Unit sphere geometry tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts, projects and measures points on the unit sphere",
    long_about = None
)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print compact instead of pretty JSON
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Latitude and longitude (degrees) of a point given as x,y,z
    Latlon {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Cartesian3,
    },

    /// Unit vector for a latitude and longitude in degrees
    Cartesian {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
    },

    /// Euclidean distance between two points
    Distance {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        a: Cartesian3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        b: Cartesian3,
    },

    /// Radial projection of a point onto the unit sphere
    Unit {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Cartesian3,
    },

    /// Stereographic projection of a sphere point onto a tangent plane
    Plane {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        point: Cartesian3,

        /// Point of tangency: north, south or x,y,z
        #[arg(long, default_value = "north", allow_hyphen_values = true)]
        pole: Pole,
    },

    /// Inverse stereographic projection of a plane point given as x,y
    Lift {
        #[arg(value_parser = parse_plane_point, allow_hyphen_values = true)]
        point: PlanePoint,

        /// Point of tangency: north, south or x,y,z
        #[arg(long, default_value = "north", allow_hyphen_values = true)]
        pole: Pole,
    },

    /// Circumcenter and circumradius of three points
    Circumcenter {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        p1: Cartesian3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        p2: Cartesian3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        p3: Cartesian3,
    },

    /// Scene JSON of the sphere with two points and the arc between them
    Arc {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        u: Cartesian3,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        v: Cartesian3,

        /// Follow the tangent at u instead of the chord from u to v
        #[arg(long, action = ArgAction::SetTrue)]
        tangent: bool,

        /// Line colour, overriding the config
        #[arg(long)]
        color: Option<Color>,

        /// JSON file with plot settings
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },
}

/// Parses a comma separated list of exactly `N` floats
fn parse_floats<const N: usize>(s: &str) -> std::result::Result<[f64; N], String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", s, e))?;

    <[f64; N]>::try_from(values.as_slice())
        .map_err(|_| format!("expected {} comma separated values, got '{}'", N, s))
}

fn parse_point(s: &str) -> std::result::Result<Cartesian3, String> {
    parse_floats::<3>(s).map(Cartesian3::from)
}

fn parse_plane_point(s: &str) -> std::result::Result<PlanePoint, String> {
    parse_floats::<2>(s).map(PlanePoint::from)
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}

#[derive(Serialize)]
struct Distance {
    distance: f64,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Command, compact: bool) -> Result<()> {
    match command {
        Command::Latlon { point } => print_json(&latitude_longitude(point)?, compact),
        Command::Cartesian {
            latitude,
            longitude,
        } => print_json(&to_cartesian(latitude, longitude), compact),
        Command::Distance { a, b } => print_json(
            &Distance {
                distance: euclidean_distance(a, b),
            },
            compact,
        ),
        Command::Unit { point } => print_json(&project_to_unit_sphere(point)?, compact),
        Command::Plane { point, pole } => {
            debug!("projecting {:?} onto the plane tangent at {}", point, pole);
            print_json(&Stereographic::new(pole).project(point)?, compact)
        }
        Command::Lift { point, pole } => {
            debug!("lifting {:?} from the plane tangent at {}", point, pole);
            print_json(&Stereographic::new(pole).lift(point), compact)
        }
        Command::Circumcenter { p1, p2, p3 } => print_json(&circumcenter(p1, p2, p3)?, compact),
        Command::Arc {
            u,
            v,
            tangent,
            color,
            config,
        } => {
            let config = match config {
                Some(path) => PlotConfig::from_json_file(&path)?,
                None => PlotConfig::default(),
            };

            let mut canvas = SceneRecorder::new();
            plot::init_sphere(&mut canvas, &config)?;
            plot::sphere_points(&mut canvas, &[u, v], &config);
            if tangent {
                plot::sphere_line2(&mut canvas, u, v, color.as_ref(), &config)?;
            } else {
                plot::sphere_line(&mut canvas, u, v, color.as_ref(), &config)?;
            }
            plot::finish_sphere(&mut canvas);

            let scene = canvas.into_scene();
            info!("recorded {} draw commands", scene.commands.len());
            print_json(&scene, compact)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args.command, args.compact)
}
