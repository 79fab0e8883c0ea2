use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geocalc::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

mod session;

#[derive(Parser)]
#[command(name = "geocalc")]
#[command(about = "Geodesic, UTM, area, and geomagnetic calculator on WGS84")]
#[command(version = geocalc::VERSION)]
struct Cmd {
    /// Emit JSON records instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Distance and initial azimuth between two points
    Inverse {
        /// First point as "LAT,LON" in degrees
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        /// Second point as "LAT,LON" in degrees
        #[arg(long, allow_hyphen_values = true)]
        to: String,
    },
    /// Destination point from origin, bearing, and distance
    Direct {
        /// Origin as "LAT,LON" in degrees
        #[arg(long, allow_hyphen_values = true)]
        origin: String,
        /// Initial bearing, degrees clockwise from north
        #[arg(long, allow_hyphen_values = true)]
        azimuth: f64,
        /// Distance in meters
        #[arg(long, allow_hyphen_values = true)]
        distance: f64,
    },
    /// Evenly spaced polyline between two points
    Route {
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        /// Number of interior sample points
        #[arg(long, default_value_t = 20)]
        samples: usize,
    },
    /// Project a geographic point to UTM
    ToUtm {
        /// Point as "LAT,LON" in degrees
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Recover the geographic point from UTM coordinates
    FromUtm {
        #[arg(long, allow_hyphen_values = true)]
        easting: f64,
        #[arg(long, allow_hyphen_values = true)]
        northing: f64,
        /// Zone number in [1, 60]
        #[arg(long)]
        zone: i32,
        /// N or S
        #[arg(long)]
        hemisphere: String,
    },
    /// Perimeter and area of a polygon ring
    Area {
        /// Ring vertex as "LAT,LON"; repeat at least three times
        #[arg(long = "point", allow_hyphen_values = true)]
        points: Vec<String>,
        /// JSON file holding a [[lat, lon], ..] array instead
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Field summary from east/north/up components in nanotesla
    Field {
        #[arg(long, allow_hyphen_values = true)]
        east: f64,
        #[arg(long, allow_hyphen_values = true)]
        north: f64,
        #[arg(long, allow_hyphen_values = true)]
        up: f64,
    },
    /// Drive one point-registry session from a line script
    Session {
        /// Script file; stdin when omitted
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Inverse { from, to } => inverse_cmd(&from, &to, cmd.json),
        Action::Direct {
            origin,
            azimuth,
            distance,
        } => direct_cmd(&origin, azimuth, distance, cmd.json),
        Action::Route { from, to, samples } => route_cmd(&from, &to, samples, cmd.json),
        Action::ToUtm { point } => to_utm_cmd(&point, cmd.json),
        Action::FromUtm {
            easting,
            northing,
            zone,
            hemisphere,
        } => from_utm_cmd(easting, northing, zone, &hemisphere, cmd.json),
        Action::Area { points, file } => area_cmd(&points, file.as_deref(), cmd.json),
        Action::Field { east, north, up } => field_cmd(east, north, up, cmd.json),
        Action::Session { script } => session::run(script.as_deref(), cmd.json),
    }
}

fn inverse_cmd(from: &str, to: &str, json: bool) -> Result<()> {
    tracing::info!(from, to, "inverse");
    let origin = parse_point(from)?;
    let dest = parse_point(to)?;
    render_inverse(&origin, &dest, json)
}

fn direct_cmd(origin: &str, azimuth: f64, distance: f64, json: bool) -> Result<()> {
    tracing::info!(origin, azimuth, distance, "direct");
    let origin = parse_point(origin)?;
    let dest = direct(&origin, azimuth, distance).context("direct solve rejected")?;
    if json {
        print_json(&serde_json::json!({
            "latitude": dest.latitude,
            "longitude": dest.longitude,
        }))
    } else {
        println!("destination: {:.7}, {:.7}", dest.latitude, dest.longitude);
        Ok(())
    }
}

fn route_cmd(from: &str, to: &str, samples: usize, json: bool) -> Result<()> {
    tracing::info!(from, to, samples, "route");
    let origin = parse_point(from)?;
    let dest = parse_point(to)?;
    render_route(&origin, &dest, samples, json)
}

fn to_utm_cmd(point: &str, json: bool) -> Result<()> {
    tracing::info!(point, "to_utm");
    let p = parse_point(point)?;
    let pp = to_projected(&p).context("projection rejected")?;
    if json {
        print_json(&serde_json::to_value(pp)?)
    } else {
        println!("{pp}");
        Ok(())
    }
}

fn from_utm_cmd(
    easting: f64,
    northing: f64,
    zone: i32,
    hemisphere: &str,
    json: bool,
) -> Result<()> {
    tracing::info!(easting, northing, zone, hemisphere, "from_utm");
    let pp = ProjectedPoint::new(easting, northing, zone, parse_hemisphere(hemisphere)?);
    let p = to_geographic(&pp).context("inverse projection rejected")?;
    if json {
        print_json(&serde_json::json!({
            "latitude": p.latitude,
            "longitude": p.longitude,
        }))
    } else {
        println!("geographic: {:.7}, {:.7}", p.latitude, p.longitude);
        Ok(())
    }
}

fn area_cmd(points: &[String], file: Option<&Path>, json: bool) -> Result<()> {
    tracing::info!(points = points.len(), file = ?file, "area");
    let ring = match file {
        Some(path) => {
            if !points.is_empty() {
                bail!("pass either --point arguments or --file, not both");
            }
            read_ring_file(path)?
        }
        None => points
            .iter()
            .map(|s| parse_point(s))
            .collect::<Result<Vec<_>>>()?,
    };
    // The engine fails fast on small rings too; guarding here keeps the
    // rejection in the layer that owns user input.
    if ring.len() < 3 {
        bail!("a polygon needs at least 3 points, got {}", ring.len());
    }
    render_area(&ring, json)
}

fn field_cmd(east: f64, north: f64, up: f64, json: bool) -> Result<()> {
    tracing::info!(east, north, up, "field");
    let summary = FieldSummary::from_vector(FieldVector::new(east, north, up));
    if json {
        print_json(&serde_json::to_value(summary)?)
    } else {
        println!("total intensity F: {:.1} nT", summary.total_nt);
        println!("horizontal H: {:.1} nT", summary.horizontal_nt);
        println!("declination D: {:.4} deg", summary.declination_deg);
        println!("inclination I: {:.4} deg", summary.inclination_deg);
        Ok(())
    }
}

pub(crate) fn render_inverse(origin: &GeoPoint, dest: &GeoPoint, json: bool) -> Result<()> {
    let sol = inverse(origin, dest).context("inverse solve rejected")?;
    if json {
        print_json(&serde_json::json!({
            "distance_m": sol.distance_m,
            "distance_km": sol.distance_km(),
            "initial_azimuth_deg": sol.initial_azimuth_deg,
        }))
    } else {
        println!("distance: {:.3} m ({:.3} km)", sol.distance_m, sol.distance_km());
        println!("initial azimuth: {:.4} deg", sol.initial_azimuth_deg);
        Ok(())
    }
}

pub(crate) fn render_route(
    origin: &GeoPoint,
    dest: &GeoPoint,
    samples: usize,
    json: bool,
) -> Result<()> {
    let sample = sample_route(origin, dest, samples).context("route sampling rejected")?;
    if json {
        print_json(&serde_json::json!({
            "distance_m": sample.solution.distance_m,
            "initial_azimuth_deg": sample.solution.initial_azimuth_deg,
            "points": sample.points,
        }))
    } else {
        println!(
            "route: {:.3} km at azimuth {:.4} deg, {} points",
            sample.solution.distance_km(),
            sample.solution.initial_azimuth_deg,
            sample.points.len()
        );
        for p in &sample.points {
            println!("{:>12.7} {:>12.7}", p.latitude, p.longitude);
        }
        Ok(())
    }
}

pub(crate) fn render_area(ring: &[GeoPoint], json: bool) -> Result<()> {
    let result = compute_area(ring).context("area computation rejected")?;
    if json {
        print_json(&serde_json::json!({
            "perimeter_m": result.perimeter_m,
            "signed_area_m2": result.signed_area_m2,
            "area_m2": result.area_m2(),
            "area_km2": result.area_km2(),
        }))
    } else {
        println!("perimeter: {:.3} m", result.perimeter_m);
        println!("area: {:.3} m2 ({:.6} km2)", result.area_m2(), result.area_km2());
        Ok(())
    }
}

pub(crate) fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn parse_point(s: &str) -> Result<GeoPoint> {
    let (lat, lon) = s
        .split_once(',')
        .with_context(|| format!("expected LAT,LON, got {s:?}"))?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("bad latitude {lat:?}"))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("bad longitude {lon:?}"))?;
    Ok(GeoPoint::unnamed(latitude, longitude))
}

pub(crate) fn parse_hemisphere(s: &str) -> Result<Hemisphere> {
    match s {
        "N" | "n" | "north" | "North" => Ok(Hemisphere::North),
        "S" | "s" | "south" | "South" => Ok(Hemisphere::South),
        other => bail!("hemisphere must be N or S, got {other:?}"),
    }
}

fn read_ring_file(path: &Path) -> Result<Vec<GeoPoint>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<(f64, f64)> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {} as a JSON [[lat, lon], ..] array", path.display()))?;
    Ok(pairs
        .into_iter()
        .map(|(lat, lon)| GeoPoint::unnamed(lat, lon))
        .collect())
}
