//! Line-oriented session driver.
//!
//! One invocation owns one `PointRegistry` for its whole lifetime: the
//! registry is created here, mutated only by the script being read, and
//! dropped when the script ends. Rejected lines are logged and skipped;
//! the session itself keeps running, mirroring a form that shows an
//! error and stays open.
//!
//! Commands:
//!   add <name> <lat> <lon>
//!   add-utm <name> <easting> <northing> <zone> <N|S>
//!   table
//!   inverse <name1> <name2>
//!   route <name1> <name2> <n>
//!   area
//!   clear
//! Blank lines and lines starting with '#' are ignored.

use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use geocalc::prelude::*;

use crate::{parse_hemisphere, print_json, render_area, render_inverse, render_route};

pub fn run(script: Option<&Path>, json: bool) -> Result<()> {
    tracing::info!(script = ?script, "session");
    let mut registry = PointRegistry::new();
    match script {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            drive(&mut registry, std::io::BufReader::new(file), json)
        }
        None => drive(&mut registry, std::io::stdin().lock(), json),
    }
}

fn drive(registry: &mut PointRegistry, reader: impl BufRead, json: bool) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("reading session input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(err) = execute(registry, line, json) {
            tracing::warn!(line = index + 1, error = %err, "request rejected");
        }
    }
    Ok(())
}

fn execute(registry: &mut PointRegistry, line: &str, json: bool) -> Result<()> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(());
    };
    match command {
        "add" => {
            let name = parts.next().context("add needs: name lat lon")?;
            let lat = parse_next(&mut parts, "lat")?;
            let lon = parse_next(&mut parts, "lon")?;
            registry.add_point(name, lat, lon);
            Ok(())
        }
        "add-utm" => {
            let name = parts.next().context("add-utm needs: name easting northing zone N|S")?;
            let easting = parse_next(&mut parts, "easting")?;
            let northing = parse_next(&mut parts, "northing")?;
            let zone: i32 = parse_next(&mut parts, "zone")?;
            let hemisphere =
                parse_hemisphere(parts.next().context("add-utm needs a hemisphere")?)?;
            let pp = ProjectedPoint::new(easting, northing, zone, hemisphere);
            registry
                .add_projected(name, &pp)
                .context("projected point rejected")?;
            Ok(())
        }
        "table" => render_table(registry, json),
        "inverse" => {
            let a = lookup(registry, parts.next().context("inverse needs two names")?)?;
            let b = lookup(registry, parts.next().context("inverse needs two names")?)?;
            render_inverse(&a, &b, json)
        }
        "route" => {
            let a = lookup(registry, parts.next().context("route needs two names")?)?;
            let b = lookup(registry, parts.next().context("route needs two names")?)?;
            let n: usize = parse_next(&mut parts, "sample count")?;
            render_route(&a, &b, n, json)
        }
        "area" => {
            // The whole session ring, in insertion order.
            if registry.len() < 3 {
                bail!("area needs at least 3 registered points, have {}", registry.len());
            }
            render_area(registry.points(), json)
        }
        "clear" => {
            registry.clear();
            Ok(())
        }
        other => bail!("unknown command {other:?}"),
    }
}

fn parse_next<'a, T>(parts: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let token = parts.next().with_context(|| format!("missing {what}"))?;
    token.parse().with_context(|| format!("bad {what} {token:?}"))
}

fn lookup(registry: &PointRegistry, name: &str) -> Result<GeoPoint> {
    registry
        .find(name)
        .cloned()
        .with_context(|| format!("no point named {name:?}"))
}

#[derive(serde::Serialize)]
struct TableRow<'a> {
    name: &'a str,
    latitude: f64,
    longitude: f64,
    easting: Option<f64>,
    northing: Option<f64>,
    zone: Option<i32>,
    hemisphere: Option<String>,
}

fn render_table(registry: &PointRegistry, json: bool) -> Result<()> {
    let rows: Vec<TableRow<'_>> = registry
        .iter()
        .map(|p| {
            // Projected columns are derived per render; a point outside
            // the projection domain just leaves them blank.
            let projected = to_projected(p).ok();
            TableRow {
                name: &p.name,
                latitude: p.latitude,
                longitude: p.longitude,
                easting: projected.map(|pp| pp.easting),
                northing: projected.map(|pp| pp.northing),
                zone: projected.map(|pp| pp.zone),
                hemisphere: projected.map(|pp| pp.hemisphere.to_string()),
            }
        })
        .collect();
    if json {
        return print_json(&serde_json::to_value(&rows)?);
    }
    println!(
        "{:<16} {:>12} {:>12} {:>12} {:>13} {:>5} {:>4}",
        "name", "latitude", "longitude", "easting", "northing", "zone", "hemi"
    );
    for row in &rows {
        match (row.easting, row.northing, row.zone, &row.hemisphere) {
            (Some(e), Some(n), Some(z), Some(h)) => println!(
                "{:<16} {:>12.7} {:>12.7} {:>12.3} {:>13.3} {:>5} {:>4}",
                row.name, row.latitude, row.longitude, e, n, z, h
            ),
            _ => println!(
                "{:<16} {:>12.7} {:>12.7} {:>12} {:>13} {:>5} {:>4}",
                row.name, row.latitude, row.longitude, "-", "-", "-", "-"
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_clear_drive_the_registry() {
        let mut reg = PointRegistry::new();
        execute(&mut reg, "add Rio -22.9068 -43.1729", false).unwrap();
        execute(&mut reg, "add BsAs -34.6037 -58.3816", false).unwrap();
        assert_eq!(reg.len(), 2);
        execute(&mut reg, "clear", false).unwrap();
        assert!(reg.is_empty());
    }

    #[test]
    fn add_utm_stores_the_geographic_form() {
        let mut reg = PointRegistry::new();
        execute(&mut reg, "add-utm Rio 687409 7465634 23 S", false).unwrap();
        let p = reg.find("Rio").unwrap();
        assert!((p.latitude + 22.9068).abs() < 0.01);
        assert!((p.longitude + 43.1729).abs() < 0.01);
    }

    #[test]
    fn rejected_lines_error_without_side_effects() {
        let mut reg = PointRegistry::new();
        assert!(execute(&mut reg, "add Rio not-a-number 0", false).is_err());
        assert!(execute(&mut reg, "inverse A B", false).is_err());
        assert!(execute(&mut reg, "warp 1 2", false).is_err());
        assert!(reg.is_empty());
    }
}
