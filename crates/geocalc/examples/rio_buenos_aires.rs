//! Worked scenario: Rio de Janeiro to Buenos Aires.
//!
//! Purpose
//! - Exercise the full solver surface on one realistic leg: inverse
//!   solution, a 50-point route polyline, the UTM form of both
//!   endpoints, and the area of the triangle they close with Montevideo.
//! - Print the numbers a dashboard would display, plus wall-clock
//!   timings for a feel of the cost per call.

use std::time::Instant;

use geocalc::prelude::*;

fn main() -> Result<()> {
    let rio = GeoPoint::new("Rio de Janeiro", -22.9068, -43.1729);
    let buenos_aires = GeoPoint::new("Buenos Aires", -34.6037, -58.3816);
    let montevideo = GeoPoint::new("Montevideo", -34.9011, -56.1645);

    let start = Instant::now();
    let sol = inverse(&rio, &buenos_aires)?;
    let inverse_elapsed = start.elapsed().as_secs_f64() * 1e6;
    println!(
        "{} -> {}: {:.3} km, initial azimuth {:.4} deg",
        rio.name,
        buenos_aires.name,
        sol.distance_km(),
        sol.initial_azimuth_deg
    );

    let start = Instant::now();
    let route = sample_route(&rio, &buenos_aires, 50)?;
    let route_elapsed = start.elapsed().as_secs_f64() * 1e3;
    let midpoint = &route.points[route.points.len() / 2];
    println!(
        "route: {} points, midpoint ({:.5}, {:.5})",
        route.points.len(),
        midpoint.latitude,
        midpoint.longitude
    );

    for city in [&rio, &buenos_aires] {
        let pp = to_projected(city)?;
        println!("{}: {}", city.name, pp);
    }

    let triangle = [rio.clone(), buenos_aires.clone(), montevideo.clone()];
    let area = compute_area(&triangle)?;
    println!(
        "triangle area {:.1} km2, perimeter {:.1} km",
        area.area_km2(),
        area.perimeter_m / 1000.0
    );

    println!("inverse_time_us={inverse_elapsed:.1}");
    println!("route50_time_ms={route_elapsed:.3}");
    Ok(())
}
