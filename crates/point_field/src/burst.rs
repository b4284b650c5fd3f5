//! Deterministic point generation for one right-click burst.
//!
//! A burst is the cursor itself, a 63-point golden-angle spiral around it,
//! and two golden-ratio jittered connector runs: one along the segment from
//! the origin to the cursor, one from the cursor to the right edge anchor
//! `(width, 0)`. No randomness anywhere; the burst is a pure function of
//! the cursor position and the surface size.
use glam::DVec2;
use std::f64::consts::TAU;

use crate::raster::SurfaceSize;

/// Number of points in the spiral arm, fixed regardless of surface size.
pub const SPIRAL_ARM_POINTS: usize = 63;

const PHI: f64 = 1.618_033_988_749_895; // (1 + sqrt(5)) / 2

/// Generate the ordered burst for a click at `cursor`.
///
/// Sub-sequences are concatenated in a fixed order: the cursor (a permanent
/// trail point duplicating slot 0), the spiral arm, the inward connector,
/// the outward connector. Connector point counts scale with the distance
/// they cover (one point per unit); a cursor exactly at the origin or at
/// the right edge anchor contributes an empty connector, by design.
pub fn generate(cursor: DVec2, surface: SurfaceSize) -> Vec<DVec2> {
    let anchor = right_edge_anchor(surface);
    let span = anchor - cursor;

    let mut out = Vec::with_capacity(burst_len(cursor, surface));
    out.push(cursor);

    // Golden-angle spiral: evenly distributed angles, radius sqrt(i).
    for i in 1..=SPIRAL_ARM_POINTS {
        let fi = i as f64;
        out.push(cursor + polar(fi.sqrt(), fi * TAU * PHI));
    }

    // Inward connector: low-discrepancy Kronecker positions scaled onto the
    // origin-to-cursor segment, one point per unit of distance.
    let mut i = 1;
    while (i as f64) < cursor.length() {
        out.push(frac(PHI * i as f64) * cursor);
        i += 1;
    }

    // Outward connector: the same sequence along cursor-to-anchor.
    let mut i = 1;
    while (i as f64) < span.length() {
        out.push(cursor + frac(PHI * i as f64) * span);
        i += 1;
    }

    out
}

/// Predicted length of [`generate`]'s output for the same inputs.
///
/// A connector covering distance `d` holds one point per integer strictly
/// below `d`, i.e. `ceil(d) - 1` points (zero for `d <= 1`).
pub fn burst_len(cursor: DVec2, surface: SurfaceSize) -> usize {
    let anchor = right_edge_anchor(surface);
    1 + SPIRAL_ARM_POINTS
        + connector_len(cursor.length())
        + connector_len((anchor - cursor).length())
}

fn right_edge_anchor(surface: SurfaceSize) -> DVec2 {
    DVec2::new(surface.width as f64, 0.0)
}

fn connector_len(distance: f64) -> usize {
    (distance.ceil() as usize).saturating_sub(1)
}

fn polar(radius: f64, angle: f64) -> DVec2 {
    DVec2::from_angle(angle) * radius
}

#[inline]
fn frac(x: f64) -> f64 {
    x.fract()
}
