//! The two data-parallel rasterizer passes.
//!
//! Pass A overwrites every pixel with the crosshair grid for the current
//! cursor; Pass B accumulates every point of the frame snapshot as a
//! bilinear splat on top of it. Both passes run on rayon; Pass B only
//! starts after Pass A has fully completed.
use glam::DVec2;
use rayon::prelude::*;
use std::sync::atomic::Ordering;

use crate::raster::{accumulate_gray, Raster};

/// Near-white translucent value for the crosshair row and column.
pub const GRID_LINE: u32 = 0xCCFF_FFFF;
/// Near-black translucent value for every other pixel.
pub const GRID_BACKDROP: u32 = 0xCC00_0000;

/// Render one frame: grid overlay, then point splatting.
///
/// `points` is the frame's snapshot, cursor included at slot 0; the splat
/// pass treats the cursor like any other point, so the live position always
/// glows on top of the grid.
pub fn render(raster: &Raster, cursor: DVec2, points: &[DVec2]) {
    grid_pass(raster, cursor);
    splat_pass(raster, points);
}

/// Pass A: full-surface overwrite, parallel over rows.
///
/// A pixel lights up iff its column equals `round(cursor.x)` or its row
/// equals `round(cursor.y)`: one 1px vertical and one 1px horizontal line
/// crossing at the cursor, no anti-aliasing.
pub fn grid_pass(raster: &Raster, cursor: DVec2) {
    let width = raster.width();
    let line_col = rounded_axis(cursor.x);
    let line_row = rounded_axis(cursor.y);
    raster
        .cells()
        .par_chunks(width)
        .enumerate()
        .for_each(|(row, cells)| {
            let on_row = Some(row as i64) == line_row;
            for (col, cell) in cells.iter().enumerate() {
                let value = if on_row || Some(col as i64) == line_col {
                    GRID_LINE
                } else {
                    GRID_BACKDROP
                };
                cell.store(value, Ordering::Relaxed);
            }
        });
}

/// Pass B: saturating bilinear splats, parallel over points.
pub fn splat_pass(raster: &Raster, points: &[DVec2]) {
    points.par_iter().for_each(|point| splat(raster, *point));
}

/// Accumulate one point onto its four neighboring pixels.
///
/// The point decomposes into an integer cell and a fractional remainder;
/// the remainder distributes 255 units of gray over the 2x2 neighborhood
/// (integer-truncated per corner). Each target pixel is bounds-checked
/// independently: out-of-range corners are discarded, in-range corners
/// still accumulate.
fn splat(raster: &Raster, point: DVec2) {
    let floor = point.floor();
    if !floor.x.is_finite() || !floor.y.is_finite() {
        return;
    }
    // Anything whose 2x2 neighborhood cannot touch the raster is discarded
    // before the integer casts, keeping qx + 1 / qy + 1 overflow-free for
    // the whole f64 domain.
    let width = raster.width() as i64;
    let height = raster.height() as i64;
    if floor.x < -1.0 || floor.y < -1.0 || floor.x >= width as f64 || floor.y >= height as f64 {
        return;
    }
    let xr = point.x - floor.x;
    let yr = point.y - floor.y;
    let (qx, qy) = (floor.x as i64, floor.y as i64);

    let corners = [
        (0i64, 0i64, (1.0 - xr) * (1.0 - yr)),
        (0, 1, (1.0 - xr) * yr),
        (1, 0, xr * (1.0 - yr)),
        (1, 1, xr * yr),
    ];

    for (dx, dy, weight) in corners {
        let (tx, ty) = (qx + dx, qy + dy);
        if tx < 0 || ty < 0 || tx >= width || ty >= height {
            continue;
        }
        let gray = (weight * 255.0) as u32;
        accumulate_gray(&raster.cells()[(ty * width + tx) as usize], gray);
    }
}

fn rounded_axis(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round() as i64)
}
