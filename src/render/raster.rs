//! Integer rasterization primitives over a [`Canvas`].
//!
//! Coordinates are pixel centers. Every primitive touches each covered pixel exactly once, so an
//! additive [`Ink`] never double-counts overlaps within a single shape. All writes go through
//! [`Canvas::put`], which drops out-of-bounds pixels.

use crate::render::canvas::{Canvas, Ink};

/// Clip an inclusive pixel span to `[0, len)`. Returns `None` when nothing is left.
fn clip_span(lo: i64, hi: i64, len: i32) -> Option<(i32, i32)> {
    let lo = lo.max(0);
    let hi = hi.min(i64::from(len) - 1);
    (lo <= hi).then_some((lo as i32, hi as i32))
}

/// Filled disc: pixels with `dx^2 + dy^2 <= r^2`.
pub fn fill_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, ink: Ink) {
    let r = i64::from(radius.max(0));
    let (cx64, cy64) = (i64::from(cx), i64::from(cy));
    let Some((y0, y1)) = clip_span(cy64 - r, cy64 + r, canvas.height()) else {
        return;
    };
    let Some((x0, x1)) = clip_span(cx64 - r, cx64 + r, canvas.width()) else {
        return;
    };
    let r2 = r * r;
    for y in y0..=y1 {
        let dy = i64::from(y) - cy64;
        for x in x0..=x1 {
            let dx = i64::from(x) - cx64;
            if dx * dx + dy * dy <= r2 {
                canvas.put(x, y, ink);
            }
        }
    }
}

/// Ring of the given thickness centered on the circle of radius `radius`.
pub fn stroke_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, thickness: i32, ink: Ink) {
    let half = thickness.max(1) as f32 / 2.0;
    let inner = (radius as f32 - half).max(0.0);
    let outer = radius as f32 + half;
    let reach = outer.ceil() as i64;
    let (cx64, cy64) = (i64::from(cx), i64::from(cy));
    let Some((y0, y1)) = clip_span(cy64 - reach, cy64 + reach, canvas.height()) else {
        return;
    };
    let Some((x0, x1)) = clip_span(cx64 - reach, cx64 + reach, canvas.width()) else {
        return;
    };
    let (in2, out2) = (inner * inner, outer * outer);
    for y in y0..=y1 {
        let dy = (i64::from(y) - cy64) as f32;
        for x in x0..=x1 {
            let dx = (i64::from(x) - cx64) as f32;
            let d2 = dx * dx + dy * dy;
            if d2 >= in2 && d2 <= out2 {
                canvas.put(x, y, ink);
            }
        }
    }
}

/// Filled axis-aligned rectangle between two inclusive corners (any order).
pub fn fill_rect(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, ink: Ink) {
    let (xa, xb) = (x0.min(x1), x0.max(x1));
    let (ya, yb) = (y0.min(y1), y0.max(y1));
    let Some((xa, xb)) = clip_span(i64::from(xa), i64::from(xb), canvas.width()) else {
        return;
    };
    let Some((ya, yb)) = clip_span(i64::from(ya), i64::from(yb), canvas.height()) else {
        return;
    };
    for y in ya..=yb {
        for x in xa..=xb {
            canvas.put(x, y, ink);
        }
    }
}

/// Rectangle outline, `thickness` pixels wide, centered on the edges.
pub fn stroke_rect(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    thickness: i32,
    ink: Ink,
) {
    let t = thickness.max(1);
    let lo = t / 2;
    let hi = t - 1 - lo;
    let (xa, xb) = (x0.min(x1), x0.max(x1));
    let (ya, yb) = (y0.min(y1), y0.max(y1));

    let (ox0, ox1, oy0, oy1) = (xa - lo, xb + hi, ya - lo, yb + hi);
    let (ix0, ix1, iy0, iy1) = (xa + hi + 1, xb - lo - 1, ya + hi + 1, yb - lo - 1);

    let Some((cx0, cx1)) = clip_span(i64::from(ox0), i64::from(ox1), canvas.width()) else {
        return;
    };
    let Some((cy0, cy1)) = clip_span(i64::from(oy0), i64::from(oy1), canvas.height()) else {
        return;
    };
    for y in cy0..=cy1 {
        for x in cx0..=cx1 {
            let inside = x >= ix0 && x <= ix1 && y >= iy0 && y <= iy1;
            if !inside {
                canvas.put(x, y, ink);
            }
        }
    }
}

/// Line segment of the given thickness with round caps.
pub fn line(
    canvas: &mut Canvas,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
    thickness: i32,
    ink: Ink,
) {
    let half = thickness.max(1) as f32 / 2.0;
    let reach = half.ceil() as i64;
    let Some((bx0, bx1)) = clip_span(
        i64::from(x0.min(x1)) - reach,
        i64::from(x0.max(x1)) + reach,
        canvas.width(),
    ) else {
        return;
    };
    let Some((by0, by1)) = clip_span(
        i64::from(y0.min(y1)) - reach,
        i64::from(y0.max(y1)) + reach,
        canvas.height(),
    ) else {
        return;
    };

    let (ax, ay) = (x0 as f32, y0 as f32);
    let (dx, dy) = (x1 as f32 - ax, y1 as f32 - ay);
    let len2 = dx * dx + dy * dy;
    let half2 = half * half;
    for y in by0..=by1 {
        for x in bx0..=bx1 {
            let (px, py) = (x as f32 - ax, y as f32 - ay);
            let t = if len2 > 0.0 {
                ((px * dx + py * dy) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let (ex, ey) = (px - t * dx, py - t * dy);
            if ex * ex + ey * ey <= half2 {
                canvas.put(x, y, ink);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
