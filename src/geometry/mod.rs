mod transform;

pub use transform::SectorTransform;

use egui::{Pos2, Rect};

/// Calculate distance from a point to a line segment.
///
/// The canvas rasteriser turns this into per-pixel stroke coverage.
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Calculate the bounding box for a set of points.
///
/// Used to cull strokes that land entirely off the canvas.
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

/// Horizontal extent at height `y` of every point within `radius` of the
/// segment `from..to` (a capsule), or `None` if the row misses it.
///
/// The capsule is convex, so the row crosses it in one interval: the hull of
/// the two end-cap circles' chords and the straight band between them.
pub fn capsule_row_span(from: Pos2, to: Pos2, y: f32, radius: f32) -> Option<(f32, f32)> {
    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;

    for cap in [from, to] {
        let dy = y - cap.y;
        if dy.abs() <= radius {
            let half_chord = (radius * radius - dy * dy).sqrt();
            min_x = min_x.min(cap.x - half_chord);
            max_x = max_x.max(cap.x + half_chord);
        }
    }

    let line_vec = to - from;
    let line_len = line_vec.length();
    if line_len > 0.0 {
        let along = line_vec / line_len;
        let dy = y - from.y;
        // Projection onto the segment in [0, len], offset across it in [-radius, radius].
        // Both are linear in x: a * (x - from.x) + b.
        let band = [
            (along.x, dy * along.y, 0.0, line_len),
            (-along.y, dy * along.x, -radius, radius),
        ]
        .into_iter()
        .try_fold((f32::NEG_INFINITY, f32::INFINITY), |(lo, hi), (a, b, min, max)| {
            if a.abs() < f32::EPSILON {
                (min..=max).contains(&b).then_some((lo, hi))
            } else {
                let (p, q) = ((min - b) / a, (max - b) / a);
                Some((lo.max(p.min(q)), hi.min(p.max(q))))
            }
        });
        if let Some((lo, hi)) = band {
            if lo <= hi {
                min_x = min_x.min(from.x + lo);
                max_x = max_x.max(from.x + hi);
            }
        }
    }

    (min_x <= max_x).then_some((min_x, max_x))
}
