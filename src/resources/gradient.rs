//! Radial resource gradient.

use glam::Vec2;

const QUANTITY_AT_CENTER: f32 = 0.2;
const QUALITY_AT_CENTER: f32 = 0.8;
const GRADIENT_SPAN: f32 = 0.6;

/// Euclidean distance from `(row, col)` to the center of a `size` grid,
/// divided by the radius `size / 2` and clamped to [0, 1].
///
/// A single-cell grid has radius 0; its only cell is at distance 0.
pub fn normalized_distance(row: usize, col: usize, size: usize) -> f32 {
    let max_distance = (size / 2) as f32;
    if max_distance == 0.0 {
        return 0.0;
    }
    let center = Vec2::splat((size / 2) as f32);
    let cell = Vec2::new(row as f32, col as f32);
    (cell.distance(center) / max_distance).clamp(0.0, 1.0)
}

/// Returns `(quantity, quality)` at normalized distance `d`.
///
/// `quantity = 0.2 + 0.6 d`, `quality = 0.8 - 0.6 d`.
pub fn radial_gradient(d: f32) -> (f32, f32) {
    let d = d.clamp(0.0, 1.0);
    (
        QUANTITY_AT_CENTER + GRADIENT_SPAN * d,
        QUALITY_AT_CENTER - GRADIENT_SPAN * d,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let (quantity, quality) = radial_gradient(0.0);
        assert!((quantity - 0.2).abs() < 1e-6);
        assert!((quality - 0.8).abs() < 1e-6);

        let (quantity, quality) = radial_gradient(1.0);
        assert!((quantity - 0.8).abs() < 1e-6);
        assert!((quality - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_gradient_monotonic() {
        let mut last = radial_gradient(0.0);
        for i in 1..=100 {
            let next = radial_gradient(i as f32 / 100.0);
            assert!(next.0 >= last.0, "quantity decreased at step {}", i);
            assert!(next.1 <= last.1, "quality increased at step {}", i);
            last = next;
        }
    }

    #[test]
    fn test_gradient_clamps() {
        assert_eq!(radial_gradient(-0.5), radial_gradient(0.0));
        assert_eq!(radial_gradient(1.5), radial_gradient(1.0));
    }

    #[test]
    fn test_normalized_distance() {
        assert_eq!(normalized_distance(2, 2, 5), 0.0);
        assert_eq!(normalized_distance(0, 2, 5), 1.0);
        assert_eq!(normalized_distance(2, 3, 5), 0.5);
        // Diagonal corners lie beyond the radius and clamp.
        assert_eq!(normalized_distance(0, 0, 5), 1.0);
        assert_eq!(normalized_distance(0, 0, 1), 0.0);
    }
}
