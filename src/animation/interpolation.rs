//! Point interpolation between control points.

use cgmath::{Vector3, Vector4};

/// Linear interpolation from `p0` (at `x = 0`) to `p1` (at `x = 1`).
pub fn lerp(p0: Vector3<f32>, p1: Vector3<f32>, x: f32) -> Vector3<f32> {
    p0 + (p1 - p0) * x
}

/// Evaluates the Catmull-Rom segment between `p1` and `p2`.
///
/// `p0` and `p3` shape the tangents at the segment ends and `tension`
/// scales them: `0.5` is the standard spline, `0.0` flattens both tangents
/// to zero.
///
/// The curve is `[1, x, x², x³] · M(t) · [p0, p1, p2, p3]ᵀ` with
///
/// ```text
///        |  0     1     0     0 |
/// M(t) = | -t     0     t     0 |
///        | 2t   t-3  3-2t    -t |
///        | -t   2-t   t-2     t |
/// ```
pub fn catmull_rom(
    p0: Vector3<f32>,
    p1: Vector3<f32>,
    p2: Vector3<f32>,
    p3: Vector3<f32>,
    tension: f32,
    x: f32,
) -> Vector3<f32> {
    let weights = catmull_rom_weights(tension, x);
    p0 * weights.x + p1 * weights.y + p2 * weights.z + p3 * weights.w
}

/// Blend weights of the four control points, `[1, x, x², x³] · M(t)`.
fn catmull_rom_weights(t: f32, x: f32) -> Vector4<f32> {
    let x2 = x * x;
    let x3 = x2 * x;
    Vector4::new(
        -t * x + 2.0 * t * x2 - t * x3,
        1.0 + (t - 3.0) * x2 + (2.0 - t) * x3,
        t * x + (3.0 - 2.0 * t) * x2 + (t - 2.0) * x3,
        -t * x2 + t * x3,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(3.0, -2.0, 5.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vector3::new(2.0, 0.0, 4.0));
    }

    #[test]
    fn test_catmull_rom_passes_through_inner_points() {
        let p = [
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 1.0, 2.0),
            Vector3::new(2.0, 0.0, 0.0),
        ];
        for tension in [0.0, 0.25, 0.5, 1.0] {
            assert!(close(catmull_rom(p[0], p[1], p[2], p[3], tension, 0.0), p[1]));
            assert!(close(catmull_rom(p[0], p[1], p[2], p[3], tension, 1.0), p[2]));
        }
    }

    #[test]
    fn test_catmull_rom_weights_sum_to_one() {
        for tension in [0.0, 0.5, 0.8] {
            for step in 0..=10 {
                let w = catmull_rom_weights(tension, step as f32 / 10.0);
                assert!((w.x + w.y + w.z + w.w - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_catmull_rom_collinear_points_stay_on_line() {
        let p: Vec<_> = (0..4).map(|i| Vector3::new(i as f32, 0.0, 0.0)).collect();
        let mid = catmull_rom(p[0], p[1], p[2], p[3], 0.5, 0.5);
        assert!(close(mid, Vector3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_catmull_rom_end_tangents() {
        // Derivative at x = 0 is t * (p2 - p0)
        let p = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        let h = 1e-3;
        let slope = (catmull_rom(p[0], p[1], p[2], p[3], 0.5, h) - p[1]) / h;
        let expected = (p[2] - p[0]) * 0.5;
        assert!((slope - expected).magnitude() < 1e-2, "{slope:?}");
    }
}
