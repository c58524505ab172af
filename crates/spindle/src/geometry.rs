//! Angular bookkeeping for a wheel of `n` equal slices.
//!
//! Angles are in degrees. Slice `i` covers `[i * 360/n, (i+1) * 360/n)`,
//! counted clockwise from the fixed pointer position at 0°.

/// Width of one slice.
pub fn slice_angle(n: usize) -> f64 {
    360.0 / n as f64
}

/// Leading edge of slice `index`.
pub fn slice_start(index: usize, n: usize) -> f64 {
    index as f64 * slice_angle(n)
}

/// Center of slice `index`, where a surface places its label.
pub fn slice_midpoint(index: usize, n: usize) -> f64 {
    slice_start(index, n) + slice_angle(n) / 2.0
}

/// Which slice rests under the pointer when the wheel is rotated by
/// `rotation` degrees. Inverse of the selector's resting-angle arithmetic:
/// a wheel rotated by `r` shows the slice containing `(360 - r mod 360) mod
/// 360` at the pointer.
///
/// # Panics
///
/// Panics when `n` is zero; a pointer over an empty wheel points at nothing.
pub fn pointed_entry(rotation: f64, n: usize) -> usize {
    assert!(n > 0, "wheel has no slices");
    let resting = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    // min() guards the floating-point edge where resting rounds to 360.
    ((resting / slice_angle(n)) as usize).min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_partition_the_circle() {
        for n in [1, 2, 7, 16] {
            assert!((slice_start(n - 1, n) + slice_angle(n) - 360.0).abs() < 1e-9);
        }
    }

    #[test]
    fn midpoint_sits_inside_its_slice() {
        let mid = slice_midpoint(3, 8);
        assert!(mid > slice_start(3, 8));
        assert!(mid < slice_start(4, 8));
    }

    #[test]
    fn unrotated_wheel_points_at_the_first_slice() {
        assert_eq!(pointed_entry(0.0, 16), 0);
        assert_eq!(pointed_entry(720.0, 16), 0);
    }

    #[test]
    #[should_panic(expected = "no slices")]
    fn empty_wheel_has_no_pointed_entry() {
        pointed_entry(0.0, 0);
    }

    #[test]
    fn pointer_walks_backwards_through_slices_as_rotation_grows() {
        // Rotating the wheel forward carries later slices under the pointer
        // in reverse index order.
        assert_eq!(pointed_entry(10.0, 4), 3);
        assert_eq!(pointed_entry(100.0, 4), 2);
        assert_eq!(pointed_entry(-80.0, 4), 0);
    }
}
