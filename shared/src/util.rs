use once_cell::sync::Lazy;
use std::f64::consts::TAU;

const LOOKUP_TABLE_SIZE: usize = 720;

/// Unit vectors `(cos, sin)` for equally spaced headings around the circle.
static HEADING_TABLE: Lazy<[(f64, f64); LOOKUP_TABLE_SIZE]> = Lazy::new(|| {
    let mut arr = [(0.0f64, 0.0f64); LOOKUP_TABLE_SIZE];
    let step = TAU / LOOKUP_TABLE_SIZE as f64;
    for (i, slot) in arr.iter_mut().enumerate() {
        let (sin, cos) = (i as f64 * step).sin_cos();
        *slot = (cos, sin);
    }
    arr
});

/// Unit vector `(dx, dy)` pointing along `angle` (radians), read from a
/// lookup table. Any finite angle is accepted; it is wrapped with `rem_euclid`.
#[inline(always)]
pub fn heading(angle: f64) -> (f64, f64) {
    let frac = angle.rem_euclid(TAU) / TAU;
    let idx = ((frac * LOOKUP_TABLE_SIZE as f64) as usize) % LOOKUP_TABLE_SIZE;
    HEADING_TABLE[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_close(angle: f64) {
        let (dx, dy) = heading(angle);
        assert!((dx - angle.cos()).abs() < 0.01, "cos off for {angle}");
        assert!((dy - angle.sin()).abs() < 0.01, "sin off for {angle}");
    }

    #[test]
    fn matches_trig_over_a_sweep() {
        for i in 0..100 {
            assert_close(i as f64 * TAU / 100.0);
        }
    }

    #[test]
    fn wraps_negative_and_large_angles() {
        assert_close(-PI / 2.0);
        assert_close(2.5 * PI);
        assert_close(10.0 * PI);
    }

    #[test]
    fn headings_are_unit_length() {
        for i in 0..LOOKUP_TABLE_SIZE {
            let (dx, dy) = HEADING_TABLE[i];
            assert!(((dx * dx + dy * dy).sqrt() - 1.0).abs() < 1e-9);
        }
    }
}
