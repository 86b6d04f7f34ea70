/// Cubic ease-in-out over normalized time. Input is clamped to `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn symmetric_about_midpoint() {
        for step in 0..=100 {
            let t = step as f64 / 100.0;
            let mirrored = 1.0 - ease_in_out(1.0 - t);
            assert!((ease_in_out(t) - mirrored).abs() < 1e-12, "asymmetric at t={}", t);
        }
    }

    #[test]
    fn monotonic() {
        let mut last = 0.0;
        for step in 1..=1000 {
            let value = ease_in_out(step as f64 / 1000.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(ease_in_out(-0.5), 0.0);
        assert_eq!(ease_in_out(1.5), 1.0);
    }
}
