const NEWTON_ITERATIONS: usize = 4;
const DERIVATIVE_EPSILON: f64 = 1e-7;

/// Cubic bezier easing curve with implicit endpoints (0,0) and (1,1).
///
/// `eval` inverts the x(t) parametrization with a few Newton-Raphson steps
/// and returns y at the solved parameter. The endpoints come back exact
/// without iterating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    p1x: f64,
    p1y: f64,
    p2x: f64,
    p2y: f64,
}

impl CubicBezier {
    pub const fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        Self { p1x, p1y, p2x, p2y }
    }

    /// The viewport focus curve: quick start, long settle.
    pub const fn focus_default() -> Self {
        Self::new(0.4, 0.0, 0.2, 1.0)
    }

    pub fn eval(&self, x: f64) -> f64 {
        if x == 0.0 || x == 1.0 {
            return x;
        }
        self.sample_y(self.solve_t_for_x(x))
    }

    // Polynomial coefficients for one axis: curve(t) = ((a*t + b)*t + c)*t.
    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample_x(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.p1x, self.p2x);
        ((a * t + b) * t + c) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.p1y, self.p2y);
        ((a * t + b) * t + c) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(self.p1x, self.p2x);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    fn solve_t_for_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let dx = self.sample_dx(t);
            if dx.abs() < DERIVATIVE_EPSILON {
                break;
            }
            t -= (self.sample_x(t) - x) / dx;
        }
        t
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::focus_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let ease = CubicBezier::focus_default();
        assert_eq!(ease.eval(0.0), 0.0);
        assert_eq!(ease.eval(1.0), 1.0);
    }

    #[test]
    fn curve_is_monotone_non_decreasing() {
        let ease = CubicBezier::focus_default();
        let mut prev = 0.0;
        for step in 0..=1000 {
            let x = f64::from(step) / 1000.0;
            let y = ease.eval(x);
            assert!(
                y + 1e-7 >= prev,
                "eased value regressed at x={x}: {y} < {prev}"
            );
            prev = y;
        }
    }

    #[test]
    fn interior_values_stay_in_range() {
        let ease = CubicBezier::focus_default();
        for step in 1..100 {
            let y = ease.eval(f64::from(step) / 100.0);
            assert!((0.0..=1.0).contains(&y), "eased value out of range: {y}");
        }
    }

    #[test]
    fn linear_control_points_give_identity() {
        let ease = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for step in 0..=20 {
            let x = f64::from(step) / 20.0;
            assert!((ease.eval(x) - x).abs() < 1e-6);
        }
    }

    #[test]
    fn front_loaded_curve_leads_linear_by_midpoint() {
        // with P1=(0.4, 0) and P2=(0.2, 1) the curve crosses above the
        // diagonal before x=0.5
        let ease = CubicBezier::focus_default();
        assert!(ease.eval(0.5) > 0.5);
    }
}
