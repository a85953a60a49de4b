/// Monotone piecewise cubic Hermite interpolant (Fritsch-Carlson, PCHIP).
///
/// Node slopes are the weighted harmonic mean of the neighbouring secants
/// and are zero at local extrema, so every segment stays monotone and never
/// leaves the range of its two knot values. End slopes use the one-sided
/// three-point formula, limited the same way.
#[derive(Debug, Clone)]
pub struct MonotoneCubic {
    x: Vec<f64>,
    y: Vec<f64>,
    slopes: Vec<f64>,
}

impl MonotoneCubic {
    /// Builds the interpolant. `x` must be strictly increasing with at least
    /// two knots; two knots give a straight line.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, String> {
        if x.len() != y.len() {
            return Err(format!(
                "knot count mismatch: {} x values, {} y values",
                x.len(),
                y.len()
            ));
        }
        if x.len() < 2 {
            return Err(format!("interpolation needs at least 2 knots, got {}", x.len()));
        }
        if x.windows(2).any(|w| w[1] <= w[0]) {
            return Err("knots must be strictly increasing".to_string());
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err("knot values must be finite".to_string());
        }

        let slopes = node_slopes(&x, &y);
        Ok(MonotoneCubic { x, y, slopes })
    }

    pub fn knots(&self) -> (&[f64], &[f64]) {
        (&self.x, &self.y)
    }

    /// Evaluates at `x`. Points beyond the end knots use the end segment
    /// polynomial; range checks belong to the caller.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.x.len();
        let hi = self.x.partition_point(|&v| v < x).clamp(1, n - 1);
        let lo = hi - 1;

        let h = self.x[hi] - self.x[lo];
        let t = (x - self.x[lo]) / h;
        let t2 = t * t;
        let u = 1.0 - t;

        let h00 = (1.0 + 2.0 * t) * u * u;
        let h10 = t * u * u;
        let h01 = t2 * (3.0 - 2.0 * t);
        let h11 = t2 * (t - 1.0);

        h00 * self.y[lo] + h10 * h * self.slopes[lo] + h01 * self.y[hi] + h11 * h * self.slopes[hi]
    }
}

fn node_slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    let secants: Vec<f64> = (0..n - 1).map(|k| (y[k + 1] - y[k]) / h[k]).collect();

    if n == 2 {
        return vec![secants[0], secants[0]];
    }

    let mut slopes = vec![0.0; n];
    for k in 1..n - 1 {
        let (left, right) = (secants[k - 1], secants[k]);
        if left * right > 0.0 {
            let w1 = 2.0 * h[k] + h[k - 1];
            let w2 = h[k] + 2.0 * h[k - 1];
            slopes[k] = (w1 + w2) / (w1 / left + w2 / right);
        }
    }

    slopes[0] = end_slope(h[0], h[1], secants[0], secants[1]);
    slopes[n - 1] = end_slope(h[n - 2], h[n - 3], secants[n - 2], secants[n - 3]);
    slopes
}

/// `h0`/`s0` belong to the end segment, `h1`/`s1` to its neighbour.
fn end_slope(h0: f64, h1: f64, s0: f64, s1: f64) -> f64 {
    let slope = ((2.0 * h0 + h1) * s0 - h0 * s1) / (h0 + h1);
    if slope * s0 <= 0.0 {
        0.0
    } else if s0 * s1 < 0.0 && slope.abs() > 3.0 * s0.abs() {
        3.0 * s0
    } else {
        slope
    }
}
