use paramfit_core::{DifferentiableFunction, Function, FunctionError, ParametricFunction, Vector};
use paramfit_solvers::linear::tridiagonal;

use crate::knots::{abscissa, check_within, segment, split_interleaved};

/// The family of natural cubic splines through free knots.
///
/// Parameters are interleaved knots `(x₀, y₀, x₁, y₁, …)` with strictly
/// increasing abscissas. The spline interpolates every knot, is twice
/// continuously differentiable, and has zero curvature at both ends. It is
/// defined on `[x₀, xₙ]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalCubicSpline;

/// A natural cubic spline bound by [`NaturalCubicSpline`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundNaturalCubicSpline {
    xs: Vec<f64>,
    cubics: Vec<Cubic>,
}

/// `a + b t + c t² + d t³` with `t = x - xᵢ`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cubic {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Cubic {
    fn value(&self, t: f64) -> f64 {
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    fn slope(&self, t: f64) -> f64 {
        self.b + t * (2.0 * self.c + t * 3.0 * self.d)
    }
}

impl ParametricFunction for NaturalCubicSpline {
    type Bound = BoundNaturalCubicSpline;

    fn bind(&self, parameters: &Vector) -> Result<BoundNaturalCubicSpline, FunctionError> {
        let (xs, ys) = split_interleaved(parameters)?;
        let curvature = second_derivatives(&xs, &ys)?;

        let cubics = (0..xs.len() - 1)
            .map(|i| {
                let h = xs[i + 1] - xs[i];
                let (m0, m1) = (curvature[i], curvature[i + 1]);
                Cubic {
                    a: ys[i],
                    b: (ys[i + 1] - ys[i]) / h - h * (2.0 * m0 + m1) / 6.0,
                    c: m0 / 2.0,
                    d: (m1 - m0) / (6.0 * h),
                }
            })
            .collect();

        Ok(BoundNaturalCubicSpline { xs, cubics })
    }
}

/// Solves for the second derivative at every knot.
///
/// The end values are zero; the interior ones satisfy
/// `hᵢ₋₁ Mᵢ₋₁ + 2 (hᵢ₋₁ + hᵢ) Mᵢ + hᵢ Mᵢ₊₁ = 6 (sᵢ - sᵢ₋₁)`, where `sᵢ` is
/// the slope of segment `i`.
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>, FunctionError> {
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let slopes: Vec<f64> = (0..h.len()).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    let interior = 1..xs.len() - 1;
    let sub: Vec<f64> = interior.clone().map(|i| h[i - 1]).collect();
    let diag: Vec<f64> = interior.clone().map(|i| 2.0 * (h[i - 1] + h[i])).collect();
    let sup: Vec<f64> = interior.clone().map(|i| h[i]).collect();
    let rhs: Vec<f64> = interior.map(|i| 6.0 * (slopes[i] - slopes[i - 1])).collect();

    let inner =
        tridiagonal::solve(&sub, &diag, &sup, &rhs).map_err(FunctionError::construction)?;

    let mut curvature = Vec::with_capacity(xs.len());
    curvature.push(0.0);
    curvature.extend(inner);
    curvature.push(0.0);
    Ok(curvature)
}

impl BoundNaturalCubicSpline {
    fn locate(&self, point: &Vector) -> Result<(&Cubic, f64), FunctionError> {
        let x = abscissa(point)?;
        check_within(&self.xs, x)?;

        let i = segment(&self.xs, x);
        Ok((&self.cubics[i], x - self.xs[i]))
    }
}

impl Function for BoundNaturalCubicSpline {
    fn value(&self, point: &Vector) -> Result<f64, FunctionError> {
        let (cubic, t) = self.locate(point)?;
        Ok(cubic.value(t))
    }
}

impl DifferentiableFunction for BoundNaturalCubicSpline {
    fn gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        let (cubic, t) = self.locate(point)?;
        Ok(Vector::from([cubic.slope(t)]))
    }
}
