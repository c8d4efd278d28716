use std::{convert::Infallible, fmt};

use rootscan_core::Model;

use crate::Error;

/// Coefficients of `a·x² + b·x + c` with `a ≠ 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

/// The value and slope of a quadratic at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub slope: f64,
}

impl Quadratic {
    /// Creates a quadratic from its coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoefficient`] if any coefficient is not finite,
    /// or if `a` is zero (the equation would not be quadratic).
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, Error> {
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() {
                return Err(Error::InvalidCoefficient {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }

        if a == 0.0 {
            return Err(Error::InvalidCoefficient {
                name: "a",
                value: a,
                reason: "must be non-zero for a quadratic",
            });
        }

        Ok(Self { a, b, c })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Evaluates `a·x² + b·x + c`.
    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Evaluates the derivative `2·a·x + b`.
    #[must_use]
    pub fn slope(&self, x: f64) -> f64 {
        2.0 * self.a * x + self.b
    }

    /// Returns `b² − 4ac`.
    ///
    /// Negative means no real roots, zero a double root.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Returns `f(root)`, which is near zero for a genuine root.
    #[must_use]
    pub fn residual(&self, root: f64) -> f64 {
        self.value(root)
    }
}

impl Model for Quadratic {
    type Input = f64;
    type Output = Sample;
    type Error = Infallible;

    fn call(&self, x: &f64) -> Result<Sample, Self::Error> {
        Ok(Sample {
            value: self.value(*x),
            slope: self.slope(*x),
        })
    }
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x² + ({})x + ({}) = 0", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_value_and_slope() {
        let q = Quadratic::new(2.0, -3.0, 1.0).expect("valid coefficients");

        assert_relative_eq!(q.value(2.0), 3.0);
        assert_relative_eq!(q.slope(2.0), 5.0);
        assert_relative_eq!(q.residual(1.0), 0.0);
        assert_relative_eq!(q.discriminant(), 1.0);

        let sample = q.call(&0.5).expect("infallible");
        assert_relative_eq!(sample.value, 0.0);
        assert_relative_eq!(sample.slope, -1.0);
    }

    #[test]
    fn rejects_zero_leading_coefficient() {
        let err = Quadratic::new(0.0, 1.0, 1.0).expect_err("a = 0 is not quadratic");
        assert!(matches!(err, Error::InvalidCoefficient { name: "a", .. }));

        let err = Quadratic::new(-0.0, 1.0, 1.0).expect_err("negative zero is zero");
        assert!(matches!(err, Error::InvalidCoefficient { name: "a", .. }));
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        let err = Quadratic::new(1.0, f64::NAN, 1.0).expect_err("NaN b");
        assert!(matches!(err, Error::InvalidCoefficient { name: "b", .. }));

        let err = Quadratic::new(1.0, 0.0, f64::NEG_INFINITY).expect_err("infinite c");
        assert!(matches!(err, Error::InvalidCoefficient { name: "c", .. }));
    }

    #[test]
    fn displays_as_equation() {
        let q = Quadratic::new(1.0, 0.0, -4.0).expect("valid coefficients");
        assert_eq!(q.to_string(), "1x² + (0)x + (-4) = 0");
    }
}
