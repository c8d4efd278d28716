use std::fmt;

use rootscan_quadratic::{Convergence, Error, Quadratic};

/// Text shown for a finished root scan.
pub struct RootsReport<'a> {
    quadratic: &'a Quadratic,
    roots: &'a [f64],
}

impl<'a> RootsReport<'a> {
    pub fn new(quadratic: &'a Quadratic, roots: &'a [f64]) -> Self {
        Self { quadratic, roots }
    }
}

impl fmt::Display for RootsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let discriminant = self.quadratic.discriminant();
        write_header(f, self.quadratic)?;

        if discriminant < 0.0 {
            writeln!(f, "No real roots (complex roots only).")?;
            writeln!(f, "Only real roots are searched for.")?;
        } else {
            writeln!(f, "Searching for real roots using Newton-Raphson...")?;
        }

        if self.roots.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "No real root found via Newton-Raphson \
                 (may be due to poor convergence or only complex roots)."
            )?;
            if discriminant >= 0.0 {
                writeln!(
                    f,
                    "Hint: the quadratic formula gives guaranteed real roots when Δ ≥ 0."
                )?;
            }
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Found {} real root(s):", self.roots.len())?;
        for (i, &root) in self.roots.iter().enumerate() {
            write_root(f, &format!("Root {}", i + 1), root, self.quadratic)?;
        }
        Ok(())
    }
}

/// Text shown for a single Newton-Raphson run.
pub struct NewtonReport<'a> {
    quadratic: &'a Quadratic,
    x0: f64,
    result: &'a Convergence,
}

impl<'a> NewtonReport<'a> {
    pub fn new(quadratic: &'a Quadratic, x0: f64, result: &'a Convergence) -> Self {
        Self {
            quadratic,
            x0,
            result,
        }
    }
}

impl fmt::Display for NewtonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, self.quadratic)?;
        writeln!(f, "Starting point: x0 = {}", self.x0)?;
        writeln!(f)?;

        let Convergence {
            root,
            iters,
            converged,
        } = *self.result;
        if converged {
            writeln!(f, "Converged after {iters} iteration(s):")?;
            write_root(f, "Root", root, self.quadratic)
        } else {
            writeln!(f, "Did not converge after {iters} iteration(s).")?;
            write_root(f, "Last estimate", root, self.quadratic)
        }
    }
}

/// Rewords an input error as a correction prompt.
pub fn input_prompt(err: &Error) -> String {
    match err {
        Error::InvalidCoefficient {
            name: "a", value, ..
        } if *value == 0.0 => {
            "Coefficient 'a' cannot be zero for a quadratic equation.".to_string()
        }
        Error::InvalidCoefficient { name, .. } => {
            format!("Coefficient '{name}' must be a finite number.")
        }
        other => format!("{other}."),
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, quadratic: &Quadratic) -> fmt::Result {
    writeln!(f, "Equation: {quadratic}")?;
    writeln!(f, "Discriminant (Δ) = {:.6}", quadratic.discriminant())?;
    writeln!(f)
}

fn write_root(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    root: f64,
    quadratic: &Quadratic,
) -> fmt::Result {
    writeln!(
        f,
        "  {label}: x = {root:.8}  (f(x) = {:.2e})",
        quadratic.residual(root)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootscan_quadratic::{DEFAULT_MAX_ITER, DEFAULT_TOL, find_roots, newton_raphson};

    fn quadratic(a: f64, b: f64, c: f64) -> Quadratic {
        Quadratic::new(a, b, c).expect("valid coefficients")
    }

    #[test]
    fn lists_found_roots_with_residuals() {
        let q = quadratic(1.0, 0.0, -4.0);
        let roots = find_roots(1.0, 0.0, -4.0, DEFAULT_TOL).expect("valid inputs");

        let text = RootsReport::new(&q, &roots).to_string();

        assert!(text.starts_with("Equation: 1x² + (0)x + (-4) = 0\n"));
        assert!(text.contains("Discriminant (Δ) = 16.000000"));
        assert!(text.contains("Found 2 real root(s):"));
        assert!(text.contains("  Root 1: x = -2.00000000  (f(x) = 0.00e0)"));
        assert!(text.contains("  Root 2: x = 2.00000000  (f(x) = 0.00e0)"));
    }

    #[test]
    fn explains_missing_complex_roots() {
        let q = quadratic(1.0, 0.0, 4.0);

        let text = RootsReport::new(&q, &[]).to_string();

        assert!(text.contains("No real roots (complex roots only)."));
        assert!(text.contains("No real root found via Newton-Raphson"));
        assert!(!text.contains("Hint"));
    }

    #[test]
    fn hints_at_formula_when_real_roots_were_missed() {
        let q = quadratic(1.0, 0.0, -4.0);

        let text = RootsReport::new(&q, &[]).to_string();

        assert!(text.contains("Searching for real roots"));
        assert!(text.contains("Hint: the quadratic formula"));
    }

    #[test]
    fn reports_single_newton_run() {
        let q = quadratic(1.0, 0.0, 1.0);
        let result =
            newton_raphson(1.0, 0.0, 1.0, 0.0, DEFAULT_TOL, DEFAULT_MAX_ITER).expect("valid");

        let text = NewtonReport::new(&q, 0.0, &result).to_string();

        assert!(text.contains("Starting point: x0 = 0"));
        assert!(text.contains("Did not converge after 1 iteration(s)."));
        assert!(text.contains("  Last estimate: x = 0.00000000  (f(x) = 1.00e0)"));
    }

    #[test]
    fn prompts_for_non_zero_a() {
        let err = Quadratic::new(0.0, 1.0, 1.0).expect_err("a = 0");
        assert_eq!(
            input_prompt(&err),
            "Coefficient 'a' cannot be zero for a quadratic equation."
        );

        let err = Quadratic::new(1.0, f64::NAN, 1.0).expect_err("NaN b");
        assert_eq!(input_prompt(&err), "Coefficient 'b' must be a finite number.");
    }
}
