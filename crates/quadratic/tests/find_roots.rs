use approx::assert_relative_eq;

use rootscan_quadratic::{
    DEFAULT_MAX_ITER, DEFAULT_TOL, Error, Quadratic, UNIQUENESS_TOL, find_roots, newton_raphson,
};

/// Coefficient sets covering two roots, double roots, no roots, wide and
/// narrow scales, and negative leading coefficients.
const CASES: [[f64; 3]; 12] = [
    [1.0, 0.0, -4.0],
    [1.0, 2.0, 1.0],
    [1.0, 0.0, 4.0],
    [1.0, -5.0, 6.0],
    [2.0, -3.0, 1.0],
    [-1.0, 3.0, 10.0],
    [1.0, -0.002, 0.000_001],
    [0.5, 25.0, -300.0],
    [3.0, 0.0, 0.0],
    [1.0, 1.0, 1.0],
    [-2.0, 0.0, 8.0],
    [1.0, -150.0, 5000.0],
];

fn roots_of(coefficients: [f64; 3]) -> Vec<f64> {
    let [a, b, c] = coefficients;
    find_roots(a, b, c, DEFAULT_TOL).expect("coefficients are valid")
}

#[test]
fn two_distinct_roots() {
    let roots = roots_of([1.0, 0.0, -4.0]);

    assert_eq!(roots.len(), 2);
    assert_relative_eq!(roots[0], -2.0);
    assert_relative_eq!(roots[1], 2.0);
}

#[test]
fn double_root_is_reported_once() {
    let roots = roots_of([1.0, 2.0, 1.0]);

    assert_eq!(roots.len(), 1);
    assert_relative_eq!(roots[0], -1.0, epsilon = 1e-6);
}

#[test]
fn negative_discriminant_has_no_roots() {
    assert!(roots_of([1.0, 0.0, 4.0]).is_empty());
    assert!(roots_of([1.0, 1.0, 1.0]).is_empty());
}

#[test]
fn roots_are_genuine() {
    for coefficients in CASES {
        let [a, b, c] = coefficients;
        let quadratic = Quadratic::new(a, b, c).expect("coefficients are valid");

        for root in roots_of(coefficients) {
            let residual = quadratic.residual(root);
            assert!(
                residual.abs() < 1e-4,
                "f({root}) = {residual} for {quadratic}"
            );
        }
    }
}

#[test]
fn roots_are_sorted_and_distinct() {
    for coefficients in CASES {
        let roots = roots_of(coefficients);

        assert!(roots.len() <= 7);
        for pair in roots.windows(2) {
            assert!(pair[0] < pair[1], "unsorted roots {roots:?}");
            assert!(
                pair[1] - pair[0] >= UNIQUENESS_TOL,
                "near-duplicate roots {roots:?}"
            );
        }
    }
}

#[test]
fn repeated_calls_agree() {
    for coefficients in CASES {
        assert_eq!(roots_of(coefficients), roots_of(coefficients));
    }
}

#[test]
fn zero_leading_coefficient_is_rejected() {
    let result = find_roots(0.0, 2.0, -4.0, DEFAULT_TOL);
    assert!(matches!(result, Err(Error::InvalidCoefficient { name: "a", .. })));

    let result = newton_raphson(0.0, 2.0, -4.0, 1.0, DEFAULT_TOL, DEFAULT_MAX_ITER);
    assert!(matches!(result, Err(Error::InvalidCoefficient { name: "a", .. })));
}

#[test]
fn vanishing_derivative_stops_on_first_iteration() {
    let result =
        newton_raphson(1.0, 0.0, 1.0, 0.0, DEFAULT_TOL, DEFAULT_MAX_ITER).expect("valid inputs");

    assert!(!result.converged);
    assert_eq!(result.iters, 1);
    assert_relative_eq!(result.root, 0.0);
}

#[test]
fn both_roots_of_a_scaled_quadratic() {
    // 2x² - 3x + 1 = (2x - 1)(x - 1)
    let roots = roots_of([2.0, -3.0, 1.0]);

    assert_eq!(roots.len(), 2);
    assert_relative_eq!(roots[0], 0.5, epsilon = 1e-8);
    assert_relative_eq!(roots[1], 1.0, epsilon = 1e-8);
}

#[test]
fn rounding_ties_go_to_even() {
    // Roots are -0.71484375 and 0.970703125; the second sits exactly halfway
    // between two 8-digit values.
    let roots = find_roots(-1.0, 0.255_859_375, 0.693_901_062_011_718_8, DEFAULT_TOL)
        .expect("valid coefficients");

    assert_eq!(roots, vec![-0.714_843_75, 0.970_703_12]);
}

#[test]
fn overflowing_start_does_not_converge() {
    let result =
        newton_raphson(1.0, 0.0, -4.0, 1e200, DEFAULT_TOL, DEFAULT_MAX_ITER).expect("valid inputs");

    assert!(!result.converged);
    assert_eq!(result.iters, 1);
}
