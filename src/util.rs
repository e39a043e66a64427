use float_cmp::{approx_eq, F64Margin};
use ndarray::Array1;
use num::complex::Complex64;

/// Margin for values that went through a reciprocal or a 2π product, where a
/// handful of ulps is too strict.
pub const RELAXED_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-12,
    ulps: 64,
};

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

pub fn comp_c64(
    exemplar: &Complex64,
    calc: &Complex64,
    precision: F64Margin,
    test: &str,
    idx: &str,
) {
    comp_f64(
        &(exemplar.re),
        &(calc.re),
        precision,
        test,
        &(idx.to_owned() + ".re"),
    );
    comp_f64(
        &(exemplar.im),
        &(calc.im),
        precision,
        test,
        &(idx.to_owned() + ".im"),
    );
}

pub fn comp_array_f64(
    exemplar: &Array1<f64>,
    calc: &Array1<f64>,
    precision: F64Margin,
    test: &str,
) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        " Failed test {}: length mismatch",
        test
    );
    for (k, (e, c)) in exemplar.iter().zip(calc.iter()).enumerate() {
        comp_f64(e, c, precision, test, &format!("({})", k));
    }
}

pub fn comp_array_c64(
    exemplar: &Array1<Complex64>,
    calc: &Array1<Complex64>,
    precision: F64Margin,
    test: &str,
) {
    assert_eq!(
        exemplar.len(),
        calc.len(),
        " Failed test {}: length mismatch",
        test
    );
    for (k, (e, c)) in exemplar.iter().zip(calc.iter()).enumerate() {
        comp_c64(e, c, precision, test, &format!("({})", k));
    }
}
