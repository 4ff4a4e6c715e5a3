//! Lag polynomials and parameter transforms
//!
//! Polynomials are coefficient vectors indexed by lag power, constant term first.

/// Map unconstrained reals to coefficients of a stationary AR polynomial.
///
/// Each value is squashed into (-1, 1) and read as a partial
/// autocorrelation; the Durbin-Levinson recursion then yields AR
/// coefficients `phi` whose polynomial `1 - phi_1 z - ... - phi_k z^k`
/// has all roots outside the unit circle.
pub fn constrain_stationary(unconstrained: &[f64]) -> Vec<f64> {
    let mut phi: Vec<f64> = Vec::with_capacity(unconstrained.len());

    for &x in unconstrained {
        let r = x / (1.0 + x * x).sqrt();
        let previous = phi.clone();
        let k = previous.len();
        for j in 0..k {
            phi[j] = previous[j] - r * previous[k - 1 - j];
        }
        phi.push(r);
    }

    phi
}

/// Map unconstrained reals to coefficients of an invertible MA polynomial
/// `1 + theta_1 z + ... + theta_k z^k`.
pub fn constrain_invertible(unconstrained: &[f64]) -> Vec<f64> {
    constrain_stationary(unconstrained)
        .into_iter()
        .map(|c| -c)
        .collect()
}

/// `1 - c_1 z^s - c_2 z^{2s} - ...`
pub fn ar_polynomial(coeffs: &[f64], spacing: usize) -> Vec<f64> {
    spaced_polynomial(coeffs, spacing, -1.0)
}

/// `1 + c_1 z^s + c_2 z^{2s} + ...`
pub fn ma_polynomial(coeffs: &[f64], spacing: usize) -> Vec<f64> {
    spaced_polynomial(coeffs, spacing, 1.0)
}

fn spaced_polynomial(coeffs: &[f64], spacing: usize, sign: f64) -> Vec<f64> {
    let mut poly = vec![0.0; coeffs.len() * spacing + 1];
    poly[0] = 1.0;
    for (i, c) in coeffs.iter().enumerate() {
        poly[(i + 1) * spacing] = sign * c;
    }
    poly
}

/// Product of two polynomials
pub fn multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut product = vec![0.0; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        if *x == 0.0 {
            continue;
        }
        for (j, y) in b.iter().enumerate() {
            product[i + j] += x * y;
        }
    }
    product
}
