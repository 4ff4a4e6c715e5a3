//! Derivative-free minimization used for parameter estimation

use std::cmp::Ordering;

/// Settings of the Nelder-Mead simplex search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NelderMeadConfig {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Stop once the spread of objective values across the simplex falls below this
    pub tolerance: f64,
    /// Reflection coefficient
    pub alpha: f64,
    /// Expansion coefficient
    pub gamma: f64,
    /// Contraction coefficient
    pub rho: f64,
    /// Shrink coefficient
    pub sigma: f64,
    /// Offset of the initial simplex vertices from the starting point
    pub initial_step: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iter: 2000,
            tolerance: 1e-10,
            alpha: 1.0,
            gamma: 2.0,
            rho: 0.5,
            sigma: 0.5,
            initial_step: 0.1,
        }
    }
}

/// Outcome of a minimization
#[derive(Debug, Clone, PartialEq)]
pub struct Minimum {
    pub point: Vec<f64>,
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Minimize `objective` starting from `initial`.
///
/// Every candidate point is clamped into `bounds` (one `(min, max)` pair per
/// dimension) before evaluation. Deterministic: the same objective and
/// starting point always yield the same result. An empty starting point
/// evaluates the objective once.
pub fn nelder_mead<F>(
    objective: F,
    initial: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: &NelderMeadConfig,
) -> Minimum
where
    F: Fn(&[f64]) -> f64,
{
    let n = initial.len();
    if n == 0 {
        return Minimum {
            point: Vec::new(),
            value: objective(initial),
            iterations: 0,
            converged: true,
        };
    }

    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(n + 1);
    simplex.push(clamp(initial.to_vec(), bounds));
    for i in 0..n {
        let mut vertex = initial.to_vec();
        vertex[i] += if initial[i].abs() > 1e-8 {
            config.initial_step * initial[i].abs()
        } else {
            config.initial_step
        };
        simplex.push(clamp(vertex, bounds));
    }
    let mut values: Vec<f64> = simplex.iter().map(|v| sanitize(objective(v))).collect();

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        iterations += 1;

        let mut order: Vec<usize> = (0..=n).collect();
        order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));
        let (best, second_worst, worst) = (order[0], order[n - 1], order[n]);

        if values[worst] - values[best] < config.tolerance {
            converged = true;
            break;
        }

        let centroid = centroid_without(&simplex, worst);

        let reflected = clamp(blend(&centroid, &simplex[worst], -config.alpha), bounds);
        let reflected_value = sanitize(objective(&reflected));

        if reflected_value < values[best] {
            let expanded = clamp(blend(&centroid, &reflected, config.gamma), bounds);
            let expanded_value = sanitize(objective(&expanded));
            if expanded_value < reflected_value {
                simplex[worst] = expanded;
                values[worst] = expanded_value;
            } else {
                simplex[worst] = reflected;
                values[worst] = reflected_value;
            }
            continue;
        }

        if reflected_value < values[second_worst] {
            simplex[worst] = reflected;
            values[worst] = reflected_value;
            continue;
        }

        let (contracted, contracted_value) = if reflected_value < values[worst] {
            let outside = clamp(blend(&centroid, &reflected, config.rho), bounds);
            let value = sanitize(objective(&outside));
            (outside, value)
        } else {
            let inside = clamp(blend(&centroid, &simplex[worst], config.rho), bounds);
            let value = sanitize(objective(&inside));
            (inside, value)
        };

        if contracted_value < values[worst].min(reflected_value) {
            simplex[worst] = contracted;
            values[worst] = contracted_value;
            continue;
        }

        let anchor = simplex[best].clone();
        for i in (0..=n).filter(|&i| i != best) {
            simplex[i] = clamp(blend(&anchor, &simplex[i], config.sigma), bounds);
            values[i] = sanitize(objective(&simplex[i]));
        }
    }

    let best = (0..=n)
        .min_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal))
        .unwrap_or(0);

    Minimum {
        point: simplex.swap_remove(best),
        value: values[best],
        iterations,
        converged,
    }
}

/// NaN objective values rank worst
fn sanitize(value: f64) -> f64 {
    if value.is_nan() {
        f64::INFINITY
    } else {
        value
    }
}

fn centroid_without(simplex: &[Vec<f64>], exclude: usize) -> Vec<f64> {
    let dim = simplex[0].len();
    let count = (simplex.len() - 1) as f64;
    let mut centroid = vec![0.0; dim];

    for vertex in simplex
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != exclude)
        .map(|(_, v)| v)
    {
        for (c, x) in centroid.iter_mut().zip(vertex) {
            *c += x;
        }
    }
    centroid.iter_mut().for_each(|c| *c /= count);
    centroid
}

fn clamp(mut point: Vec<f64>, bounds: Option<&[(f64, f64)]>) -> Vec<f64> {
    if let Some(bounds) = bounds {
        for (x, (lo, hi)) in point.iter_mut().zip(bounds) {
            *x = x.clamp(*lo, *hi);
        }
    }
    point
}

/// `origin + t * (point - origin)`
fn blend(origin: &[f64], point: &[f64], t: f64) -> Vec<f64> {
    origin
        .iter()
        .zip(point)
        .map(|(o, p)| o + t * (p - o))
        .collect()
}
