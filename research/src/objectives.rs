use std::f64::consts::PI;

pub type ObjectiveFn = fn(&[f64]) -> f64;

// Shifted sphere with its minimum at (0.5, ..., 0.5)
pub fn offset_sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| (xi - 0.5).powi(2)).sum()
}

pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

pub fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

// Objectives must be "registered" here in order to be used from a run config
pub fn lookup(name: &str) -> Option<ObjectiveFn> {
    match name {
        "offset_sphere" => Some(offset_sphere),
        "sphere" => Some(sphere),
        "rosenbrock" => Some(rosenbrock),
        "rastrigin" => Some(rastrigin),
        _ => None,
    }
}
