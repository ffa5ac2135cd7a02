//! Optimization test functions library
//!
//! This library provides the benchmark functions used to validate the
//! evostrat optimizers. Functions are organized by category:
//!
//! - **Unimodal**: Single global optimum functions (sphere, rosenbrock, etc.)
//! - **Multimodal**: Multiple local minima functions (ackley, rastrigin, etc.)
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use evostrat_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! let result = sphere(&x);
//! assert_eq!(result, 0.0);
//!
//! // Get function metadata
//! let bounds = get_function_bounds("sphere");
//! assert!(bounds.is_some());
//! ```

use ndarray::{Array1, Array2};
use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Metadata for a test function including bounds and known optima
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Canonical per-coordinate bounds (min, max)
    pub bounds: (f64, f64),
    /// Global minimum value (for the canonical domain)
    pub global_minimum: f64,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

fn meta(
    name: &str,
    bounds: (f64, f64),
    global_minimum: f64,
    description: &str,
    multimodal: bool,
) -> FunctionMetadata {
    FunctionMetadata {
        name: name.to_string(),
        bounds,
        global_minimum,
        description: description.to_string(),
        multimodal,
    }
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    for m in [
        meta("sphere", (-5.12, 5.12), 0.0, "N-dimensional quadratic bowl", false),
        meta("quadratic", (-10.0, 10.0), 0.0, "Weighted paraboloid", false),
        meta("rosenbrock", (-2.048, 2.048), 0.0, "N-dimensional banana function", false),
        meta("zakharov", (-5.0, 10.0), 0.0, "Plate-shaped unimodal function", false),
        meta("sum_of_powers", (-1.0, 1.0), 0.0, "Flat-bottomed unimodal function", false),
        meta("ackley", (-32.768, 32.768), 0.0, "N-dimensional multimodal function", true),
        meta("rastrigin", (-5.12, 5.12), 0.0, "Highly multimodal function", true),
        meta("griewank", (-600.0, 600.0), 0.0, "Multimodal with product term", true),
        meta("schwefel", (-500.0, 500.0), 0.0, "Deceptive multimodal function", true),
        meta("step", (-100.0, 100.0), 0.0, "Discontinuous step function", true),
        meta("salomon", (-100.0, 100.0), 0.0, "Ring-shaped multimodal function", true),
        meta("levy_n13", (-10.0, 10.0), 0.0, "2D multimodal function", true),
        meta(
            "styblinski_tang",
            (-5.0, 5.0),
            -39.16617,
            "Multimodal, minimum scales with dimension",
            true,
        ),
    ] {
        metadata.insert(m.name.clone(), m);
    }

    metadata
}

/// Helper function to get per-coordinate bounds for a function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<(f64, f64)> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|m| m.bounds)
}

/// Helper function to get bounds as a Vec of (lower, upper) pairs
/// Returns default bounds if function is not found
pub fn get_function_bounds_vec(
    function_name: &str,
    dim: usize,
    default_bounds: (f64, f64),
) -> Vec<(f64, f64)> {
    let b = get_function_bounds(function_name).unwrap_or(default_bounds);
    vec![b; dim]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn test_known_minima() {
        let zero2 = Array1::from_vec(vec![0.0, 0.0]);
        assert_eq!(sphere(&zero2), 0.0);
        assert_eq!(quadratic(&zero2), 0.0);
        assert!(ackley(&zero2).abs() < 1e-12);
        assert_eq!(rastrigin(&zero2), 0.0);
        assert!(griewank(&zero2).abs() < 1e-12);

        let ones2 = Array1::from_vec(vec![1.0, 1.0]);
        assert_eq!(rosenbrock(&ones2), 0.0);
        assert!(levy_n13(&ones2).abs() < 1e-12);

        let half2 = Array1::from_vec(vec![0.5 - 1e-9, 0.5 - 1e-9]);
        assert_eq!(step(&half2), 0.0);

        let schwefel_opt = Array1::from_vec(vec![420.9687, 420.9687]);
        assert!(schwefel(&schwefel_opt).abs() < 1e-3);
    }

    #[test]
    fn test_metadata_covers_all_registered_functions() {
        let metadata = get_function_metadata();
        for name in [
            "sphere",
            "quadratic",
            "rosenbrock",
            "zakharov",
            "sum_of_powers",
            "ackley",
            "rastrigin",
            "griewank",
            "schwefel",
            "step",
            "salomon",
            "levy_n13",
            "styblinski_tang",
        ] {
            assert!(metadata.contains_key(name), "missing metadata for {}", name);
            let m = &metadata[name];
            assert!(m.bounds.0 < m.bounds.1, "degenerate bounds for {}", name);
        }
    }

    #[test]
    fn test_bounds_helpers() {
        let b = get_function_bounds("rastrigin").unwrap();
        assert_eq!(b, (-5.12, 5.12));

        let v = get_function_bounds_vec("rastrigin", 5, (-100.0, 100.0));
        assert_eq!(v.len(), 5);
        assert_eq!(v[3], (-5.12, 5.12));

        let fallback = get_function_bounds_vec("no_such_function", 3, (-100.0, 100.0));
        assert_eq!(fallback, vec![(-100.0, 100.0); 3]);

        let m = create_bounds(4, -2.0, 2.0);
        assert_eq!(m.shape(), &[2, 4]);
        assert_eq!(m[[0, 1]], -2.0);
        assert_eq!(m[[1, 1]], 2.0);
    }
}
