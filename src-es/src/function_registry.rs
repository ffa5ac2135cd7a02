//! Benchmark lookup by name, for drivers that configure runs from strings.

use ndarray::Array1;

use crate::EsError;

/// A registered benchmark objective.
pub type Objective = fn(&Array1<f64>) -> f64;

/// Look up a benchmark objective by name.
///
/// Unknown names are a configuration error, raised before any run starts.
pub fn lookup_function(name: &str) -> Result<Objective, EsError> {
    use evostrat_testfunctions as tf;
    let f: Objective = match name {
        "sphere" => tf::sphere,
        "quadratic" => tf::quadratic,
        "rosenbrock" => tf::rosenbrock,
        "zakharov" => tf::zakharov,
        "sum_of_powers" => tf::sum_of_powers,
        "ackley" => tf::ackley,
        "rastrigin" => tf::rastrigin,
        "griewank" => tf::griewank,
        "schwefel" => tf::schwefel,
        "step" => tf::step,
        "salomon" => tf::salomon,
        "levy_n13" => tf::levy_n13,
        "styblinski_tang" => tf::styblinski_tang,
        _ => return Err(EsError::UnknownFunction(name.to_string())),
    };
    Ok(f)
}

/// Canonical bounds for a registered benchmark, replicated over `dim`
/// coordinates. Falls back to [-100, 100] when the metadata has no entry.
pub fn default_bounds(name: &str, dim: usize) -> Vec<(f64, f64)> {
    evostrat_testfunctions::get_function_bounds_vec(name, dim, (-100.0, 100.0))
}
