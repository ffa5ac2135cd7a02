//! Evolution Strategy (ES) optimizers in pure Rust using ndarray
//!
//! Implements the classic ES family for continuous black-box minimization:
//! - (1+1)-ES: one parent, its mutants compete against it
//! - (mu+1)-ES: steady state, one offspring per iteration
//! - (mu+lambda)-ES: parents and offspring compete in one pool
//! - (mu,lambda)-ES: parents are discarded each generation
//!
//! Supported features:
//! - Box constraints (candidates are clamped back into [lower, upper])
//! - Self-adaptive mutation step size via the 1/5 success rule
//! - Budgets on objective evaluations and iterations, owned by the task
//! - Deterministic runs from a fixed seed
//! - Optional per-iteration callback (may stop early)

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod error;
pub mod function_registry;
pub mod individual;
pub mod task;

pub(crate) mod mutation;
pub(crate) mod select_comma;
pub(crate) mod select_plus;
pub(crate) mod step_size;

pub mod evolution_strategy;
pub mod metadata;
pub mod recorder;
pub mod run_recorded;
pub mod tests;

pub use error::EsError;
pub use evolution_strategy::evolution_strategy;
pub use function_registry::{default_bounds, lookup_function, Objective};
pub use individual::Individual;
pub use recorder::{OptimizationRecord, OptimizationRecorder};
pub use run_recorded::run_recorded_evolution_strategy;
pub use task::{BoundedTask, Task};

use mutation::mutate_gaussian;
use select_comma::select_comma;
use select_plus::select_plus;
use step_size::{one_fifth_rho, rescale_population};

pub(crate) fn argmin(v: &[f64]) -> (usize, f64) {
    let mut best_i = 0usize;
    let mut best_v = v[0];
    for (i, &val) in v.iter().enumerate() {
        if val < best_v {
            best_v = val;
            best_i = i;
        }
    }
    (best_i, best_v)
}

/// Evolution strategy variant: how survivors are selected each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One parent; the best of its mutants replaces it only if strictly better.
    OnePlusOne,
    /// Steady state: one offspring per iteration competes against mu parents.
    MuPlusOne,
    /// lambda offspring and mu parents compete in one pool; the mu best survive.
    MuPlusLambda,
    /// Survivors come from the lambda offspring alone; parents are discarded.
    MuCommaLambda,
}

impl FromStr for Strategy {
    type Err = EsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t: String = s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
        match t.as_str() {
            "1+1" | "(1+1)" | "(1+1)-es" | "oneplusone" => Ok(Strategy::OnePlusOne),
            "mu+1" | "(mu+1)" | "(mu+1)-es" | "muplusone" => Ok(Strategy::MuPlusOne),
            "mu+lambda" | "(mu+lambda)" | "(mu+lambda)-es" | "mupluslambda" => {
                Ok(Strategy::MuPlusLambda)
            }
            "mu,lambda" | "(mu,lambda)" | "(mu,lambda)-es" | "mucommalambda" => {
                Ok(Strategy::MuCommaLambda)
            }
            _ => Err(EsError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::OnePlusOne => "(1+1)-ES",
            Strategy::MuPlusOne => "(mu+1)-ES",
            Strategy::MuPlusLambda => "(mu+lambda)-ES",
            Strategy::MuCommaLambda => "(mu,lambda)-ES",
        };
        f.write_str(name)
    }
}

/// Configuration for the evolution strategy engine, fixed per run.
pub struct EsConfig {
    /// Selection variant.
    pub strategy: Strategy,
    /// Parent population size. Defaults to 1 for (1+1) and 40 for (mu+1);
    /// required for (mu+lambda) and (mu,lambda). For (1+1) this is the number
    /// of mutants generated per iteration.
    pub mu: Option<usize>,
    /// Offspring per generation for (mu+lambda)/(mu,lambda). (mu+1) always
    /// uses 1 and (1+1) uses `mu`.
    pub lam: usize,
    /// Step-size adaptation window: the 1/5 rule fires every `k` iterations.
    pub k: usize,
    /// Expansion factor applied when more than 1 in 5 mutations succeed.
    pub c_a: f64,
    /// Contraction factor applied when fewer than 1 in 5 mutations succeed.
    pub c_r: f64,
    /// Random seed for reproducibility (None = nondeterministic).
    pub seed: Option<u64>,
    /// Print best fitness and step size at each iteration.
    pub disp: bool,
    /// Optional per-iteration callback (may stop early).
    pub callback: Option<Box<dyn FnMut(&EsIntermediate) -> CallbackAction>>,
    /// Unrecognized options, kept so callers can pass configuration through
    /// from generic frontends. Logged as ignored, never rejected.
    pub extra: HashMap<String, String>,
}

impl Default for EsConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::OnePlusOne,
            mu: None,
            lam: 45,
            k: 10,
            c_a: 1.1,
            c_r: 0.5,
            seed: None,
            disp: false,
            callback: None,
            extra: HashMap::new(),
        }
    }
}

/// Fluent builder for `EsConfig` for ergonomic configuration.
pub struct EsConfigBuilder {
    cfg: EsConfig,
}

impl EsConfigBuilder {
    pub fn new() -> Self {
        Self { cfg: EsConfig::default() }
    }
    pub fn strategy(mut self, v: Strategy) -> Self {
        self.cfg.strategy = v;
        self
    }
    pub fn mu(mut self, v: usize) -> Self {
        self.cfg.mu = Some(v);
        self
    }
    pub fn lam(mut self, v: usize) -> Self {
        self.cfg.lam = v;
        self
    }
    pub fn k(mut self, v: usize) -> Self {
        self.cfg.k = v;
        self
    }
    pub fn c_a(mut self, v: f64) -> Self {
        self.cfg.c_a = v;
        self
    }
    pub fn c_r(mut self, v: f64) -> Self {
        self.cfg.c_r = v;
        self
    }
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    pub fn disp(mut self, v: bool) -> Self {
        self.cfg.disp = v;
        self
    }
    pub fn callback(mut self, cb: Box<dyn FnMut(&EsIntermediate) -> CallbackAction>) -> Self {
        self.cfg.callback = Some(cb);
        self
    }
    pub fn extra_option(mut self, key: &str, value: &str) -> Self {
        self.cfg.extra.insert(key.to_string(), value.to_string());
        self
    }
    pub fn build(self) -> EsConfig {
        self.cfg
    }
}

impl Default for EsConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Result/Report of an ES optimization run
#[derive(Clone)]
pub struct EsReport {
    /// Best vector found.
    pub x: Array1<f64>,
    /// Fitness of `x`.
    pub fun: f64,
    pub success: bool,
    pub message: String,
    /// Iterations executed.
    pub nit: usize,
    /// Objective evaluations performed.
    pub nfev: usize,
    /// Final population, one row per individual.
    pub population: Array2<f64>,
    pub population_energies: Array1<f64>,
}

impl fmt::Debug for EsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EsReport")
            .field("x", &format!("len={}", self.x.len()))
            .field("fun", &self.fun)
            .field("success", &self.success)
            .field("message", &self.message)
            .field("nit", &self.nit)
            .field("nfev", &self.nfev)
            .field(
                "population",
                &format!("{}x{}", self.population.nrows(), self.population.ncols()),
            )
            .field("population_energies", &format!("len={}", self.population_energies.len()))
            .finish()
    }
}

/// Information passed to callback after each generation
pub struct EsIntermediate {
    /// Best point of the current population.
    pub x: Array1<f64>,
    /// Its fitness.
    pub fun: f64,
    /// Step size of the current best individual.
    pub rho: f64,
    pub iter: usize,
}

/// Action returned by callback
pub enum CallbackAction {
    Continue,
    Stop,
}

/// Validated per-run parameters, resolved from `EsConfig` per variant.
#[derive(Debug, Clone, Copy)]
struct EsParams {
    mu: usize,
    lam: usize,
    k: usize,
    c_a: f64,
    c_r: f64,
}

impl EsConfig {
    fn resolved(&self) -> Result<EsParams, EsError> {
        let mu = match (self.strategy, self.mu) {
            (_, Some(m)) => m,
            (Strategy::OnePlusOne, None) => 1,
            (Strategy::MuPlusOne, None) => 40,
            (Strategy::MuPlusLambda, None) | (Strategy::MuCommaLambda, None) => {
                return Err(EsError::invalid(
                    "mu",
                    format!("required for {}", self.strategy),
                ));
            }
        };
        let lam = match self.strategy {
            Strategy::MuPlusOne => 1,
            _ => self.lam,
        };
        if mu == 0 {
            return Err(EsError::invalid("mu", "must be at least 1"));
        }
        if lam == 0 {
            return Err(EsError::invalid("lam", "must be at least 1"));
        }
        if self.k == 0 {
            return Err(EsError::invalid("k", "adaptation window must be at least 1"));
        }
        if !(self.c_a.is_finite() && self.c_a > 0.0) {
            return Err(EsError::invalid("c_a", format!("must be positive, got {}", self.c_a)));
        }
        if !(self.c_r.is_finite() && self.c_r > 0.0) {
            return Err(EsError::invalid("c_r", format!("must be positive, got {}", self.c_r)));
        }
        Ok(EsParams { mu, lam, k: self.k, c_a: self.c_a, c_r: self.c_r })
    }
}

/// Evolution strategy engine: owns the population and drives the
/// mutation -> repair -> evaluation -> step-size update -> selection loop
/// against an external [`Task`] until its stop condition fires.
pub struct EvolutionStrategy<T: Task> {
    task: T,
    config: EsConfig,
}

impl<T: Task> EvolutionStrategy<T> {
    /// Create a new engine around a task. Configuration starts at defaults.
    pub fn new(task: T) -> Self {
        Self { task, config: EsConfig::default() }
    }

    /// Mutable access to configuration
    pub fn config_mut(&mut self) -> &mut EsConfig {
        &mut self.config
    }

    /// Read access to the task (iteration/evaluation counters).
    pub fn task(&self) -> &T {
        &self.task
    }

    /// Run the optimization and return a report.
    ///
    /// Fails eagerly on malformed configuration; an evaluation error aborts
    /// the run with no partial result.
    pub fn solve(&mut self) -> Result<EsReport, EsError> {
        let params = self.config.resolved()?;

        for (key, value) in &self.config.extra {
            eprintln!("ES: ignoring unused option {}={}", key, value);
        }

        let mut rng: StdRng = match self.config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };

        if self.config.disp {
            eprintln!(
                "ES Init: {} dimensions, strategy={}, mu={}, lambda={}, k={}, c_a={:.3}, c_r={:.3}",
                self.task.dim(),
                self.config.strategy,
                params.mu,
                params.lam,
                params.k,
                params.c_a,
                params.c_r
            );
        }

        match self.config.strategy {
            Strategy::OnePlusOne => self.solve_one_plus_one(&params, &mut rng),
            _ => self.solve_population(&params, &mut rng),
        }
    }

    /// (1+1)-ES loop: a single parent, `mu` mutants per iteration, the best
    /// mutant replaces the parent only if strictly better. Success counting
    /// is per improvement.
    fn solve_one_plus_one(
        &mut self,
        p: &EsParams,
        rng: &mut StdRng,
    ) -> Result<EsReport, EsError> {
        let mut c = Individual::random(&mut self.task, rng)?;
        let mut ki = 0usize;
        let mut nit = 0usize;
        let mut message = String::new();

        while !self.task.stop_cond_iter() {
            nit = self.task.iters();

            if nit % p.k == 0 {
                c = c.with_rho(one_fifth_rho(c.rho(), ki, p.k, p.c_a, p.c_r));
                ki = 0;
            }

            let mut best: Option<(Array1<f64>, f64)> = None;
            for _ in 0..p.mu {
                let xm = self.task.repair(mutate_gaussian(c.x(), c.rho(), rng));
                let fm = self.task.evaluate(&xm)?;
                if best.as_ref().is_none_or(|(_, bf)| fm < *bf) {
                    best = Some((xm, fm));
                }
            }
            if let Some((bx, bf)) = best {
                if bf < c.f() {
                    c = Individual::from_parts(bx, bf, c.rho());
                    ki += 1;
                }
            }

            if self.config.disp {
                eprintln!(
                    "ES iter {:4}  best_f={:.6e}  rho={:.3e}  ki={}",
                    nit,
                    c.f(),
                    c.rho(),
                    ki
                );
            }
            if let Some(cb) = self.config.callback.as_mut() {
                let intermediate =
                    EsIntermediate { x: c.x().clone(), fun: c.f(), rho: c.rho(), iter: nit };
                if matches!(cb(&intermediate), CallbackAction::Stop) {
                    message = "Optimization stopped by callback".to_string();
                    break;
                }
            }
        }

        if message.is_empty() {
            message = format!(
                "Budget exhausted after {} iterations and {} evaluations",
                nit,
                self.task.evals()
            );
        }
        if self.config.disp {
            eprintln!("ES finished: {}", message);
        }

        Ok(self.finish_report(vec![c], message, nit))
    }

    /// Shared loop for the population variants. (mu+1) and (mu+lambda) use
    /// plus-selection with provenance-based success counting and the
    /// population-wide 1/5 rule; (mu,lambda) uses comma-selection and no
    /// step-size adaptation (parents are discarded every generation, so no
    /// success window exists).
    fn solve_population(&mut self, p: &EsParams, rng: &mut StdRng) -> Result<EsReport, EsError> {
        let comma = self.config.strategy == Strategy::MuCommaLambda;

        let mut pop = Vec::with_capacity(p.mu);
        for _ in 0..p.mu {
            pop.push(Individual::random(&mut self.task, rng)?);
        }
        let mut ki = 0usize;
        let mut nit = 0usize;
        let mut message = String::new();

        while !self.task.stop_cond_iter() {
            nit = self.task.iters();

            if !comma && nit % p.k == 0 {
                pop = rescale_population(pop, ki, p.k, p.c_a, p.c_r);
                ki = 0;
            }

            let mut offspring = Vec::with_capacity(p.lam);
            for _ in 0..p.lam {
                let parent = &pop[rng.random_range(0..p.mu)];
                let xm = self.task.repair(mutate_gaussian(parent.x(), parent.rho(), rng));
                offspring.push(Individual::evaluated(xm, &mut self.task)?);
            }

            pop = if comma {
                select_comma(offspring, p.mu, p.lam)
            } else {
                let (next, newcomers) = select_plus(pop, offspring, p.mu);
                ki += newcomers;
                next
            };

            // both selections place the best individual first
            let best = &pop[0];
            if self.config.disp {
                eprintln!(
                    "ES iter {:4}  best_f={:.6e}  rho={:.3e}  ki={}",
                    nit,
                    best.f(),
                    best.rho(),
                    ki
                );
            }
            if let Some(cb) = self.config.callback.as_mut() {
                let intermediate =
                    EsIntermediate { x: best.x().clone(), fun: best.f(), rho: best.rho(), iter: nit };
                if matches!(cb(&intermediate), CallbackAction::Stop) {
                    message = "Optimization stopped by callback".to_string();
                    break;
                }
            }
        }

        if message.is_empty() {
            message = format!(
                "Budget exhausted after {} iterations and {} evaluations",
                nit,
                self.task.evals()
            );
        }
        if self.config.disp {
            eprintln!("ES finished: {}", message);
        }

        Ok(self.finish_report(pop, message, nit))
    }

    fn finish_report(&self, pop: Vec<Individual>, message: String, nit: usize) -> EsReport {
        let energies: Vec<f64> = pop.iter().map(|ind| ind.f()).collect();
        let (best_idx, best_f) = argmin(&energies);

        let dim = self.task.dim();
        let mut population = Array2::<f64>::zeros((pop.len(), dim));
        for (i, ind) in pop.iter().enumerate() {
            population.row_mut(i).assign(ind.x());
        }

        EsReport {
            x: pop[best_idx].x().clone(),
            fun: best_f,
            success: true,
            message,
            nit,
            nfev: self.task.evals(),
            population,
            population_energies: Array1::from(energies),
        }
    }
}
