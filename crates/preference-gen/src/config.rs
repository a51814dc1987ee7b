use thiserror::Error;

/// Relative importance of the speciality and the city when scoring a service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttractivityWeights {
    pub spec_importance: f64,
    pub city_importance: f64,
}

impl AttractivityWeights {
    pub const DEFAULT_SPEC_IMPORTANCE: f64 = 3.0;
    pub const DEFAULT_CITY_IMPORTANCE: f64 = 2.0;
}

impl Default for AttractivityWeights {
    fn default() -> Self {
        Self {
            spec_importance: Self::DEFAULT_SPEC_IMPORTANCE,
            city_importance: Self::DEFAULT_CITY_IMPORTANCE,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Worker count must be greater than zero.")]
    ZeroWorkers,

    #[error("{name} must be a finite, non-negative number. Got: {value}.")]
    InvalidImportance { name: &'static str, value: f64 },
}

/// Parameters of one simulation run.
///
/// Multiple configurations can be used side by side, nothing here is global.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    weights: AttractivityWeights,
    population: usize,
    requests_per_student: usize,
    worker_count: usize,
    seed: Option<u64>,
}

impl SimulationConfig {
    pub fn weights(&self) -> AttractivityWeights {
        self.weights
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn requests_per_student(&self) -> usize {
        self.requests_per_student
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// When set, every student draws from its own generator seeded from this value
    /// and its rank.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            weights: AttractivityWeights::default(),
            population: SimulationConfigBuilder::DEFAULT_POPULATION,
            requests_per_student: SimulationConfigBuilder::DEFAULT_REQUESTS_PER_STUDENT,
            worker_count: SimulationConfigBuilder::DEFAULT_WORKER_COUNT,
            seed: None,
        }
    }
}

#[derive(Debug, Default)]
#[must_use]
pub struct SimulationConfigBuilder {
    spec_importance: Option<f64>,
    city_importance: Option<f64>,
    population: Option<usize>,
    requests_per_student: Option<usize>,
    worker_count: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    pub const DEFAULT_POPULATION: usize = 9165;
    pub const DEFAULT_REQUESTS_PER_STUDENT: usize = 30;
    pub const DEFAULT_WORKER_COUNT: usize = 16;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spec_importance(mut self, spec_importance: f64) -> Self {
        self.spec_importance = Some(spec_importance);
        self
    }

    pub fn with_city_importance(mut self, city_importance: f64) -> Self {
        self.city_importance = Some(city_importance);
        self
    }

    pub fn with_population(mut self, population: usize) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_requests_per_student(mut self, requests_per_student: usize) -> Self {
        self.requests_per_student = Some(requests_per_student);
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = Some(worker_count);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn try_build(self) -> Result<SimulationConfig, ConfigError> {
        let spec_importance = self
            .spec_importance
            .unwrap_or(AttractivityWeights::DEFAULT_SPEC_IMPORTANCE);
        let city_importance = self
            .city_importance
            .unwrap_or(AttractivityWeights::DEFAULT_CITY_IMPORTANCE);

        for (name, value) in [
            ("Speciality importance", spec_importance),
            ("City importance", city_importance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidImportance { name, value });
            }
        }

        let worker_count = self.worker_count.unwrap_or(Self::DEFAULT_WORKER_COUNT);
        if worker_count == 0 {
            return Err(ConfigError::ZeroWorkers);
        }

        Ok(SimulationConfig {
            weights: AttractivityWeights {
                spec_importance,
                city_importance,
            },
            population: self.population.unwrap_or(Self::DEFAULT_POPULATION),
            requests_per_student: self
                .requests_per_student
                .unwrap_or(Self::DEFAULT_REQUESTS_PER_STUDENT),
            worker_count,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfigBuilder::new().try_build().unwrap();

        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.weights().spec_importance, 3.0);
        assert_eq!(config.weights().city_importance, 2.0);
        assert_eq!(config.population(), 9165);
        assert_eq!(config.requests_per_student(), 30);
        assert_eq!(config.worker_count(), 16);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_zero_workers() {
        let result = SimulationConfigBuilder::new().with_worker_count(0).try_build();

        assert_eq!(result, Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn test_invalid_importance() {
        let error = SimulationConfigBuilder::new()
            .with_city_importance(-1.0)
            .try_build()
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "City importance must be a finite, non-negative number. Got: -1."
        );

        let error = SimulationConfigBuilder::new()
            .with_spec_importance(f64::NAN)
            .try_build()
            .unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidImportance {
                name: "Speciality importance",
                ..
            }
        ));
    }
}
