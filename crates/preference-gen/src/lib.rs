pub mod catalogue;
pub mod config;
pub mod distribution;
pub mod error;
pub mod population;
pub mod sampler;
pub mod student;
pub mod tables;

pub mod prelude {
    pub use super::catalogue::{City, Service, ServiceCatalogue, Speciality};
    pub use super::config::{AttractivityWeights, SimulationConfig, SimulationConfigBuilder};
    pub use super::distribution::CumulativeDistribution;
    pub use super::population::{ParallelPopulationGenerator, PopulationMetrics};
    pub use super::sampler::WeightedSampler;
    pub use super::student::StudentRequestGenerator;
    pub use preference_common::prelude::*;
}
