//! # Parallel Population Generation
//!
//! Fans the per-student work out over a dedicated rayon pool and assembles the
//! students in rank order.
//!
//! One slot per student is allocated up front, indexed by rank. Each task fills
//! exactly one slot, so completion order never affects the assembled output and
//! no task ever touches another task's data. The catalogue and its distribution
//! are only read.
//!
//! ## Random source
//!
//! Every task owns its generator:
//! - without a seed, the task uses the thread-local generator of the worker it
//!   runs on (`rand::rng()`), which is seeded from the OS. Runs are not
//!   reproducible.
//! - with a seed, the task uses a `StdRng` keyed on the pair `(seed, rank)`. A
//!   student's list then only depends on the seed and its rank, independent of
//!   the worker count and of scheduling. Distinct pairs give distinct keys, so
//!   neighbouring seeds do not reproduce each other's students.
//!
//! ## Failure
//!
//! The first task error fails the whole run. Tasks that have not started yet are
//! skipped, tasks already running complete and their results are dropped. No
//! partial population is returned.

use crate::config::{ConfigError, SimulationConfig};
use crate::error::{Error, Result};
use crate::sampler::WeightedSampler;
use crate::student::StudentRequestGenerator;
use human_format::Formatter;
use log::{debug, info};
use preference_common::prelude::{AssignmentRequest, Student, StudentBuilder};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Contains performance metrics from a completed generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationMetrics {
    /// The number of students generated.
    pub students: usize,
    /// The total number of assignment requests across all students.
    pub total_requests: usize,
    /// Wall-clock time spent generating, including the final join.
    pub elapsed_time: Duration,
    pub requests_per_sec: f64,
}

pub struct ParallelPopulationGenerator<'a> {
    requests: StudentRequestGenerator<'a>,
    pool: rayon::ThreadPool,
    seed: Option<u64>,
}

impl<'a> ParallelPopulationGenerator<'a> {
    pub const DEFAULT_WORKER_COUNT: usize = 16;

    pub fn new(
        sampler: WeightedSampler<'a>,
        worker_count: usize,
        seed: Option<u64>,
    ) -> Result<Self> {
        if worker_count == 0 {
            return Err(ConfigError::ZeroWorkers.into());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .thread_name(|i| format!("preference-worker-{i}"))
            .build()?;

        Ok(Self {
            requests: StudentRequestGenerator::new(sampler),
            pool,
            seed,
        })
    }

    pub fn from_config(sampler: WeightedSampler<'a>, config: &SimulationConfig) -> Result<Self> {
        Self::new(sampler, config.worker_count(), config.seed())
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Generates students ranked `1..=population`, each with `requests_per_student`
    /// ranked requests.
    pub fn generate(
        &self,
        population: usize,
        requests_per_student: usize,
    ) -> Result<Vec<Student>> {
        if population == 0 {
            return Err(Error::InvalidInput(
                "population must be greater than zero".to_string(),
            ));
        }

        debug!(
            "Generating {population} students x {requests_per_student} requests on {} workers",
            self.worker_count()
        );

        let mut slots: Vec<Vec<AssignmentRequest>> = vec![Vec::new(); population];

        self.pool.install(|| {
            slots
                .par_iter_mut()
                .enumerate()
                .try_for_each(|(index, slot)| -> Result<()> {
                    let student_rank = index + 1;
                    *slot = self
                        .generate_student(student_rank, requests_per_student)
                        .map_err(|source| Error::TaskFailure {
                            student_rank,
                            source: Box::new(source),
                        })?;
                    Ok(())
                })
        })?;

        let students = slots
            .into_iter()
            .enumerate()
            .map(|(index, requests)| {
                StudentBuilder::new(index + 1)
                    .with_requests(requests)
                    .build()
            })
            .collect();

        Ok(students)
    }

    /// Same as [`Self::generate`], and reports how long the run took.
    pub fn generate_with_metrics(
        &self,
        population: usize,
        requests_per_student: usize,
    ) -> Result<(Vec<Student>, PopulationMetrics)> {
        let mut human_formatter = Formatter::new();
        human_formatter.with_decimals(0).with_separator("");

        info!(
            "Generating {} students with {requests_per_student} requests each across {} workers.",
            human_formatter.format(population as f64),
            self.worker_count()
        );

        let start_time = Instant::now();
        let students = self.generate(population, requests_per_student)?;
        let elapsed_time = start_time.elapsed();

        let total_requests = students.iter().map(|s| s.requests().len()).sum::<usize>();
        let requests_per_sec =
            total_requests as f64 / elapsed_time.as_secs_f64().max(f64::EPSILON);

        info!(
            "Finished generating {} requests in {elapsed_time:?}.",
            human_formatter.format(total_requests as f64)
        );
        info!(
            "Request Throughput: {} requests/sec",
            human_formatter.format(requests_per_sec)
        );

        let metrics = PopulationMetrics {
            students: students.len(),
            total_requests,
            elapsed_time,
            requests_per_sec,
        };

        Ok((students, metrics))
    }

    fn generate_student(&self, rank: usize, count: usize) -> Result<Vec<AssignmentRequest>> {
        match self.seed {
            Some(seed) => self.requests.generate_with(&mut student_rng(seed, rank), count),
            None => self.requests.generate_with(&mut rand::rng(), count),
        }
    }
}

/// Generator for one student of a seeded run.
///
/// The seed and the rank fill separate words of the key, so no two
/// `(seed, rank)` pairs share a stream.
fn student_rng(seed: u64, rank: usize) -> StdRng {
    let mut key = <StdRng as SeedableRng>::Seed::default();
    key[..8].copy_from_slice(&seed.to_le_bytes());
    key[8..16].copy_from_slice(&(rank as u64).to_le_bytes());
    StdRng::from_seed(key)
}
