use crate::catalogue::{Service, ServiceCatalogue};
use crate::distribution::CumulativeDistribution;
use crate::error::{Error, Result};
use rand::Rng;
use rand::distr::Distribution;

/// Inverse-CDF sampling over a service catalogue.
///
/// A draw `u` in `[0, 1)` selects the first service whose cumulative probability is
/// `>= u`, so a draw landing exactly on a boundary goes to the earlier service. The
/// sampler only borrows the catalogue and its distribution and can be shared by any
/// number of worker threads.
#[derive(Debug, Clone, Copy)]
pub struct WeightedSampler<'a> {
    services: &'a [Service],
    cumulative: &'a [f64],
}

impl<'a> WeightedSampler<'a> {
    pub fn new(
        catalogue: &'a ServiceCatalogue,
        distribution: &'a CumulativeDistribution,
    ) -> Result<Self> {
        if catalogue.is_empty() || catalogue.len() != distribution.len() {
            return Err(Error::InvalidInput(format!(
                "distribution has {} entries but the catalogue has {} services",
                distribution.len(),
                catalogue.len()
            )));
        }

        Ok(Self {
            services: catalogue.services(),
            cumulative: distribution.cumulative(),
        })
    }

    /// Index of the service selected by the draw `u`.
    ///
    /// Binary search over the non-decreasing cumulative array. This picks the same
    /// index as scanning from the front for the first value `>= u`. A draw above
    /// every cumulative value, possible when the sum drifts below 1, selects the last
    /// service.
    pub fn index_at(&self, u: f64) -> usize {
        let index = self.cumulative.partition_point(|&c| c < u);
        index.min(self.cumulative.len() - 1)
    }

    pub fn sample_at(&self, u: f64) -> &'a Service {
        &self.services[self.index_at(u)]
    }
}

impl<'a> Distribution<&'a Service> for WeightedSampler<'a> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a Service {
        let u: f64 = rng.random();
        self.sample_at(u)
    }
}
