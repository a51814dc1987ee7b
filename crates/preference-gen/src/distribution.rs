use crate::catalogue::ServiceCatalogue;
use crate::error::{Error, Result};

/// Normalized selection probabilities and their running sum, in catalogue order.
///
/// The last cumulative value is 1 up to floating-point summation error. It can end
/// up slightly below 1, which the sampler handles by clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeDistribution {
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
}

impl CumulativeDistribution {
    pub fn from_catalogue(catalogue: &ServiceCatalogue) -> Result<Self> {
        Self::from_weights(catalogue.raw_attractivities())
    }

    /// Builds the distribution from raw, non-negative weights.
    pub fn from_weights<I>(weights: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let weights = weights.into_iter().collect::<Vec<_>>();

        if weights.is_empty() {
            return Err(Error::InvalidInput(
                "cannot build a distribution without weights".to_string(),
            ));
        }
        if let Some(weight) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(Error::InvalidInput(format!(
                "attractivity weight {weight} is not a finite non-negative number"
            )));
        }

        let total = weights.iter().sum::<f64>();
        if !total.is_finite() || total <= 0.0 {
            return Err(Error::DegenerateDistribution { total });
        }

        let probabilities = weights.iter().map(|w| w / total).collect::<Vec<_>>();
        let cumulative = probabilities
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();

        Ok(Self {
            probabilities,
            cumulative,
        })
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}
