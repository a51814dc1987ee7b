use crate::error::{Error, Result};
use crate::sampler::WeightedSampler;
use preference_common::prelude::AssignmentRequest;
use rand::Rng;
use rand::distr::Distribution;
use std::sync::Arc;

/// Draws the ranked preference list of a single student.
///
/// Every rank is an independent draw, so a service can show up at more than one
/// rank in the same list.
#[derive(Debug, Clone, Copy)]
pub struct StudentRequestGenerator<'a> {
    sampler: WeightedSampler<'a>,
}

impl<'a> StudentRequestGenerator<'a> {
    pub fn new(sampler: WeightedSampler<'a>) -> Self {
        Self { sampler }
    }

    /// Generates `count` requests using the calling thread's random generator.
    pub fn generate(&self, count: usize) -> Result<Vec<AssignmentRequest>> {
        self.generate_with(&mut rand::rng(), count)
    }

    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<AssignmentRequest>> {
        if count == 0 {
            return Err(Error::InvalidInput(
                "requests per student must be greater than zero".to_string(),
            ));
        }

        let requests = (1..=count)
            .map(|rank| {
                let service = self.sampler.sample(rng);
                AssignmentRequest::new(
                    rank,
                    Arc::clone(service.speciality_id()),
                    Arc::clone(service.city_id()),
                )
            })
            .collect();

        Ok(requests)
    }
}
