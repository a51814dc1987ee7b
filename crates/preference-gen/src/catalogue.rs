//! # Service Catalogue
//!
//! A service is one (city, speciality) combination a student can ask for. The
//! catalogue is the cross product of the city and speciality tables, city-major:
//! for each city in input order, every speciality in input order. That order is
//! the fixed iteration order used by the cumulative distribution and the sampler.
//!
//! Each service carries a raw attractivity score:
//!
//! ```text
//! raw = spec_importance * spec_weight
//!     + city_importance * city_weight * (1 - city_ignore_factor)
//! ```
//!
//! The `city_ignore_factor` of a speciality scales down how much the city matters
//! for it. At `1.0` the city is irrelevant, at `0.0` it counts fully.

use crate::config::AttractivityWeights;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::sync::Arc;

/// A row of the cities table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct City {
    #[serde(alias = "Name")]
    id: String,
    #[serde(alias = "choosenCoef")]
    weight: f64,
}

impl City {
    pub fn new(id: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A row of the specialities table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Speciality {
    #[serde(alias = "Id")]
    id: String,
    #[serde(alias = "Name", default)]
    name: Option<String>,
    #[serde(alias = "choosenCoef")]
    weight: f64,
    #[serde(alias = "abilityToIgnoreCity")]
    city_ignore_factor: f64,
}

impl Speciality {
    pub fn new(id: impl Into<String>, weight: f64, city_ignore_factor: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            weight,
            city_ignore_factor,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable label, when the input table provides one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn city_ignore_factor(&self) -> f64 {
        self.city_ignore_factor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    city: Arc<str>,
    speciality: Arc<str>,
    city_weight: f64,
    spec_weight: f64,
    city_ignore_factor: f64,
    raw_attractivity: f64,
}

impl Service {
    fn new(
        city: &Arc<str>,
        city_weight: f64,
        speciality: &Arc<str>,
        spec: &Speciality,
        weights: AttractivityWeights,
    ) -> Self {
        let raw_attractivity = raw_attractivity(
            weights,
            city_weight,
            spec.weight(),
            spec.city_ignore_factor(),
        );

        Self {
            city: Arc::clone(city),
            speciality: Arc::clone(speciality),
            city_weight,
            spec_weight: spec.weight(),
            city_ignore_factor: spec.city_ignore_factor(),
            raw_attractivity,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn speciality(&self) -> &str {
        &self.speciality
    }

    /// Shared handle on the city id, cloned into every request drawn for this service.
    pub fn city_id(&self) -> &Arc<str> {
        &self.city
    }

    pub fn speciality_id(&self) -> &Arc<str> {
        &self.speciality
    }

    pub fn city_weight(&self) -> f64 {
        self.city_weight
    }

    pub fn spec_weight(&self) -> f64 {
        self.spec_weight
    }

    pub fn city_ignore_factor(&self) -> f64 {
        self.city_ignore_factor
    }

    pub fn raw_attractivity(&self) -> f64 {
        self.raw_attractivity
    }
}

/// Attractivity of a single service before normalization.
pub fn raw_attractivity(
    weights: AttractivityWeights,
    city_weight: f64,
    spec_weight: f64,
    city_ignore_factor: f64,
) -> f64 {
    weights.spec_importance * spec_weight
        + weights.city_importance * city_weight * (1.0 - city_ignore_factor)
}

fn check_weight(kind: &str, id: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidInput(format!(
            "{kind} '{id}' has weight {weight}, expected a finite non-negative number"
        )));
    }
    Ok(())
}

/// Every (city, speciality) service, immutable once built.
#[derive(Debug, Clone)]
pub struct ServiceCatalogue {
    services: Vec<Service>,
    num_cities: usize,
    num_specialities: usize,
}

impl ServiceCatalogue {
    pub fn new(
        cities: &[City],
        specialities: &[Speciality],
        weights: AttractivityWeights,
    ) -> Result<Self> {
        if cities.is_empty() {
            return Err(Error::InvalidInput("cities table is empty".to_string()));
        }
        if specialities.is_empty() {
            return Err(Error::InvalidInput("specialities table is empty".to_string()));
        }

        for importance in [weights.spec_importance, weights.city_importance] {
            if !importance.is_finite() || importance < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "importance constant {importance} is not a finite non-negative number"
                )));
            }
        }

        for city in cities {
            check_weight("City", city.id(), city.weight())?;
        }
        for spec in specialities {
            check_weight("Speciality", spec.id(), spec.weight())?;

            let factor = spec.city_ignore_factor();
            if !(0.0..=1.0).contains(&factor) {
                return Err(Error::InvalidInput(format!(
                    "Speciality '{}' has city ignore factor {factor}, expected a value in [0, 1]",
                    spec.id()
                )));
            }
        }

        let spec_ids = specialities
            .iter()
            .map(|spec| Arc::<str>::from(spec.id()))
            .collect::<Vec<_>>();

        let mut services = Vec::with_capacity(cities.len() * specialities.len());
        for city in cities {
            let city_id = Arc::<str>::from(city.id());
            for (spec, spec_id) in specialities.iter().zip(&spec_ids) {
                services.push(Service::new(&city_id, city.weight(), spec_id, spec, weights));
            }
        }

        debug!(
            "Built service catalogue: {} cities x {} specialities = {} services",
            cities.len(),
            specialities.len(),
            services.len()
        );

        Ok(Self {
            services,
            num_cities: cities.len(),
            num_specialities: specialities.len(),
        })
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn num_cities(&self) -> usize {
        self.num_cities
    }

    pub fn num_specialities(&self) -> usize {
        self.num_specialities
    }

    /// The raw attractivity column, in catalogue order.
    pub fn raw_attractivities(&self) -> impl Iterator<Item = f64> + '_ {
        self.services.iter().map(Service::raw_attractivity)
    }
}
