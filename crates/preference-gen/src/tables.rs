//! Loading of the city and speciality tables from JSON.
//!
//! Both files hold an array of records. Field names are accepted in snake case
//! (`id`, `weight`, `city_ignore_factor`, `name`) or in the scraped data layout
//! (`Name`/`Id`, `choosenCoef`, `abilityToIgnoreCity`). Unknown fields are ignored.

use crate::catalogue::{City, Speciality};
use crate::error::Result;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load_cities(path: impl AsRef<Path>) -> Result<Vec<City>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let cities: Vec<City> = serde_json::from_reader(reader)?;

    debug!("Loaded {} cities from {path:?}", cities.len());
    Ok(cities)
}

pub fn load_specialities(path: impl AsRef<Path>) -> Result<Vec<Speciality>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let specialities: Vec<Speciality> = serde_json::from_reader(reader)?;

    debug!("Loaded {} specialities from {path:?}", specialities.len());
    Ok(specialities)
}

pub fn parse_cities(json: &str) -> Result<Vec<City>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_specialities(json: &str) -> Result<Vec<Speciality>> {
    Ok(serde_json::from_str(json)?)
}
