use preference_gen::catalogue::ServiceCatalogue;
use preference_gen::config::AttractivityWeights;
use preference_gen::distribution::CumulativeDistribution;
use preference_gen::tables::{load_cities, load_specialities};
use std::fs;
use tempfile::Builder;

const CITIES_JSON: &str = r#"[
    {"Name": "Paris", "choosenCoef": 1.0},
    {"Name": "Lyon", "choosenCoef": 0.62},
    {"Name": "Limoges", "choosenCoef": 0.08}
]"#;

const SPECIALITIES_JSON: &str = r#"[
    {"Id": "SUR", "Name": "Chirurgie générale", "choosenCoef": 0.8, "abilityToIgnoreCity": 0.1},
    {"Id": "PSY", "Name": "Psychiatrie", "choosenCoef": 0.3, "abilityToIgnoreCity": 0.5}
]"#;

#[test]
fn test_catalogue_from_json_files() {
    let temp_dir = Builder::new().prefix("preference-tables").tempdir().unwrap();
    let cities_path = temp_dir.path().join("cities.json");
    let specialities_path = temp_dir.path().join("specialities.json");

    fs::write(&cities_path, CITIES_JSON).unwrap();
    fs::write(&specialities_path, SPECIALITIES_JSON).unwrap();

    let cities = load_cities(&cities_path).unwrap();
    let specialities = load_specialities(&specialities_path).unwrap();

    assert_eq!(cities.len(), 3);
    assert_eq!(specialities[1].name(), Some("Psychiatrie"));

    let catalogue =
        ServiceCatalogue::new(&cities, &specialities, AttractivityWeights::default()).unwrap();
    assert_eq!(catalogue.len(), 6);

    let distribution = CumulativeDistribution::from_catalogue(&catalogue).unwrap();
    let total = distribution.probabilities().iter().sum::<f64>();
    assert!((total - 1.0).abs() < 1e-9);

    // Teardown: The `temp_dir` is cleaned up automatically when it gets dropped here.
}

#[test]
fn test_invalid_json_file() {
    let temp_dir = Builder::new().prefix("preference-tables").tempdir().unwrap();
    let path = temp_dir.path().join("cities.json");
    fs::write(&path, "{not json").unwrap();

    let err = load_cities(&path).unwrap_err();
    assert!(matches!(err, preference_gen::error::Error::Json(_)));
}
