use arrow::util::pretty::pretty_format_batches;
use clap::Parser;
use log::{LevelFilter, info};
use preference_common::prelude::{create_record_batch, get_request_schema};
use preference_gen::catalogue::ServiceCatalogue;
use preference_gen::config::{AttractivityWeights, SimulationConfigBuilder};
use preference_gen::distribution::CumulativeDistribution;
use preference_gen::population::ParallelPopulationGenerator;
use preference_gen::sampler::WeightedSampler;
use preference_gen::tables::{load_cities, load_specialities};
use std::error::Error;
use std::path::PathBuf;

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOCATOR: dhat::Alloc = dhat::Alloc;

/// Generates synthetic, attractivity-weighted preference lists for a ranked
/// population of students.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// JSON array of city records.
    #[arg(long)]
    cities: PathBuf,

    /// JSON array of speciality records.
    #[arg(long)]
    specialities: PathBuf,

    /// The number of students to generate.
    #[arg(long, default_value_t = SimulationConfigBuilder::DEFAULT_POPULATION)]
    population: usize,

    /// The number of ranked requests per student.
    #[arg(long, default_value_t = SimulationConfigBuilder::DEFAULT_REQUESTS_PER_STUDENT)]
    requests_per_student: usize,

    /// The number of worker threads.
    #[arg(long, default_value_t = SimulationConfigBuilder::DEFAULT_WORKER_COUNT)]
    workers: usize,

    /// Weight of the speciality in a service's attractivity.
    #[arg(long, default_value_t = AttractivityWeights::DEFAULT_SPEC_IMPORTANCE)]
    spec_importance: f64,

    /// Weight of the city in a service's attractivity.
    #[arg(long, default_value_t = AttractivityWeights::DEFAULT_CITY_IMPORTANCE)]
    city_importance: f64,

    /// Seed for reproducible output. Without it every run differs.
    #[arg(long)]
    seed: Option<u64>,

    /// The number of generated rows to print.
    #[arg(long, default_value_t = 20)]
    preview: usize,

    /// If true, generation will not run, but the effective configuration will be printed.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::builder()
        .format_timestamp_micros()
        .filter_level(LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let config = SimulationConfigBuilder::new()
        .with_population(cli.population)
        .with_requests_per_student(cli.requests_per_student)
        .with_worker_count(cli.workers)
        .with_spec_importance(cli.spec_importance)
        .with_city_importance(cli.city_importance)
        .with_seed(cli.seed)
        .try_build()?;

    info!("Running with configuration: {config:?}");

    let cities = load_cities(&cli.cities)?;
    let specialities = load_specialities(&cli.specialities)?;

    let catalogue = ServiceCatalogue::new(&cities, &specialities, config.weights())?;
    let distribution = CumulativeDistribution::from_catalogue(&catalogue)?;

    info!(
        "Catalogue: {} cities x {} specialities = {} services.",
        catalogue.num_cities(),
        catalogue.num_specialities(),
        catalogue.len()
    );

    if cli.dry_run {
        info!("Dry run enabled. Exiting without generating students.");
        return Ok(());
    }

    let sampler = WeightedSampler::new(&catalogue, &distribution)?;
    let generator = ParallelPopulationGenerator::from_config(sampler, &config)?;

    let (students, metrics) =
        generator.generate_with_metrics(config.population(), config.requests_per_student())?;

    info!(
        "Generated {} students in {:?}.",
        metrics.students, metrics.elapsed_time
    );

    let batch = create_record_batch(get_request_schema(), &students)?;
    let preview = batch.slice(0, cli.preview.min(batch.num_rows()));
    println!("{}", pretty_format_batches(&[preview])?);

    Ok(())
}
