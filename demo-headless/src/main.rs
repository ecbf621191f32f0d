use clap::Parser;
use impact_sim_core::scenarios::{
    find_preset, run_angle_ensemble, select_notable, zones_for, EnsembleSummary, GeoPoint,
    NeoBrowsePage, PRESET_SCENARIOS,
};
use impact_sim_core::{
    Composition, EntryParameters, ImpactCalculator, ImpactModelConfig, ImpactReport,
};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

/// Asteroid impact effects calculator
#[derive(Parser, Debug)]
#[command(name = "impact-sim-demo")]
#[command(about = "Estimate airburst, crater, seismic, thermal and blast effects", long_about = None)]
struct Args {
    /// Body diameter in meters
    #[arg(short, long, default_value_t = 50.0)]
    diameter: f64,

    /// Entry velocity in km/s
    #[arg(short, long, default_value_t = 20.0)]
    velocity: f64,

    /// Composition (iron, stony, carbonaceous, comet)
    #[arg(short, long, default_value = "stony")]
    composition: String,

    /// Impact angle from horizontal in degrees (default: canonical 45)
    #[arg(short, long)]
    angle: Option<f64>,

    /// Run a preset scenario by slug or name (overrides the body flags)
    #[arg(short, long)]
    preset: Option<String>,

    /// List preset scenarios and exit
    #[arg(long)]
    list_presets: bool,

    /// Model constants as JSON (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// NEO browse page (JSON); evaluates the notable objects in it
    #[arg(long)]
    neo: Option<PathBuf>,

    /// Number of random-angle samples for an ensemble run
    #[arg(short, long)]
    ensemble: Option<usize>,

    /// Seed for the ensemble run
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Ground-zero latitude for overlay zones
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Ground-zero longitude for overlay zones
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,

    /// Print JSON instead of a text report
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.list_presets {
        list_presets();
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "Loading model configuration");
            ImpactModelConfig::from_json_file(path)?
        }
        None => ImpactModelConfig::default(),
    };
    let calculator = ImpactCalculator::with_config(config)?;

    if let Some(path) = &args.neo {
        return run_catalog(&calculator, path, args.json);
    }

    let params = entry_parameters(args)?;

    if let Some(samples) = args.ensemble {
        let ensemble = run_angle_ensemble(&calculator, &params, samples, args.seed)?;
        let summary = ensemble.summary();
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_ensemble(&params, samples, args.seed, &summary);
        }
        return Ok(());
    }

    let result = calculator.calculate(&params)?;
    let location = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)?),
        _ => None,
    };

    if args.json {
        let zones = location.map(|center| zones_for(&result, center));
        let output = serde_json::json!({
            "parameters": params,
            "results": result.summary(),
            "classification": result.classification,
            "zones": zones,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut report = ImpactReport::new(params, result);
    if let Some(center) = location {
        report = report.with_location(center, None);
    }
    println!("{report}");

    if let Some(center) = location {
        println!("\nOverlay zones:");
        for zone in zones_for(&result, center) {
            let (dlat, dlng) = center.degree_offsets(zone.radius.to_kilometers());
            println!(
                "  {:<38} {:>12.0} m  ({:.4}° lat, {:.4}° lng)  {}",
                zone.label, *zone.radius, dlat, dlng, zone.color
            );
        }
    }
    Ok(())
}

fn entry_parameters(args: &Args) -> Result<EntryParameters, Box<dyn Error>> {
    if let Some(key) = &args.preset {
        let preset = find_preset(key).ok_or_else(|| format!("unknown preset '{key}'"))?;
        info!(preset = preset.name, "Using preset scenario");
        let params = preset.parameters;
        return Ok(match args.angle {
            Some(angle) => params.with_impact_angle(angle),
            None => params,
        });
    }

    let composition: Composition = args.composition.parse()?;
    let params = EntryParameters::new(args.diameter, args.velocity, composition);
    Ok(match args.angle {
        Some(angle) => params.with_impact_angle(angle),
        None => params,
    })
}

fn list_presets() {
    println!("=== Preset Scenarios ===\n");
    for preset in &PRESET_SCENARIOS {
        let p = &preset.parameters;
        println!(
            "  {:<12} {:<38} {:>6} m  {:>5} km/s  {:<12} {}",
            preset.slug,
            preset.name,
            *p.diameter,
            *p.velocity,
            p.composition,
            preset.description
        );
    }
}

fn run_catalog(
    calculator: &ImpactCalculator,
    path: &Path,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let page = NeoBrowsePage::from_json_file(path)?;
    let notable = select_notable(&page.near_earth_objects);
    info!(
        total = page.near_earth_objects.len(),
        selected = notable.len(),
        "Selected notable objects"
    );

    let mut rows = Vec::with_capacity(notable.len());
    for record in notable {
        let (params, result) = match record.evaluate(calculator) {
            Ok(evaluated) => evaluated,
            Err(err) => {
                warn!(id = %record.id, error = %err, "Skipping catalog record");
                continue;
            }
        };
        if json {
            rows.push(serde_json::json!({
                "id": record.id,
                "name": record.name,
                "hazardous": record.is_potentially_hazardous_asteroid,
                "parameters": params,
                "results": result.summary(),
            }));
        } else {
            let report = ImpactReport::new(params, result)
                .with_name(record.name.clone(), record.is_potentially_hazardous_asteroid);
            println!("{report}\n");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    }
    Ok(())
}

fn print_ensemble(
    params: &EntryParameters,
    samples: usize,
    seed: u64,
    summary: &EnsembleSummary,
) {
    println!("=== Angle Ensemble ===\n");
    println!(
        "Body: {} {} at {}, {samples} samples (seed {seed})",
        params.diameter, params.composition, params.velocity
    );
    println!(
        "Airbursts: {} ({:.1}%)   Surface impacts: {}",
        summary.airburst_count,
        summary.airburst_fraction * 100.0,
        summary.surface_count
    );
    if let (Some(mean), Some(max)) = (summary.mean_final_crater, summary.max_final_crater) {
        println!("Final crater: mean {mean}, max {max}");
    }
    println!("Mean thermal radius: {}", summary.mean_thermal_radius);
    println!("Mean 1 psi radius:   {}", summary.mean_one_psi_radius);
}
