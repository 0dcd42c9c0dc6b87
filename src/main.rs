//! Polysensor CLI
//!
//! Interactive console menu over the sensor registry. Commands may also be
//! fed from a script file to simulate a serial session.

use clap::Parser;
use polysensor::{
    config::Config, ingest::ingest_line, registry::SensorRegistry, sensor::Sensor,
    sensor::SensorKind, PressureSensor, TemperatureSensor, VERSION,
};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polysensor")]
#[command(version = VERSION)]
#[command(about = "Console-driven polymorphic sensor simulator", long_about = None)]
struct Cli {
    /// Configuration file with sensors to preload (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read menu commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Tracing filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .init();

    let mut registry = SensorRegistry::new();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    if config_path.exists() {
        match Config::load(&config_path) {
            Ok(config) => {
                config.seed(&mut registry);
                if !registry.is_empty() {
                    println!(
                        "Preloaded {} sensor(s) from {}",
                        registry.len(),
                        config_path.display()
                    );
                }
            }
            Err(e) => eprintln!("Warning: could not load config: {e}"),
        }
    } else if cli.config.is_some() {
        eprintln!("Warning: config file {} not found", config_path.display());
    }

    match &cli.script {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            run_menu(BufReader::new(file), &mut registry)?;
        }
        None => {
            let stdin = io::stdin();
            run_menu(stdin.lock(), &mut registry)?;
        }
    }

    // Registry drop tears down every sensor here.
    Ok(())
}

fn print_menu() {
    println!();
    println!("--- Polysensor monitoring menu ---");
    println!("1) Create temperature sensor (float)");
    println!("2) Create pressure sensor    (int)");
    println!("3) Record a reading manually");
    println!("4) Process all sensors");
    println!("5) Show sensors");
    println!("6) Inject serial-style line (identifier,value)");
    println!("0) Exit");
}

fn run_menu<R: BufRead>(mut input: R, registry: &mut SensorRegistry) -> io::Result<()> {
    println!("Polysensor v{VERSION}");

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Option: ")? else {
            break; // end of input exits gracefully
        };

        match choice.trim() {
            "0" => break,
            "1" => create_sensor(&mut input, registry, SensorKind::Temperature)?,
            "2" => create_sensor(&mut input, registry, SensorKind::Pressure)?,
            "3" => record_reading(&mut input, registry)?,
            "4" => {
                let reports = registry.process_all();
                if reports.is_empty() {
                    println!("No sensors registered.");
                }
                for report in reports {
                    println!("{report}");
                }
            }
            "5" => {
                println!("--- Sensors ({}) ---", registry.len());
                for line in registry.summarize() {
                    println!("{line}");
                }
            }
            "6" => inject_line(&mut input, registry)?,
            other => println!("Invalid option: {other}"),
        }
    }

    println!("Shutting down.");
    Ok(())
}

fn create_sensor<R: BufRead>(
    input: &mut R,
    registry: &mut SensorRegistry,
    kind: SensorKind,
) -> io::Result<()> {
    let Some(id) = prompt(input, "Sensor identifier: ")? else {
        return Ok(());
    };
    let id = id.trim().to_string();

    let sensor: Box<dyn Sensor> = match kind {
        SensorKind::Temperature => Box::new(TemperatureSensor::new(id.clone())),
        SensorKind::Pressure => Box::new(PressureSensor::new(id.clone())),
    };
    registry.insert(sensor);
    println!("Sensor '{id}' ({kind}) registered.");
    Ok(())
}

fn record_reading<R: BufRead>(input: &mut R, registry: &mut SensorRegistry) -> io::Result<()> {
    let Some(id) = prompt(input, "Sensor identifier: ")? else {
        return Ok(());
    };
    let id = id.trim();

    let Some(sensor) = registry.find_by_identifier_mut(id) else {
        println!("No sensor with identifier '{id}'.");
        return Ok(());
    };

    let Some(value) = prompt(input, "Value (float for temperature, integer for pressure): ")?
    else {
        return Ok(());
    };

    match sensor.ingest(&value) {
        Ok(()) => println!("Reading recorded for {}.", sensor.identifier()),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn inject_line<R: BufRead>(input: &mut R, registry: &mut SensorRegistry) -> io::Result<()> {
    let Some(line) = prompt(input, "Line (identifier,value): ")? else {
        return Ok(());
    };
    match ingest_line(&line, registry) {
        Ok(()) => println!("Injection OK."),
        Err(e) => println!("Injection failed: {e}"),
    }
    Ok(())
}

/// Print `label`, then read one line. `Ok(None)` means end of input.
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    read_line(input)
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\n', '\r']).to_string()))
}
