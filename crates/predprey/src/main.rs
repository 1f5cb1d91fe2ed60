//! Command-line front end of the predator–prey simulator.
//!
//! # Usage
//!
//! ```text
//! predprey run [CONFIG]
//! predprey export [CONFIG] [PATH]
//! predprey plot [CONFIG]
//! predprey defaults
//! ```
//!
//! # Modes
//!
//! - **run**: Simulate and print the range and final value of each
//!   population, labeled in the configured language.
//!
//! - **export**: Simulate and write the series as CSV to `PATH`, by default
//!   `predator_prey_simulation.csv` in the working directory.
//!
//! - **plot**: Simulate and open a window with the populations-over-time
//!   chart and the phase portrait. Requires the `plot` feature.
//!
//! - **defaults**: Print a configuration file holding every default value.
//!
//! `CONFIG` is a TOML file (see [`predprey::config`]); without one the
//! defaults are used. Set `RUST_LOG` to change log verbosity.

mod telemetry;

use std::{error::Error, path::Path};

use predprey::{Config, Summary, TimeSeries, export, simulate};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = args.first().map_or("run", String::as_str);
    let config_path = args.get(1).map(String::as_str);
    match mode {
        "run" => run(&load_config(config_path)?),
        "export" => {
            let path = args.get(2).map_or(export::FILE_NAME, String::as_str);
            export_csv(&load_config(config_path)?, Path::new(path))
        }
        "plot" => plot(&load_config(config_path)?),
        "defaults" => {
            print!("{}", Config::default().to_toml_string()?);
            Ok(())
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: predprey [run|export|plot|defaults] [CONFIG] [PATH]");
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&str>) -> Result<Config, predprey::Error> {
    match path {
        Some(path) => {
            let config = Config::load(Path::new(path))?;
            info!(path = %path, "loaded configuration");
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

// --- Run ---------------------------------------------------------------------

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let strings = config.language.strings();
    let series = simulate(&config.simulation)?;

    println!("{}", strings.title);
    println!("{}: {}", strings.model, config.simulation.model.label(strings));

    match series.summary() {
        Some(summary) => print_summary(&series, &summary, config),
        None => println!("(empty)"),
    }
    Ok(())
}

fn print_summary(series: &TimeSeries, summary: &Summary, config: &Config) {
    let strings = config.language.strings();

    println!(
        "{}: 0 .. {}, dt = {}, {} points",
        strings.time,
        summary.end_time,
        config.simulation.dt,
        series.len()
    );
    println!("{:<16} {:>14} {:>14} {:>14}", "", "min", "max", "t_end");
    for (name, extremes) in [
        (strings.prey, summary.prey),
        (strings.predator, summary.predator),
    ] {
        println!(
            "{:<16} {:>14.4} {:>14.4} {:>14.4}",
            name, extremes.min, extremes.max, extremes.last
        );
    }
}

// --- Export ------------------------------------------------------------------

fn export_csv(config: &Config, path: &Path) -> Result<(), Box<dyn Error>> {
    let series = simulate(&config.simulation)?;
    export::save(&series, config.language.strings(), path).map_err(predprey::Error::from)?;

    let label = config.language.strings().download_csv;
    println!("{label}: {}", path.display());
    Ok(())
}

// --- Plot --------------------------------------------------------------------

#[cfg(feature = "plot")]
fn plot(config: &Config) -> Result<(), Box<dyn Error>> {
    use predprey_plot::ShowConfig;

    let strings = config.language.strings();
    let palette = config.theme.palette();
    let series = simulate(&config.simulation)?;

    let figures = predprey::charts(&series, strings, &palette);
    predprey_plot::show(
        figures.into(),
        palette.style(),
        ShowConfig::new().title(strings.title).legend(),
    )?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn plot(_config: &Config) -> Result<(), Box<dyn Error>> {
    Err("the plot mode requires building with `--features plot`".into())
}
