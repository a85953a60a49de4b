use std::path::PathBuf;

use clap::Parser;
use dust_attenuation::config::{Config, OutputKind};

#[derive(Debug, Parser)]
#[command(name = "dust-attenuation", version, about = "Evaluate dust attenuation curves")]
struct Cli {
    /// JSON run configuration.
    #[arg(default_value = "./data/config/simple_config.json")]
    config: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::from_file(&cli.config)?;
    let model = config.build_model()?;
    log::info!(
        "evaluating {} on {} wavelengths ({})",
        model.name(),
        config.wavelengths().len(),
        config.unit()
    );

    let values = config.run_with(model.as_ref())?;

    let header = match config.output() {
        OutputKind::Attenuation => "attenuation",
        OutputKind::Transmission => "transmission",
    };
    println!("wavelength {}", header);
    for (wavelength, value) in config.wavelengths().iter().zip(&values) {
        println!("{} {:.6}", wavelength, value);
    }

    log::info!("done, {} values written", values.len());
    Ok(())
}
