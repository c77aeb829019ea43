use std::str::FromStr;

use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use dslab_radio_models::{TxCurrentModel, TxCurrentModelConfig};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Prints the radio transmit current estimated by a model over a range of transmit powers
struct Args {
    /// Model config string, e.g. Linear[eta=0.1,voltage=3.3]
    #[arg(short, long, default_value = "Linear")]
    model: String,

    /// Path to YAML file with model config (overrides --model)
    #[arg(short, long)]
    config: Option<String>,

    /// Minimum transmit power in dBm
    #[arg(long, default_value_t = 0., allow_negative_numbers = true)]
    min: f64,

    /// Maximum transmit power in dBm
    #[arg(long, default_value_t = 20., allow_negative_numbers = true)]
    max: f64,

    /// Transmit power step in dBm
    #[arg(long, default_value_t = 1.)]
    step: f64,

    /// Print results as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Row {
    tx_power_dbm: f64,
    current: f64,
}

/// Evaluates the model at `min`, `min + step`, ... up to `max` inclusive.
fn sweep(model: &dyn TxCurrentModel, min: f64, max: f64, step: f64) -> Result<Vec<Row>, String> {
    if !min.is_finite() || !max.is_finite() {
        return Err(format!("Transmit power range should be finite, got [{}, {}]", min, max));
    }
    if min > max {
        return Err(format!("Minimum transmit power {} is greater than maximum {}", min, max));
    }
    if !(step > 0.) || !step.is_finite() {
        return Err(format!("Step should be positive and finite, got {}", step));
    }

    let mut rows = Vec::new();
    let mut i = 0;
    loop {
        let tx_power_dbm = min + step * i as f64;
        if tx_power_dbm > max {
            break;
        }
        rows.push(Row {
            tx_power_dbm,
            current: model.get_current(tx_power_dbm),
        });
        i += 1;
    }
    Ok(rows)
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TxCurrentModelConfig::from_file(path)?,
        None => TxCurrentModelConfig::from_str(&args.model)?,
    };
    if let Err(e) = config.validate() {
        warn!("Model parameters are not physically meaningful: {}", e);
    }
    info!("Using tx current model {}", config);
    let model = config.build();

    let rows = sweep(&model, args.min, args.max, args.step)?;

    if args.json {
        let json = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        println!("tx_power_dbm,current");
        for row in rows {
            println!("{},{}", row.tx_power_dbm, row.current);
        }
    }
    Ok(())
}
