//! Predict command
//!
//! Sensor readings can come from a JSON file, stdin, or inline
//! comma-separated values:
//!
//! ```bash
//! irrigation predict --input reading.json
//! cat reading.json | irrigation predict --stdin
//! irrigation predict --values 0.1,0.2,...,0.9
//! ```
//!
//! File and stdin input accept either a bare JSON array or the request
//! object `{"sensor_values": [...]}`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Args;
use serde_json::{json, Value};

use crate::client::ApiClient;

/// Prediction request arguments
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Input file path (JSON)
    #[arg(short, long, conflicts_with_all = ["stdin", "values"])]
    pub input: Option<PathBuf>,

    /// Read input from stdin
    #[arg(long, conflicts_with = "values")]
    pub stdin: bool,

    /// Inline comma-separated sensor values
    #[arg(long, value_delimiter = ',')]
    pub values: Option<Vec<f64>>,
}

/// Submit a sensor reading and print the service response.
pub async fn execute(client: &ApiClient, args: PredictArgs) -> Result<()> {
    let sensor_values = read_sensor_values(&args)?;
    let response = client.predict(sensor_values).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn read_sensor_values(args: &PredictArgs) -> Result<Vec<Value>> {
    if let Some(values) = &args.values {
        return Ok(values.iter().map(|v| json!(v)).collect());
    }

    let raw = if let Some(path) = &args.input {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else if args.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        buffer
    } else {
        bail!("provide sensor values via --input, --stdin, or --values");
    };

    parse_payload(&raw)
}

/// Accept a bare array or a `{"sensor_values": [...]}` object.
fn parse_payload(raw: &str) -> Result<Vec<Value>> {
    let payload: Value = serde_json::from_str(raw).context("input is not valid JSON")?;

    let values = match &payload {
        Value::Array(values) => values,
        Value::Object(body) => body
            .get("sensor_values")
            .and_then(Value::as_array)
            .context("object input must carry a sensor_values array")?,
        _ => bail!("input must be a JSON array or an object with sensor_values"),
    };

    Ok(values.clone())
}
