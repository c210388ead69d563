// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::io::{self, Read};
use std::process::ExitCode;
use textsmith::config::load_and_validate_config;
use textsmith::errors::PipelineError;
use textsmith::observability::init_tracing;
use textsmith::pipeline::{Pipeline, ProcessorRequest};

const CLIENT_ENV: &str = "TEXTSMITH_CLIENT";
const DEFAULT_CLIENT: &str = "cli";

/// Read the input from the argument, or from stdin when absent or `-`.
fn read_input(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
    }
}

async fn run(args: &[String]) -> Result<ExitCode> {
    let program = args.first().map(String::as_str).unwrap_or("textsmith");
    let Some(config_path) = args.get(1) else {
        eprintln!("Usage: {} <config.(yaml|toml)> [input_text | -]", program);
        eprintln!("Example: {} configs/clean.yaml \"b\\na\\nb\"", program);
        eprintln!("Example: cat notes.txt | {} configs/clean.toml", program);
        return Ok(ExitCode::from(2));
    };
    if args.len() > 3 {
        bail!("Expected at most one input argument, got {}", args.len() - 2);
    }

    let config = load_and_validate_config(config_path)
        .with_context(|| format!("Failed to load config '{}'", config_path))?;
    let pipeline = Pipeline::from_validated_config(&config)?;

    let input = read_input(args.get(2).map(String::as_str))?;
    let client_key = env::var(CLIENT_ENV).unwrap_or_else(|_| DEFAULT_CLIENT.to_string());

    match pipeline.run(&client_key, ProcessorRequest::from_text(&input)).await {
        Ok(output) => {
            println!("{}", output.text());
            if !output.metadata.is_empty() {
                eprintln!("{}", serde_json::to_string_pretty(&output.metadata)?);
            }
            for failure in &output.failures {
                eprintln!("skipped: {}", failure);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ PipelineError::RateLimited { .. }) => {
            eprintln!("{}", err);
            Ok(ExitCode::from(3))
        }
        Err(err) => Err(err.into()),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    run(&args).await
}
