//! Write the SCIA input files for a parameters JSON file and optionally run them
//!
//! Usage: `manual_run [params.json] [--analyze]`

use std::path::{Path, PathBuf};

use anyhow::Context;
use foundation_model::prelude::*;
use foundation_model::scia::{DEFINITION_FILE_NAME, INPUT_FILE_NAME};
use scia_service::analysis::load_template;
use scia_service::{run_analysis, SciaExecutor, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let analyze = args.iter().any(|a| a == "--analyze");
    let params_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("params.json"));

    let params: FoundationParams = if params_path.exists() {
        let json = std::fs::read_to_string(&params_path)
            .with_context(|| format!("reading {}", params_path.display()))?;
        serde_json::from_str(&json).context("parsing parameters")?
    } else {
        tracing::warn!("{} not found, using default parameters", params_path.display());
        FoundationParams::default()
    };

    let model = build_foundation_model(&params)?;
    println!("{}", model.summary());

    let out_dir = params_path.parent().unwrap_or(Path::new("."));
    let out_dir = if out_dir.as_os_str().is_empty() { Path::new(".") } else { out_dir };
    let input_path = out_dir.join(INPUT_FILE_NAME);
    let def_path = out_dir.join(DEFINITION_FILE_NAME);
    std::fs::write(&input_path, write_input_xml(&model)?)?;
    std::fs::write(&def_path, write_definition_file()?)?;
    println!("Wrote {} and {}", input_path.display(), def_path.display());

    if analyze {
        let config = ServiceConfig::from_env();
        let template = load_template(&config.template_path).await?;
        let executor = SciaExecutor::from_config(&config);
        let reaction = run_analysis(&executor, &params, template, config.timeout).await?;
        println!("Maximum pile reaction: {:.2} N", reaction);
    }

    Ok(())
}
