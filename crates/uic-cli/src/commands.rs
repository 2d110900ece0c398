use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use uic_derive::{ComponentDescriptor, derive_descriptor};
use uic_model::SpecModel;

use crate::cli::{CheckArgs, DeriveArgs};

pub struct DeriveOutcome {
    pub descriptor: ComponentDescriptor,
    /// Set when the descriptor went to a file rather than stdout.
    pub written: Option<PathBuf>,
}

/// The per-spec result of a `check` run.
pub struct CheckOutcome {
    pub path: PathBuf,
    pub result: std::result::Result<ComponentDescriptor, String>,
}

pub fn run_derive(args: &DeriveArgs) -> Result<DeriveOutcome> {
    let descriptor = derive_from_path(&args.spec)?;

    let json = if args.compact {
        serde_json::to_string(&descriptor).context("serialize descriptor")?
    } else {
        serde_json::to_string_pretty(&descriptor).context("serialize descriptor")?
    };
    let written = match &args.output {
        Some(path) => {
            fs::write(path, json.as_bytes())
                .with_context(|| format!("write descriptor to {}", path.display()))?;
            Some(path.clone())
        }
        None => {
            println!("{json}");
            None
        }
    };
    Ok(DeriveOutcome { descriptor, written })
}

pub fn run_check(args: &CheckArgs) -> Vec<CheckOutcome> {
    args.specs
        .iter()
        .map(|path| CheckOutcome {
            path: path.clone(),
            result: derive_from_path(path).map_err(|error| format!("{error:#}")),
        })
        .collect()
}

fn derive_from_path(path: &Path) -> Result<ComponentDescriptor> {
    let span = info_span!("spec", path = %path.display());
    let _guard = span.enter();

    let raw = fs::read_to_string(path)
        .with_context(|| format!("read component spec {}", path.display()))?;
    let model: SpecModel = serde_json::from_str(&raw)
        .with_context(|| format!("parse component spec {}", path.display()))?;
    debug!(component = %model.component, "parsed component spec");

    let descriptor = derive_descriptor(&model)
        .with_context(|| format!("derive descriptor for {}", model.component))?;
    Ok(descriptor)
}
