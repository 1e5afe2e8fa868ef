//! Offline reconciliation of one member family
//!
//! Reads `{ "owner": ..., "old": [...], "new": [...] }` and prints the
//! reconciliation (transition map, placements, stats) as JSON.
//!
//! ```text
//! reconcile-cli family.json --config reload.yaml --pretty
//! cat family.json | reconcile-cli -
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use reload_identity::config::{ConfigError, Preset, ReloadConfig};
use reload_identity::{AtomicSyntheticIdCounter, MemberSignature, Reconciler};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "reconcile-cli")]
#[command(about = "Reconcile an owner's old and new member variants")]
#[command(version)]
struct Args {
    /// Family JSON file, or `-` for stdin
    input: PathBuf,

    /// YAML v1 configuration (overrides --preset)
    #[arg(short, long, env = "RELOAD_IDENTITY_CONFIG")]
    config: Option<PathBuf>,

    /// Base preset when no configuration file is given
    #[arg(short, long, default_value = "standard")]
    preset: String,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FamilyInput {
    owner: String,
    #[serde(default)]
    old: Vec<VariantInput>,
    #[serde(default)]
    new: Vec<VariantInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VariantInput {
    #[serde(default)]
    super_type: Option<String>,
    #[serde(default)]
    interfaces: Vec<String>,
    #[serde(default)]
    methods: Vec<String>,
    #[serde(default)]
    fields: Vec<String>,
    #[serde(default)]
    enclosing_method: Option<String>,
}

impl VariantInput {
    fn into_signature(self, owner: &Arc<str>, slot: u32) -> MemberSignature {
        let mut builder = MemberSignature::builder(Arc::clone(owner), slot);
        if let Some(super_type) = self.super_type {
            builder = builder.super_type(super_type);
        }
        for interface in self.interfaces {
            builder = builder.interface(interface);
        }
        for method in self.methods {
            builder = builder.method(method);
        }
        for field in self.fields {
            builder = builder.field(field);
        }
        if let Some(enclosing) = self.enclosing_method {
            builder = builder.enclosing_method(enclosing);
        }
        builder.build()
    }
}

/// Number variants from slot 1; a family may not outgrow `probe_limit`
fn family(
    owner: &Arc<str>,
    variants: Vec<VariantInput>,
    probe_limit: u32,
) -> Result<Vec<MemberSignature>, ConfigError> {
    let len = variants.len();
    match u32::try_from(len) {
        Ok(n) if n <= probe_limit => {}
        _ => {
            return Err(ConfigError::Range {
                field: "probe_limit".to_string(),
                value: len.to_string(),
                min: "0".to_string(),
                max: probe_limit.to_string(),
                hint: format!("Family of {} has more variants than slots can be probed.", owner),
            });
        }
    }

    Ok(variants
        .into_iter()
        .zip(1u32..)
        .map(|(v, slot)| v.into_signature(owner, slot))
        .collect())
}

fn load_config(args: &Args) -> reload_identity::Result<ReloadConfig> {
    let config = match &args.config {
        Some(path) => ReloadConfig::from_yaml(path)?,
        None => {
            let preset = Preset::parse(&args.preset).ok_or_else(|| {
                ConfigError::UnknownPreset(args.preset.clone())
            })?;
            ReloadConfig::from_preset(preset)
        }
    };
    config.validate()?;
    Ok(config)
}

fn read_input(path: &Path) -> reload_identity::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn main() -> reload_identity::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reload_identity=info,reconcile_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    debug!(?config, "configuration loaded");

    let input: FamilyInput = serde_json::from_str(&read_input(&args.input)?)?;
    let owner: Arc<str> = Arc::from(input.owner.as_str());
    let old = family(&owner, input.old, config.probe_limit)?;
    let new = family(&owner, input.new, config.probe_limit)?;

    info!(owner = %owner, old = old.len(), new = new.len(), "reconciling family");

    let ids = Arc::new(AtomicSyntheticIdCounter::new(config.synthetic_id_base));
    let reconciliation = Reconciler::from_config(&config, ids).reconcile(&owner, &old, &new);

    let output = if args.pretty {
        serde_json::to_string_pretty(&reconciliation)?
    } else {
        serde_json::to_string(&reconciliation)?
    };
    println!("{}", output);

    Ok(())
}
