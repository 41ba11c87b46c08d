use anyhow::{Context, Result};
use camel_k::v1alpha1::KameletBinding;
use camel_k_manifest::provider::PROVIDER_TYPE_NAME;
use camel_k_manifest::{logging, Provider};
use clap::{Args, Parser, Subcommand};
use kube::CustomResourceExt;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    about = "render Camel-K custom resources to Kubernetes manifests",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    subcommand: ManifestSubcommand,

    #[arg(short, long, global = true, env = "CAMEL_K_MANIFEST_LOG", default_value = "warn")]
    verbosity: String,

    #[arg(long, global = true, default_value = PROVIDER_TYPE_NAME)]
    provider: String,
}

#[derive(Subcommand)]
enum ManifestSubcommand {
    #[command(about = "list the data sources of the provider", visible_alias = "ls")]
    List,

    #[command(about = "print the schema of a data source as JSON")]
    Schema { data_source: String },

    #[command(about = "read a data source and print the rendered manifest")]
    Read(ReadArgs),

    #[command(about = "print the KameletBinding CRD")]
    Crd,
}

#[derive(Args)]
struct ReadArgs {
    data_source: String,

    #[arg(short = 'f', long, help = "data source configuration, JSON or YAML")]
    config: PathBuf,

    #[arg(long, help = "print the whole state as JSON instead of the manifest")]
    state: bool,
}

#[async_std::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    logging::setup_for_cli(&args.verbosity);

    let provider = Provider::new(&args.provider, env!("CARGO_PKG_VERSION"));
    match &args.subcommand {
        ManifestSubcommand::List => {
            for name in provider.data_source_names() {
                println!("{name}");
            }
        }
        ManifestSubcommand::Schema { data_source } => {
            let schema = provider.data_source(data_source)?.schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        ManifestSubcommand::Read(read) => {
            let data_source = provider.data_source(&read.data_source)?;
            let config = read_config(&read.config)?;
            info!(data_source = %read.data_source, config = %read.config.display(), "reading");
            let state = data_source.read(config).await?;
            if read.state {
                println!("{}", serde_json::to_string_pretty(&state)?);
            } else {
                print!("{}", state["yaml"].as_str().unwrap_or_default());
            }
        }
        ManifestSubcommand::Crd => print!("{}", serde_yaml::to_string(&KameletBinding::crd())?),
    }
    Ok(())
}

fn read_config(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)?,
        _ => serde_yaml::from_str(&contents)?,
    };
    Ok(config)
}
