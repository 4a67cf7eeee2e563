//! rpcstub CLI entrypoint
//! Parses command-line arguments and dispatches to the core generator.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use rpcstub_core::{Config, SchemaDocument, Variant};
use tracing::info;

#[derive(Parser)]
#[command(name = "rpcstub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Full name of the input schema, e.g. src/components/interfaces/QT_HMI_API.xml
    #[arg(long)]
    infile: Option<PathBuf>,
    /// Qt version of the generated code: 4.8.5 (default) or 5.1.0
    #[arg(long = "version", value_name = "VARIANT")]
    variant: Option<String>,
    /// YAML configuration file; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Responder whose requests get stubs (default: sdl)
    #[arg(long)]
    provider: Option<String>,
    /// Name of the generated class (default: RequestToSDL)
    #[arg(long)]
    class_name: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate the request header and source files
    Generate {
        #[command(flatten)]
        schema: SchemaArgs,
        /// Directory where the header and source files are saved
        #[arg(long)]
        outdir: Option<PathBuf>,
    },
    /// Run the generator without writing files and print what would be generated
    Check {
        #[command(flatten)]
        schema: SchemaArgs,
    },
}

/// Merge the optional config file with command-line overrides
async fn resolve_config(args: &SchemaArgs, outdir: Option<&PathBuf>) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => {
            let infile = args
                .infile
                .as_ref()
                .context("--infile is required when no --config is given")?;
            Config::new(infile.to_string_lossy(), ".")
        }
    };

    if let Some(infile) = &args.infile {
        config.schema_path = infile.to_string_lossy().to_string();
    }
    if let Some(outdir) = outdir {
        config.output_dir = outdir.to_string_lossy().to_string();
    }
    if let Some(variant) = &args.variant {
        config.variant = variant.parse::<Variant>()?;
    }
    if let Some(provider) = &args.provider {
        config.provider = provider.clone();
    }
    if let Some(class_name) = &args.class_name {
        config.class_name = class_name.clone();
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate { schema, outdir } => {
            let config = resolve_config(schema, outdir.as_ref()).await?;
            info!(
                schema = %config.schema_path,
                output_dir = %config.output_dir,
                variant = %config.variant,
                "Generating stubs"
            );

            let generation = rpcstub_core::generate(&config)
                .await
                .with_context(|| format!("Failed to generate stubs from {}", config.schema_path))?;

            println!(
                "Generated {} requests into {} and {} in {}",
                generation.request_count(),
                generation.header.file_name,
                generation.source.file_name,
                config.output_dir
            );
        }
        Commands::Check { schema } => {
            let config = resolve_config(schema, None).await?;
            let doc = SchemaDocument::from_file(&config.schema_path)
                .await
                .with_context(|| format!("Failed to load schema {}", config.schema_path))?;
            let generation = rpcstub_core::generate_from_document(&doc, &config)
                .context("Schema check failed")?;

            for iface in &generation.interfaces {
                println!("{} ({} requests)", iface.name, iface.fragments.len());
                for fragment in &iface.fragments {
                    let response = fragment.response.as_deref().unwrap_or("-");
                    println!(
                        "  {}({}) -> {}",
                        fragment.signature.name,
                        fragment.signature.parameter_types().join(", "),
                        response
                    );
                }
            }
            println!(
                "OK: {} would be generated with {} requests",
                generation.header.file_name,
                generation.request_count()
            );
        }
    }
    Ok(())
}
