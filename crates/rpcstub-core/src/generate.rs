//! Code generation functionality for rpcstub

use std::path::Path;

use tokio::fs;

use crate::{
    config::Config,
    emitter::{EmittedInterface, Emitter},
    error::Result,
    model::ApiModel,
    pairing,
    render::{Artifact, Renderer},
    schema::SchemaDocument,
};

/// Everything one run produces, held in memory until written
#[derive(Debug, Clone)]
pub struct Generation {
    pub interfaces: Vec<EmittedInterface>,
    pub header: Artifact,
    pub source: Artifact,
}

impl Generation {
    pub fn request_count(&self) -> usize {
        self.interfaces.iter().map(|i| i.fragments.len()).sum()
    }

    /// Write both artifacts into `dir`, creating it if needed
    pub async fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).await?;
        for artifact in [&self.header, &self.source] {
            let path = dir.join(&artifact.file_name);
            fs::write(&path, &artifact.contents).await?;
            log::info!("Wrote {}", path.display());
        }
        Ok(())
    }
}

/// Run the whole pipeline on an already loaded schema without touching the
/// filesystem
pub fn generate_from_document(doc: &SchemaDocument, config: &Config) -> Result<Generation> {
    config.validate()?;

    // 1. Normalize the schema; every descriptor is resolved here
    let model = ApiModel::build(doc)?;

    // 2. Pair and emit, interface by interface
    let emitter = Emitter::from_config(config);
    let interfaces: Vec<EmittedInterface> = model
        .interfaces
        .iter()
        .map(|iface| emitter.emit(iface, &pairing::pair(iface, &config.provider)))
        .collect();

    // 3. Render both artifacts
    let (header, source) = Renderer::new()?.render(config, &interfaces)?;

    let generation = Generation {
        interfaces,
        header,
        source,
    };
    log::info!(
        "Generated {} of {} requests across {} interfaces for provider '{}'",
        generation.request_count(),
        model.request_count(),
        model.interfaces.len(),
        config.provider
    );
    Ok(generation)
}

/// Main entry point for code generation.
///
/// Nothing is written unless the whole pipeline succeeded.
pub async fn generate(config: &Config) -> Result<Generation> {
    log::info!(
        "Generating {} stubs from {} (Qt {})",
        config.class_name,
        config.schema_path,
        config.variant
    );
    let doc = SchemaDocument::from_file(&config.schema_path).await?;
    let generation = generate_from_document(&doc, config)?;
    generation.write_to(&config.output_dir).await?;
    Ok(generation)
}
