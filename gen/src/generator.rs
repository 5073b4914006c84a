//! The map generator: discover, build, render, write or skip.

use std::io;

use tokio::fs;
use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::emit;
use crate::error::Result;
use crate::route::RouteTable;
use crate::scan;

/// What a generation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The module changed and was written.
    Written {
        /// Number of distinct routes in the emitted table.
        routes: usize,
    },

    /// The on-disk module already matched; nothing was written.
    Unchanged,
}

/// Generates the route metadata map for one configured target.
#[derive(Debug, Clone)]
pub struct MapGenerator {
    config: GeneratorConfig,
}

impl MapGenerator {
    /// Create a generator for the given config.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The generator's configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run one generation pass.
    ///
    /// Performs at most one filesystem write: the freshly rendered module
    /// is compared byte for byte against the existing file and only
    /// written on difference. A missing output file counts as different.
    /// Any discovery or I/O error propagates unmodified.
    pub async fn generate(&self) -> Result<GenerateOutcome> {
        let descriptors = scan::discover(&self.config)?;

        let mut table = RouteTable::new();
        for descriptor in &descriptors {
            if let Some(displaced) =
                table.insert(descriptor.route.clone(), descriptor.ident.clone())
            {
                warn!(
                    "duplicate route \"{}\": {} ({}) replaces {}",
                    descriptor.route, descriptor.ident, descriptor.rel_path, displaced
                );
            }
        }

        let content = emit::render(&self.config, &descriptors, &table);
        let output = self.config.output_path();

        match fs::read_to_string(&output).await {
            Ok(existing) if existing == content => {
                debug!("meta map unchanged, skipping write");
                return Ok(GenerateOutcome::Unchanged);
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        fs::write(&output, &content).await?;
        info!("meta map generated ({} routes)", table.len());

        Ok(GenerateOutcome::Written {
            routes: table.len(),
        })
    }
}
