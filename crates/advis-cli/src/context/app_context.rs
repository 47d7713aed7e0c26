use std::path::Path;
use std::sync::Arc;

use advis_config::AdvisConfig;
use advis_core::enums::TableKind;
use advis_data::{DirectorySource, TableRepository};
use advis_engine::{AdvisService, EngineSettings};
use anyhow::bail;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: Arc<AdvisService>,
    pub config: AdvisConfig,
}

impl AppContext {
    /// Apply flag overrides to `config` and build the service over the
    /// configured snapshot.
    pub fn init(mut config: AdvisConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(dir) = &flags.data_dir {
            config.data.dir = dir.to_string_lossy().into_owned();
        }
        if let Some(term) = flags.term {
            config.general.term_id = term;
        }

        let repository = build_repository(&config)?;
        tracing::debug!(source = %repository.describe_source(), "table source selected");

        let settings = EngineSettings {
            term_id: config.general.term_id,
            default_page_size: config.general.page_size,
        };
        let service = AdvisService::new(Arc::new(repository), settings);

        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }
}

fn build_repository(config: &AdvisConfig) -> anyhow::Result<TableRepository> {
    let Some(dir) = config.data.dir_path() else {
        return Ok(TableRepository::embedded());
    };
    if !dir.is_dir() {
        bail!(
            "data directory '{}' does not exist or is not a directory",
            dir.display()
        );
    }
    Ok(TableRepository::new(directory_source(&dir, config)))
}

fn directory_source(dir: &Path, config: &AdvisConfig) -> DirectorySource {
    TableKind::ALL
        .into_iter()
        .fold(DirectorySource::new(dir), |source, table| {
            source.with_file_name(table, config.data.file_name(table))
        })
}
