use std::path::{Path, PathBuf};

use flexi_logger::LoggerHandle;

use crate::io::config_io::{self, ConfigError};
use crate::io::lock::{FileLock, LockError};
use crate::io::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::logging;
use crate::model::config::Config;
use crate::ops::store::{StoreError, TaskStore};

/// Resolved config, data location and logger for one process
pub struct Session {
    pub config: Config,
    /// `None` in ephemeral mode
    pub data_dir: Option<PathBuf>,
    _logger: Option<LoggerHandle>,
}

impl Session {
    /// Read the config and start logging. Ephemeral sessions touch no files
    /// besides the config, so they skip the logger too.
    pub fn open(
        config_path: Option<&Path>,
        data_dir: Option<&Path>,
        ephemeral: bool,
    ) -> Result<Self, ConfigError> {
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(config_io::config_path);
        let config = config_io::read_config_from(&config_path)?;

        if ephemeral {
            return Ok(Session {
                config,
                data_dir: None,
                _logger: None,
            });
        }

        let data_dir = config_io::resolve_data_dir(data_dir, &config);
        let level = logging::effective_level(
            &config.log.level,
            std::env::var(logging::LOG_ENV).ok().as_deref(),
        );
        // A broken logger must not keep the task list from opening
        let logger = match logging::init_logging(&level, &logging::log_dir(&data_dir)) {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("warning: logging disabled: {}", e);
                None
            }
        };

        Ok(Session {
            config,
            data_dir: Some(data_dir),
            _logger: logger,
        })
    }

    pub fn storage(&self) -> Box<dyn KeyValueStore> {
        match &self.data_dir {
            Some(dir) => Box::new(FileStore::new(dir)),
            None => Box::new(MemoryStore::new()),
        }
    }

    pub fn load_store(&self) -> Result<TaskStore, StoreError> {
        TaskStore::load(self.storage(), &self.config.categories)
    }

    /// Lock the data directory for a load-mutate-save. No-op when ephemeral.
    pub fn lock(&self) -> Result<Option<FileLock>, LockError> {
        self.data_dir
            .as_deref()
            .map(FileLock::acquire_default)
            .transpose()
    }
}
