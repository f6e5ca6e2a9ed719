//! Post-processing step run after the bundle fields are reported.

use camino::Utf8PathBuf;
use importmanager_plugins::OperationBundle;
use thiserror::Error;
use tracing::{debug, warn};

/// Tracing target for post-processing.
const PROCESSOR_TARGET: &str = "importmanager_plugin_example::processor";

/// Post-processing abstraction, kept behind a trait so tests can substitute
/// their own behaviour.
pub trait PostProcessor {
    /// Processes a decoded bundle and returns the path to report, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the processor cannot complete its work.
    fn process(&self, bundle: &OperationBundle) -> Result<Option<Utf8PathBuf>, PostProcessError>;
}

/// Reports where the source file would land under the destination directory.
///
/// Only the path is computed; no file is moved or copied.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasenameRelocation;

impl PostProcessor for BasenameRelocation {
    fn process(&self, bundle: &OperationBundle) -> Result<Option<Utf8PathBuf>, PostProcessError> {
        let relocated = bundle.relocated_path();
        match &relocated {
            Some(path) => debug!(
                target: PROCESSOR_TARGET,
                relocated = %path,
                "computed relocated path"
            ),
            None => warn!(
                target: PROCESSOR_TARGET,
                source = bundle.source(),
                "source has no basename, skipping relocated path"
            ),
        }
        Ok(relocated)
    }
}

/// Errors raised by [`PostProcessor`] implementations.
#[derive(Debug, Error)]
pub enum PostProcessError {
    /// The processor failed for a reason of its own.
    #[error("{message}")]
    Failed {
        /// Description of the failure.
        message: String,
    },
}
