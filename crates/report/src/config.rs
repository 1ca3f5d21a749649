//! Report configuration.
//!
//! There is no external configuration source: file names and the low-stock
//! threshold are fixed, and both files live next to the executable.

use std::path::{Path, PathBuf};

use stockview_inventory::LOW_STOCK_THRESHOLD;

pub const INPUT_FILE_NAME: &str = "productos.csv";
pub const OUTPUT_FILE_NAME: &str = "resultado.txt";
pub const DEFAULT_CURRENCY: &str = "Q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub low_stock_threshold: i64,
    /// Prefix printed before every amount.
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_FILE_NAME),
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ReportConfig {
    /// Default file names, anchored in `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input_path: dir.join(INPUT_FILE_NAME),
            output_path: dir.join(OUTPUT_FILE_NAME),
            ..Self::default()
        }
    }

    /// Default file names in the directory of the running executable.
    ///
    /// Falls back to the working directory when the executable path cannot be
    /// resolved.
    pub fn beside_executable() -> Self {
        match std::env::current_exe() {
            Ok(exe) => match exe.parent() {
                Some(dir) => Self::in_dir(dir),
                None => Self::default(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "cannot resolve executable path; using working directory");
                Self::default()
            }
        }
    }

    /// File name of the input, for user-facing messages.
    pub fn input_display_name(&self) -> String {
        display_name(&self.input_path)
    }

    /// File name of the report, for user-facing messages.
    pub fn output_display_name(&self) -> String {
        display_name(&self.output_path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
