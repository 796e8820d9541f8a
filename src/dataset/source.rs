#[cfg(test)]
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use log::debug;
use crate::dataset::{NumericTable, PlotError};
/// The three files the upstream producer writes for one signal.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetPaths {
    pub signal: PathBuf,
    pub fft: PathBuf,
    pub windows: PathBuf,
}
pub fn dataset_paths(dir: &Path, name: &str) -> DatasetPaths {
    DatasetPaths {
        signal: dir.join(format!("{name}.txt")),
        fft: dir.join(format!("{name}_fft.txt")),
        windows: dir.join(format!("{name}_fft_only_windows.txt")),
    }
}
/// Trait representing somewhere the tables of a named signal can be read from.
pub trait DatasetSource {
    fn read_signal(&mut self, name: &str) -> Result<NumericTable, PlotError>;
    fn read_fft(&mut self, name: &str) -> Result<NumericTable, PlotError>;
    /// `Ok(None)` when no per-window results exist for `name`.
    fn read_windows(&mut self, name: &str) -> Result<Option<NumericTable>, PlotError>;
}
/// Reads `<name>.txt`, `<name>_fft.txt` and `<name>_fft_only_windows.txt` from a directory.
pub struct DirectorySource {
    root: PathBuf,
}
impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
    fn read_table(path: &Path) -> Result<NumericTable, PlotError> {
        Self::read_columns(path, usize::MAX)
    }
    fn read_columns(path: &Path, columns: usize) -> Result<NumericTable, PlotError> {
        debug!("reading {}", path.display());
        let file = File::open(path).map_err(|source| PlotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        NumericTable::parse_leading(BufReader::new(file), columns).map_err(|err| match err {
            PlotError::Io { source, .. } => PlotError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}
impl DatasetSource for DirectorySource {
    fn read_signal(&mut self, name: &str) -> Result<NumericTable, PlotError> {
        // one sample per line, only the first token counts
        Self::read_columns(&dataset_paths(&self.root, name).signal, 1)
    }
    fn read_fft(&mut self, name: &str) -> Result<NumericTable, PlotError> {
        Self::read_table(&dataset_paths(&self.root, name).fft)
    }
    fn read_windows(&mut self, name: &str) -> Result<Option<NumericTable>, PlotError> {
        match Self::read_table(&dataset_paths(&self.root, name).windows) {
            Ok(table) => Ok(Some(table)),
            Err(PlotError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}
/// In-memory source useful for tests.
#[cfg(test)]
#[derive(Default)]
pub struct ManualSource {
    signals: HashMap<String, NumericTable>,
    ffts: HashMap<String, NumericTable>,
    windows: HashMap<String, NumericTable>,
}
#[cfg(test)]
impl ManualSource {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_dataset(
        mut self,
        name: &str,
        signal: NumericTable,
        fft: NumericTable,
        windows: Option<NumericTable>,
    ) -> Self {
        self.signals.insert(name.to_owned(), signal);
        self.ffts.insert(name.to_owned(), fft);
        if let Some(windows) = windows {
            self.windows.insert(name.to_owned(), windows);
        }
        self
    }
    fn missing(name: &str, suffix: &str) -> PlotError {
        PlotError::Io {
            path: PathBuf::from(format!("{name}{suffix}")),
            source: std::io::Error::new(ErrorKind::NotFound, "no such dataset"),
        }
    }
}
#[cfg(test)]
impl DatasetSource for ManualSource {
    fn read_signal(&mut self, name: &str) -> Result<NumericTable, PlotError> {
        self.signals
            .get(name)
            .cloned()
            .ok_or_else(|| Self::missing(name, ".txt"))
    }
    fn read_fft(&mut self, name: &str) -> Result<NumericTable, PlotError> {
        self.ffts
            .get(name)
            .cloned()
            .ok_or_else(|| Self::missing(name, "_fft.txt"))
    }
    fn read_windows(&mut self, name: &str) -> Result<Option<NumericTable>, PlotError> {
        Ok(self.windows.get(name).cloned())
    }
}
