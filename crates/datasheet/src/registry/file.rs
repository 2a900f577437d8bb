//! Registry backed by JSON files on disk.
//!
//! ```text
//! <root>/
//! └── credit-risk/
//!     ├── 1.json
//!     └── 2.json
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{DatasheetError, Result};

use super::model::{validate_model_name, ModelHandle, Registration};
use super::provider::ModelRegistry;

/// Default registry directory, relative to the working directory.
pub const DEFAULT_REGISTRY_DIR: &str = ".datasheet/registry";

/// Versions tried past the first free-looking one before giving up.
const MAX_VERSION_CLAIMS: u32 = 16;

/// Configuration for a file-backed registry.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Directory holding one subdirectory per model.
    pub root: PathBuf,
    /// Hash the model artifact at registration.
    pub compute_digest: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_REGISTRY_DIR),
            compute_digest: true,
        }
    }
}

impl RegistryConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_digest(mut self, enabled: bool) -> Self {
        self.compute_digest = enabled;
        self
    }
}

/// Registry storing each model version as a JSON file.
#[derive(Debug, Clone)]
pub struct FileRegistry {
    config: RegistryConfig,
}

impl FileRegistry {
    /// Open a registry rooted at `root`. The directory is created on first
    /// registration.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self::with_config(RegistryConfig::new(root))
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    fn model_dir(&self, name: &str) -> PathBuf {
        self.config.root.join(name)
    }

    fn record_path(&self, name: &str, version: u32) -> PathBuf {
        self.model_dir(name).join(format!("{}.json", version))
    }

    /// Create the record file of the first free version at or after `first`.
    ///
    /// The file is opened with `create_new`, so two registrations racing for
    /// the same number never share it: the loser moves on to the next one.
    fn claim_version(&self, name: &str, first: u32) -> Result<(u32, File)> {
        let dir = self.model_dir(name);
        fs::create_dir_all(&dir).map_err(|e| {
            DatasheetError::Persistence(format!(
                "Failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        for version in first..first.saturating_add(MAX_VERSION_CLAIMS) {
            let path = self.record_path(name, version);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((version, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::debug!(model = name, version, "version already taken");
                }
                Err(e) => {
                    return Err(DatasheetError::Persistence(format!(
                        "Failed to create file '{}': {}",
                        path.display(),
                        e
                    )));
                }
            }
        }

        Err(DatasheetError::Persistence(format!(
            "No free version for '{}' in {}..{}",
            name,
            first,
            first.saturating_add(MAX_VERSION_CLAIMS)
        )))
    }
}

impl ModelRegistry for FileRegistry {
    fn register(&self, registration: Registration) -> Result<ModelHandle> {
        validate_model_name(&registration.name)?;

        if !registration.path.exists() {
            return Err(DatasheetError::ModelPath {
                path: registration.path.clone(),
            });
        }

        let digest = if self.config.compute_digest {
            Some(artifact_digest(&registration.path)?)
        } else {
            None
        };

        let next = self
            .versions(&registration.name)?
            .last()
            .map(|v| v + 1)
            .unwrap_or(1);
        let (version, file) = self.claim_version(&registration.name, next)?;

        let handle = ModelHandle::from_registration(registration, version, digest);
        let path = self.record_path(&handle.name, version);
        if let Err(e) = write_record(file, &path, &handle) {
            // A half-written record would fail every later lookup.
            let _ = fs::remove_file(&path);
            return Err(e);
        }

        tracing::debug!(
            model = %handle.name,
            version,
            root = %self.config.root.display(),
            "registered model"
        );
        Ok(handle)
    }

    fn lookup_version(&self, name: &str, version: u32) -> Result<ModelHandle> {
        validate_model_name(name)?;

        if !self.model_dir(name).is_dir() {
            return Err(DatasheetError::ModelNotFound {
                name: name.to_string(),
            });
        }

        let path = self.record_path(name, version);
        if !path.exists() {
            return Err(DatasheetError::VersionNotFound {
                name: name.to_string(),
                version,
            });
        }

        load_record(&path)
    }

    fn versions(&self, name: &str) -> Result<Vec<u32>> {
        validate_model_name(name)?;

        let dir = self.model_dir(name);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut versions: Vec<u32> = read_dir(&dir)?
            .into_iter()
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem()?.to_str()?.parse().ok())
            .collect();

        versions.sort_unstable();
        Ok(versions)
    }

    fn models(&self) -> Result<Vec<String>> {
        if !self.config.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut names: Vec<String> = read_dir(&self.config.root)?
            .into_iter()
            .filter(|path| path.is_dir())
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .filter(|name| validate_model_name(name).is_ok())
            .collect();

        names.sort();
        Ok(names)
    }

    fn name(&self) -> &str {
        "file"
    }
}

fn read_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| DatasheetError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    Ok(entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect())
}

fn write_record(file: File, path: &Path, handle: &ModelHandle) -> Result<()> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, handle).map_err(|e| {
        DatasheetError::Persistence(format!("Failed to serialize model record: {}", e))
    })?;

    writer.flush().map_err(|e| {
        DatasheetError::Persistence(format!(
            "Failed to write file '{}': {}",
            path.display(),
            e
        ))
    })
}

fn load_record(path: &Path) -> Result<ModelHandle> {
    let file = File::open(path).map_err(|e| {
        DatasheetError::Persistence(format!(
            "Failed to open file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        DatasheetError::Persistence(format!(
            "Failed to parse model record '{}': {}",
            path.display(),
            e
        ))
    })
}

/// SHA-256 of a model artifact.
///
/// A file hashes its bytes. A directory hashes each file's relative path
/// and bytes, in sorted path order, so the digest does not depend on
/// directory listing order.
pub fn artifact_digest(path: &Path) -> Result<String> {
    let mut hasher = Sha256::new();

    if path.is_dir() {
        let mut files = Vec::new();
        collect_files(path, &mut files)?;
        files.sort();

        for file in files {
            let relative = file.strip_prefix(path).unwrap_or(&file);
            let components: Vec<_> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            hasher.update(components.join("/").as_bytes());
            hasher.update([0u8]);
            hash_file(&file, &mut hasher)?;
        }
    } else {
        hash_file(path, &mut hasher)?;
    }

    Ok(format!("sha256:{:x}", hasher.finalize()))
}

/// Regular files under `dir`. Symlinked files count by their target;
/// symlinked directories are skipped so a link cycle cannot recurse forever.
fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| DatasheetError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| DatasheetError::Io {
            path: path.clone(),
            source: e,
        })?;

        if file_type.is_dir() {
            collect_files(&path, files)?;
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            files.push(path);
        }
    }
    Ok(())
}

/// Stream a file into `hasher` without loading it whole.
fn hash_file(path: &Path, hasher: &mut Sha256) -> Result<()> {
    let mut file = File::open(path).map_err(|e| DatasheetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    io::copy(&mut file, hasher).map_err(|e| DatasheetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
