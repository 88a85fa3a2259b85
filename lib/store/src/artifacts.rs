use crate::{CatalogStore, Error, Result};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use savora_core::FlatIndex;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serialized catalog table, row-aligned with [`INDEX_FILE`]
pub const CATALOG_FILE: &str = "catalog.bin";
/// Serialized vector index, row-aligned with [`CATALOG_FILE`]
pub const INDEX_FILE: &str = "index.bin";

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| f.write_all(bytes))
        .map_err(|e| match e {
            atomicwrites::Error::Internal(err) | atomicwrites::Error::User(err) => Error::Io(err),
        })
}

/// Write both artifacts to `data_dir`.
///
/// The pair is only meaningful together; callers must not mix artifacts from
/// different ingestion runs. Writes are atomic so a crashed ingestion never
/// leaves a truncated file behind.
pub fn save_artifacts(data_dir: &Path, catalog: &CatalogStore, index: &FlatIndex) -> Result<()> {
    if catalog.len() != index.len() {
        return Err(Error::RowMismatch {
            catalog: catalog.len(),
            index: index.len(),
        });
    }

    std::fs::create_dir_all(data_dir)?;

    let catalog_path = data_dir.join(CATALOG_FILE);
    let catalog_bytes = bincode::serialize(catalog).map_err(|e| Error::Corrupt {
        path: catalog_path.clone(),
        detail: e.to_string(),
    })?;
    write_atomic(&catalog_path, &catalog_bytes)?;

    let index_path = data_dir.join(INDEX_FILE);
    let index_bytes = bincode::serialize(index).map_err(|e| Error::Corrupt {
        path: index_path.clone(),
        detail: e.to_string(),
    })?;
    write_atomic(&index_path, &index_bytes)?;

    info!(
        rows = catalog.len(),
        dim = index.dim(),
        "Artifacts saved to {}",
        data_dir.display()
    );
    Ok(())
}

fn read_artifact(path: PathBuf) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::ArtifactMissing(path));
    }
    Ok(std::fs::read(path)?)
}

/// Load both artifacts from `data_dir` and enforce row correspondence.
///
/// After a successful load, the catalog row count equals the index row
/// count; the recommendation pipeline relies on this.
pub fn load_artifacts(data_dir: &Path) -> Result<(CatalogStore, FlatIndex)> {
    let catalog_path = data_dir.join(CATALOG_FILE);
    let catalog_bytes = read_artifact(catalog_path.clone())?;
    let catalog: CatalogStore =
        bincode::deserialize(&catalog_bytes).map_err(|e| Error::Corrupt {
            path: catalog_path,
            detail: e.to_string(),
        })?;

    let index_path = data_dir.join(INDEX_FILE);
    let index_bytes = read_artifact(index_path.clone())?;
    let index: FlatIndex = bincode::deserialize(&index_bytes).map_err(|e| Error::Corrupt {
        path: index_path,
        detail: e.to_string(),
    })?;

    if catalog.len() != index.len() {
        return Err(Error::RowMismatch {
            catalog: catalog.len(),
            index: index.len(),
        });
    }

    info!(
        rows = catalog.len(),
        dim = index.dim(),
        "Artifacts loaded from {}",
        data_dir.display()
    );
    Ok((catalog, index))
}
