use super::*;

pub(super) fn catalog_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("catalog.json")
}

pub(super) fn load_catalog(data_dir: &std::path::Path) -> Result<CatalogData> {
    let path = catalog_path(data_dir);
    if !path.exists() {
        return Ok(CatalogData::default());
    }
    let bytes = std::fs::read(&path).context("read catalog.json")?;
    serde_json::from_slice(&bytes).context("parse catalog.json")
}

pub(super) fn persist_catalog(state: &AppState, data: &CatalogData) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(data).context("serialize catalog")?;
    write_atomic_overwrite(&catalog_path(&state.data_dir), &bytes).context("write catalog.json")
}

fn write_atomic_overwrite(path: &std::path::Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, bytes).with_context(|| format!("write {}", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| format!("rename into {}", path.display()))?;
    Ok(())
}
