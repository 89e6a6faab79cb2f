use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;
use crate::records::ExportDocuments;

pub const PROPS_FILE: &str = "props.json";
pub const NPCS_FILE: &str = "npcs.json";
pub const GIFTS_FILE: &str = "gifts.json";
pub const METADATA_FILE: &str = "metadata.json";

/// Write `value` as pretty JSON. The document is written next to `path` and
/// renamed into place, so a failed run never leaves a truncated file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ExportError> {
    let tmp = path.with_extension("json.tmp");
    {
        let mut out = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer_pretty(&mut out, value)?;
        out.write_all(b"\n")?;
        out.flush()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Write the four documents into `dir`, creating it if needed. Returns the
/// paths written.
pub fn write_documents(dir: &Path, docs: &ExportDocuments) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir)?;

    let props = dir.join(PROPS_FILE);
    write_json(&props, &docs.props)?;
    let npcs = dir.join(NPCS_FILE);
    write_json(&npcs, &docs.npcs)?;
    let gifts = dir.join(GIFTS_FILE);
    write_json(&gifts, &docs.gifts)?;
    let metadata = dir.join(METADATA_FILE);
    write_json(&metadata, &docs.metadata)?;

    Ok(vec![props, npcs, gifts, metadata])
}
