use std::{io::BufWriter, path::PathBuf};

use anyhow::Context;
use fs_err::File;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Writes `value` as pretty-printed JSON with 4-space indentation,
/// overwriting any existing file.
pub fn write_json<P: Into<PathBuf>, T: Serialize>(path: P, value: &T) -> anyhow::Result<()> {
    let path = path.into();
    let writer = BufWriter::new(File::create(&path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .with_context(|| format!("While writing JSON to {path:?}"))?;
    Ok(())
}
