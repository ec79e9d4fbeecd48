#![forbid(unsafe_code)]

//! JSONL manifest of the names each variant run will use.
//!
//! One line per descriptor, in expansion order, with a stable schema:
//!
//! ```json
//! {"event":"variant","index":0,"mode":"ios","direction":"ltr","theme":"light","title":"Foo - ios/ltr/light","screenshot":"foo-ios-ltr.png"}
//! ```
//!
//! The manifest only reports proposed names. Capturing or storing the images
//! is left to the caller.

use std::io::{self, Write};

use serde::Serialize;

use crate::dimension::{Direction, Mode, Theme};
use crate::variant::VariantDescriptor;

/// One manifest line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantRecord {
    pub event: &'static str,
    pub index: usize,
    pub mode: Mode,
    pub direction: Direction,
    pub theme: Theme,
    pub title: String,
    pub screenshot: String,
}

/// Build the manifest records without writing them.
#[must_use]
pub fn records(
    descriptors: &[VariantDescriptor],
    title: &str,
    file: &str,
) -> Vec<VariantRecord> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, desc)| {
            let config = desc.config();
            VariantRecord {
                event: "variant",
                index,
                mode: config.mode,
                direction: config.direction,
                theme: config.theme,
                title: desc.title(title),
                screenshot: desc.screenshot(file),
            }
        })
        .collect()
}

/// Write the manifest as JSONL, one record per line.
pub fn write_jsonl<W: Write>(
    descriptors: &[VariantDescriptor],
    title: &str,
    file: &str,
    mut writer: W,
) -> io::Result<()> {
    for record in records(descriptors, title, file) {
        serde_json::to_writer(&mut writer, &record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    tracing::debug!(records = descriptors.len(), "variant manifest written");
    Ok(())
}
