//! Byte formatting command handler.

use serde::Serialize;
use tabled::Tabled;

use quecmanager_core::format_bytes;

use crate::cli::{BytesArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct FormattedBytes {
    bytes: u64,
    formatted: String,
}

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BytesRow {
    #[tabled(rename = "Bytes")]
    bytes: u64,
    #[tabled(rename = "Formatted")]
    formatted: String,
}

impl From<&FormattedBytes> for BytesRow {
    fn from(b: &FormattedBytes) -> Self {
        Self {
            bytes: b.bytes,
            formatted: b.formatted.clone(),
        }
    }
}

#[allow(clippy::unnecessary_wraps)]
pub fn handle(args: &BytesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let data: Vec<FormattedBytes> = args
        .bytes
        .iter()
        .map(|&bytes| FormattedBytes {
            bytes,
            formatted: format_bytes(bytes),
        })
        .collect();

    let out = output::render_list(&global.output, &data, |b| BytesRow::from(b), |b| {
        b.formatted.clone()
    });
    output::print_output(&out, global.quiet);
    Ok(())
}
