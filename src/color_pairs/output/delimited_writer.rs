use std::io::Write;

use crate::color_pairs::common::error::{ColorPairsError, Result};
use crate::color_pairs::extract::PairRecord;
use crate::color_pairs::output::writer::PairWriter;

pub const DEFAULT_SEPARATOR: &str = ", ";

/// Writes one record per line: reference values then channel values, joined
/// by the separator. No header row.
pub struct DelimitedPairWriter {
    separator: String,
}

impl DelimitedPairWriter {
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn format_record(&self, record: &PairRecord) -> String {
        let mut line = String::with_capacity(record.field_count() * 5);
        for (i, value) in record.values().enumerate() {
            if i > 0 {
                line.push_str(&self.separator);
            }
            line.push_str(&value.to_string());
        }
        line.push('\n');
        line
    }
}

impl Default for DelimitedPairWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PairWriter for DelimitedPairWriter {
    fn write_record(&self, record: &PairRecord, output: &mut dyn Write) -> Result<()> {
        output
            .write_all(self.format_record(record).as_bytes())
            .map_err(|e| ColorPairsError::OutputWriteError(e.to_string()))
    }
}
