use std::io::Write;

use crate::color_pairs::common::error::Result;
use crate::color_pairs::extract::PairRecord;

pub trait PairWriter {
    fn write_record(&self, record: &PairRecord, output: &mut dyn Write) -> Result<()>;
}
