use crate::error::Result;
use crate::types::OpgRecord;
use std::path::Path;

/// Writes records to a CSV file, one row per record
///
/// Columns follow the [`OpgRecord`] field order; absent measurements
/// become empty cells. Returns the number of rows written.
pub fn write_csv<'a, P, I>(records: I, path: P) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a OpgRecord>,
{
    let mut writer = csv::Writer::from_path(path)?;
    let mut count = 0;
    for record in records {
        writer.serialize(record)?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
