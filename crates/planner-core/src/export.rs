//! CSV export of a generated calendar.

use crate::error::Result;
use crate::types::ContentCalendar;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column order matches the generation schema.
const HEADER: &str = "data,pilar,titulo,formato,gancho,legenda,cta,hashtags";

/// Render the calendar as CSV: header row plus one row per item, hashtags
/// already flattened to a single field.
pub fn to_csv_string(calendar: &ContentCalendar) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for item in calendar.iter() {
        let fields = [
            item.date.as_str(),
            item.pillar.as_str(),
            item.title.as_str(),
            item.format.as_str(),
            item.hook.as_str(),
            item.caption.as_str(),
            item.call_to_action.as_str(),
            item.hashtags.as_str(),
        ];
        let row: Vec<String> = fields.iter().map(|f| escape(f)).collect();
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Write the CSV export to `path`, creating parent directories as needed.
pub fn write_csv(calendar: &ContentCalendar, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_csv_string(calendar).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Quote a field when it carries a separator, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
