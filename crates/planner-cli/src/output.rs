use planner_core::ContentCalendar;
use serde::Serialize;

/// Table cells are clipped so long captions do not wreck the layout; JSON
/// and CSV output carry the full values.
const CELL_MAX: usize = 40;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect();
    println!("{}", header_row.join("  "));

    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| pad(cell, widths.get(i).copied().unwrap_or(0)))
            .collect();
        println!("{}", cells.join("  "));
    }
}

pub fn print_calendar(calendar: &ContentCalendar) {
    let headers = [
        "data", "pilar", "titulo", "formato", "gancho", "legenda", "cta", "hashtags",
    ];
    let rows: Vec<Vec<String>> = calendar
        .iter()
        .map(|item| {
            vec![
                item.date.clone(),
                clip(&item.pillar),
                clip(&item.title),
                item.format.to_string(),
                clip(&item.hook),
                clip(&item.caption),
                clip(&item.call_to_action),
                clip(&item.hashtags),
            ]
        })
        .collect();
    print_table(&headers, rows);
}

fn clip(text: &str) -> String {
    if text.chars().count() <= CELL_MAX {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(CELL_MAX - 1).collect();
        format!("{clipped}…")
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_leaves_short_text_alone() {
        assert_eq!(clip("curto"), "curto");
    }

    #[test]
    fn clip_bounds_long_text_with_ellipsis() {
        let long = "x".repeat(80);
        let clipped = clip(&long);
        assert_eq!(clipped.chars().count(), CELL_MAX);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn pad_counts_characters_not_bytes() {
        assert_eq!(pad("ré", 4), "ré  ");
    }
}
