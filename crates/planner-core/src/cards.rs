//! Mapping calendar rows onto board cards.

use crate::types::ContentItem;

/// Card names keep at most this many characters of the post title.
pub const CARD_TITLE_MAX: usize = 60;

/// Everything needed to create one board card. Computed up front so the
/// publishing loop only does network calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub name: String,
    pub description: String,
    /// Row date passed verbatim as the due date; the board service parses it.
    pub due: Option<String>,
    /// Candidate labels, already filtered of empties.
    pub labels: Vec<String>,
}

/// Build the card draft for one row: `date · prefix · truncated title` name,
/// a sectioned description, the row date as due date, and pillar + format as
/// labels.
pub fn card_draft(item: &ContentItem, prefix: &str) -> CardDraft {
    let title = truncate_chars(&item.title, CARD_TITLE_MAX);
    let name = format!("{} · {} · {}", item.date, prefix, title);

    let description = [
        format!("**Pilar:** {}", item.pillar),
        format!("**Formato:** {}", item.format),
        format!("**Gancho:** {}", item.hook),
        format!("\n**Legenda**\n{}", item.caption),
        format!("\n**CTA**\n{}", item.call_to_action),
        format!("\n**Hashtags**\n{}", item.hashtags),
    ]
    .join("\n");

    let due = if item.date.is_empty() {
        None
    } else {
        Some(item.date.clone())
    };

    let labels = [item.pillar.clone(), item.format.to_string()]
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect();

    CardDraft {
        name,
        description,
        due,
        labels,
    }
}

/// Truncate on a character boundary, not a byte boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
