//! Hashtag post-processing for generated rows.

/// Merge model-supplied tags with the configured base set.
///
/// Tags are trimmed and lowercased, deduplicated preserving first-seen order,
/// and any base tag not already present is appended after the model's tags.
/// The result is the single space-joined string shown in the table and
/// exported to CSV.
pub fn merge_hashtags(model_tags: &[String], base_tags: &[String]) -> String {
    let mut merged: Vec<String> = Vec::new();
    for tag in model_tags.iter().chain(base_tags.iter()) {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || merged.iter().any(|t| *t == tag) {
            continue;
        }
        merged.push(tag);
    }
    merged.join(" ")
}
