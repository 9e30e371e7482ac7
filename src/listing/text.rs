/// Longest title shown on a thumbnail before it is shortened.
pub const TITLE_LIMIT: usize = 22;

const ELLIPSIS: &str = "...";

/// Trimmed `text`, cut to `limit - 3` characters plus `"..."` when longer than `limit`.
pub fn clamp_title(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Whether the page header carries its "scrolled" class at `scroll_y`.
pub fn header_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
#[path = "../../tests/unit/listing/text.rs"]
mod tests;
