use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `max_width` display columns, ending with "..." when
/// something was dropped.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

/// Rough number of rows `lines` take once wrapped at `max_width` columns.
pub fn estimate_text_height<'a, I>(lines: I, max_width: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let max_width = max_width.max(1);
    lines
        .into_iter()
        .map(|line| line.width().div_ceil(max_width).max(1))
        .sum()
}

pub fn calculate_max_scroll(content_height: usize, visible_height: usize) -> u16 {
    content_height
        .saturating_sub(visible_height)
        .min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_string(s, 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_multibyte() {
        let result = truncate_string("Élément générale décentralisée", 10);
        assert_eq!(result, "Élément...");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_estimate_text_height() {
        let lines = ["", "0123456789", "01234567890"];
        assert_eq!(estimate_text_height(lines, 10), 1 + 1 + 2);
    }

    #[test]
    fn test_calculate_max_scroll() {
        assert_eq!(calculate_max_scroll(30, 10), 20);
        assert_eq!(calculate_max_scroll(5, 10), 0);
    }
}
