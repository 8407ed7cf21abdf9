// crates/revoice-ui/src/helpers/format.rs
//
// UI-layer string utilities. These are purely about rendering strings in
// the UI (file sizes, truncation) and have no meaning outside a display
// context.

/// Format a byte count the way the selected-file cards show it:
/// `12.34 MB` from one megabyte up, `512.0 KB` below that.
pub fn format_size(bytes: u64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.2} MB", b / MB)
    } else {
        format!("{:.1} KB", b / KB)
    }
}

/// Truncate `s` to at most `max` bytes, cutting only on a valid UTF-8
/// character boundary.
///
/// `max` is a *byte* count, not a character count. For ASCII names (the
/// common case) the two are equivalent; for multibyte characters the
/// returned slice may be shorter than `max` characters but never splits a
/// codepoint.
pub fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    s.char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max)
        .last()
        .map(|i| &s[..i])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_above_a_megabyte_use_mb() {
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.50 MB");
    }

    #[test]
    fn small_sizes_use_kb() {
        assert_eq!(format_size(512 * 1024), "512.0 KB");
        assert_eq!(format_size(0), "0.0 KB");
    }

    #[test]
    fn short_string_is_unchanged() {
        assert_eq!(truncate("clip.mp4", 20), "clip.mp4");
    }

    #[test]
    fn long_ascii_is_clipped() {
        assert_eq!(truncate("hello world", 5), "hello");
    }

    #[test]
    fn multibyte_does_not_split_codepoint() {
        let t = truncate("élan", 1);
        assert!(std::str::from_utf8(t.as_bytes()).is_ok());
    }
}
