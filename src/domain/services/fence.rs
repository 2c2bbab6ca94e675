const FENCE: &str = "```";

/// Removes every Markdown code-fence delimiter, together with a language tag
/// written directly after it (`json`, `JSON`, `javascript`, ...), then trims
/// surrounding whitespace.
///
/// Models are told not to fence their JSON but regularly do anyway, so this
/// runs on every structured reply. Applying it to already clean text is a
/// no-op.
pub fn strip_fences(text: &str) -> String {
    let mut out = text.to_string();
    while let Some(start) = out.find(FENCE) {
        let after = start + FENCE.len();
        let tag_len = out[after..]
            .find(|c: char| !is_tag_char(c))
            .unwrap_or(out.len() - after);
        out.replace_range(start..after + tag_len, "");
    }
    out.trim().to_string()
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')
}
