//! Text truncation and wrapping helpers.

/// Truncate to at most `max_len` characters, ending in "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated.trim_end())
    }
}

/// Wrap at word boundaries into at most `max_lines` lines of `width`
/// characters; the last line ends in "..." when text is left over.
pub fn wrap_words(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut words = text.split_whitespace().peekable();

    while let Some(word) = words.next() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if lines.len() == max_lines {
            let last = lines.pop().unwrap_or_default();
            lines.push(truncate_string(&format!("{last} {word}"), width));
            return lines;
        }
        current = truncate_string(word, width);
    }

    if !current.is_empty() {
        if lines.len() == max_lines {
            let last = lines.pop().unwrap_or_default();
            lines.push(truncate_string(&format!("{last} {current}"), width));
        } else {
            lines.push(current);
        }
    }
    lines
}

/// Join labels with `sep`, stopping before `max_len` characters and noting how
/// many were left out, e.g. `IEEE, ACM +2`.
pub fn join_limited(labels: &[String], sep: &str, max_len: usize) -> String {
    let mut out = String::new();
    for (i, label) in labels.iter().enumerate() {
        let candidate_len =
            out.chars().count() + if out.is_empty() { 0 } else { sep.len() } + label.chars().count();
        if candidate_len > max_len && !out.is_empty() {
            out.push_str(&format!(" +{}", labels.len() - i));
            return out;
        }
        if !out.is_empty() {
            out.push_str(sep);
        }
        out.push_str(label);
    }
    out
}
