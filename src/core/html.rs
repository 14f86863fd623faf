// src/core/html.rs

// Tolerant, case-insensitive tag slicing. Enough HTML for scoresheet pages;
// not a general parser.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Locate the next `<open ...> ... </close>` block at or after `from`.
/// Returns byte offsets (start of opener, end of closer).
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(open);
    let cl = to_lower(close);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + close.len();
    Some((start, end))
}

/// The opening-tag text of a block, without the surrounding angle brackets.
pub fn opener(block: &str) -> &str {
    let end = block.find('>').unwrap_or(block.len());
    block[..end].trim_start_matches('<')
}

/// Does the opening tag of `block` carry the given class?
/// Tolerates single quotes, double quotes, unquoted and multi-class values.
pub fn has_class(block: &str, class: &str) -> bool {
    let lc = to_lower(opener(block));
    lc.contains(&format!(r#"class="{}""#, class))
        || lc.contains(&format!(r#"class='{}'"#, class))
        || (lc.contains("class=") && lc.contains(class))
}

/// Text content of a block: tags stripped, entities and whitespace normalized.
pub fn inner_text(block: &str) -> String {
    let inner = match (block.find('>'), block.rfind('<')) {
        (Some(oe), Some(cs)) if cs > oe => &block[oe + 1..cs],
        _ => block,
    };

    let mut out = String::with_capacity(inner.len());
    let mut in_tag = false;
    for ch in inner.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&normalize_entities(&out))
}

/// Text of the first element in `doc` whose opening tag carries `class`,
/// whatever the tag name is.
pub fn first_text_with_class(doc: &str, class: &str) -> Option<String> {
    let lc = to_lower(doc);
    let needle = format!(r#"class="{}""#, to_lower(class));
    let alt = format!(r#"class='{}'"#, to_lower(class));
    let at = lc.find(&needle).or_else(|| lc.find(&alt))?;

    // Back up to the '<' that opens this tag, read its name, then slice to
    // the matching close tag.
    let lt = doc[..at].rfind('<')?;
    let name_end = doc[lt + 1..]
        .find(|c: char| !c.is_ascii_alphanumeric())
        .map(|i| lt + 1 + i)?;
    let tag = &doc[lt + 1..name_end];
    if tag.is_empty() {
        return None;
    }
    let close = format!("</{}>", to_lower(tag));
    let open_end = doc[at..].find('>')? + at + 1;
    let close_at = lc[open_end..].find(&close)? + open_end;
    Some(inner_text(&doc[lt..close_at + close.len()]))
}

/// Text of every `<td>` cell inside a table-row block, in order.
pub fn cell_texts(tr_block: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr_block, "<td", "</td>", pos) {
        cells.push(inner_text(&tr_block[td_s..td_e]));
        pos = td_e;
    }
    cells
}
