//! Plain-text reduction for rich-text fields.
//!
//! Descriptions come out of the admin's rich-text editor as HTML fragments.
//! The search predicate matches against what the user *reads*, so markup is
//! reduced to its text content first: tags dropped, common entities decoded,
//! whitespace collapsed.

/// Reduce an HTML fragment to its visible text.
///
/// Not a full HTML parser. Tags are dropped wholesale, named and decimal
/// numeric entities are decoded, runs of whitespace collapse to a single
/// space. Good enough for editor output; a malformed fragment degrades to
/// its raw characters rather than erroring.
pub fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                // Skip to the closing '>'; an unterminated tag eats the rest.
                for tag_ch in chars.by_ref() {
                    if tag_ch == '>' {
                        break;
                    }
                }
                // Tag boundaries separate words ("<p>a</p><p>b</p>").
                out.push(' ');
            }
            '&' => {
                let mut entity = String::new();
                let mut terminated = false;
                while let Some(&next) = chars.peek() {
                    if next == ';' {
                        chars.next();
                        terminated = true;
                        break;
                    }
                    // Entities are short; anything longer is literal text.
                    if entity.len() >= 8 || next == '&' || next == '<' {
                        break;
                    }
                    entity.push(next);
                    chars.next();
                }
                match decode_entity(&entity, terminated) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('&');
                        out.push_str(&entity);
                        if terminated {
                            out.push(';');
                        }
                    }
                }
            }
            ch if ch.is_whitespace() => out.push(' '),
            ch => out.push(ch),
        }
    }

    collapse_whitespace(&out)
}

fn decode_entity(entity: &str, terminated: bool) -> Option<char> {
    if !terminated {
        return None;
    }
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => entity
            .strip_prefix('#')
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(char::from_u32),
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_gap {
                out.push(' ');
                in_gap = true;
            }
        } else {
            out.push(ch);
            in_gap = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_tags() {
        assert_eq!(plain_text("<p>Battement <b>jambes</b></p>"), "Battement jambes");
    }

    #[test]
    fn tag_boundaries_separate_words() {
        assert_eq!(plain_text("<p>un</p><p>deux</p>"), "un deux");
    }

    #[test]
    fn decodes_common_entities() {
        assert_eq!(plain_text("50m &amp; 100m &#233;ducatifs"), "50m & 100m éducatifs");
    }

    #[test]
    fn keeps_unknown_entities_verbatim() {
        assert_eq!(plain_text("a &unknown; b"), "a &unknown; b");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(plain_text("  a \n\t b  "), "a b");
    }

    #[test]
    fn plain_input_is_untouched() {
        assert_eq!(plain_text("Pull buoy 4x50"), "Pull buoy 4x50");
    }

    #[test]
    fn unterminated_tag_swallows_the_tail() {
        assert_eq!(plain_text("avant <em class=x"), "avant");
    }
}
