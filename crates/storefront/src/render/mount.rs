//! Replace the content of the product container inside an HTML document.

use crate::error::RenderError;

/// Replace the inner markup of the element whose `id` is `container_id`.
///
/// The container's own tag and attributes are kept; everything between its
/// opening and matching closing tag is replaced by `fragment`.
///
/// # Errors
///
/// Returns [`RenderError::MissingContainer`] if no element carries the id and
/// [`RenderError::UnclosedContainer`] if the element is never closed.
pub fn mount(document: &str, container_id: &str, fragment: &str) -> Result<String, RenderError> {
    let missing = || RenderError::MissingContainer(container_id.to_string());
    let unclosed = || RenderError::UnclosedContainer(container_id.to_string());

    let attr_at = find_id_attribute(document, container_id).ok_or_else(missing)?;
    let tag_start = document
        .get(..attr_at)
        .and_then(|head| head.rfind('<'))
        .ok_or_else(missing)?;
    let tag_name: String = document
        .get(tag_start + 1..)
        .unwrap_or_default()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    if tag_name.is_empty() {
        return Err(missing());
    }

    let open_end = document
        .get(attr_at..)
        .and_then(|tail| tail.find('>'))
        .map(|offset| attr_at + offset + 1)
        .ok_or_else(unclosed)?;
    let close_start = find_matching_close(document, open_end, &tag_name).ok_or_else(unclosed)?;

    let head = document.get(..open_end).ok_or_else(unclosed)?;
    let tail = document.get(close_start..).ok_or_else(unclosed)?;
    Ok(format!("{head}{fragment}{tail}"))
}

/// Byte offset of the `id` attribute whose value is `id`.
///
/// Accepts double-quoted, single-quoted, and unquoted values with optional
/// whitespace around `=`. The attribute name matches in any case.
fn find_id_attribute(document: &str, id: &str) -> Option<usize> {
    let lowered = document.to_ascii_lowercase();
    lowered
        .match_indices("id")
        .map(|(at, _)| at)
        .filter(|&at| {
            document
                .get(..at)
                .and_then(|head| head.chars().next_back())
                .is_some_and(char::is_whitespace)
        })
        .find(|&at| {
            document
                .get(at + 2..)
                .and_then(attribute_value)
                .is_some_and(|value| value == id)
        })
}

/// The value of an attribute, given the text right after its name.
fn attribute_value(after_name: &str) -> Option<&str> {
    let rest = after_name.trim_start().strip_prefix('=')?.trim_start();
    match rest.chars().next()? {
        quote @ ('"' | '\'') => {
            let quoted = rest.get(1..)?;
            quoted.find(quote).and_then(|end| quoted.get(..end))
        }
        _ => {
            let end = rest
                .find(|c: char| c.is_whitespace() || c == '>')
                .unwrap_or(rest.len());
            rest.get(..end)
        }
    }
}

/// Byte offset of the `</tag>` closing the element opened just before `from`.
fn find_matching_close(document: &str, from: usize, tag: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut cursor = from;
    loop {
        let at = cursor + document.get(cursor..)?.find('<')?;
        let rest = document.get(at + 1..)?;
        if let Some(closing) = rest.strip_prefix('/') {
            if starts_with_tag(closing, tag) {
                depth -= 1;
                if depth == 0 {
                    return Some(at);
                }
            }
        } else if starts_with_tag(rest, tag) {
            depth += 1;
        }
        cursor = at + 1;
    }
}

fn starts_with_tag(s: &str, tag: &str) -> bool {
    let Some(name) = s.get(..tag.len()) else {
        return false;
    };
    name.eq_ignore_ascii_case(tag)
        && s
            .get(tag.len()..)
            .and_then(|after| after.chars().next())
            .is_none_or(|c| c.is_whitespace() || c == '>' || c == '/')
}
