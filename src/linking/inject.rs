//! In-place internal link injection.
//!
//! Wraps matched phrases in anchor tags without disturbing the surrounding
//! markup. The matcher is byte-oriented and ASCII case-insensitive, which
//! mirrors how the phrases themselves are generated (titles, tags, category
//! names).

use tracing::debug;

use crate::core::config;
use crate::linking::phrases::linkable_phrases;
use crate::text;
use crate::types::{InjectionResult, RelatedPost};

/// Inject internal links for the given related posts into `content`.
///
/// At most one link per related post (first matching phrase wins), at most
/// `max_links` overall, and never more than one link per 200 words of content
/// regardless of how many candidates are supplied.
pub fn inject_internal_links(
    content: &str,
    related_posts: &[RelatedPost],
    max_links: usize,
) -> InjectionResult {
    let word_count = text::html_word_count(content);
    let cap = max_links.min(word_count / config::WORDS_PER_INJECTED_LINK);

    if cap == 0 || related_posts.is_empty() {
        return InjectionResult { content: content.to_string(), links_added: 0 };
    }

    let mut candidates: Vec<&RelatedPost> = related_posts.iter().collect();
    candidates.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));

    let base_path = config::blog_base_path();
    let mut output = content.to_string();
    let mut links_added = 0usize;

    for post in candidates {
        if links_added >= cap {
            break;
        }
        for phrase in linkable_phrases(post) {
            if let Some((start, end)) = find_linkable_span(&output, &phrase) {
                let matched = &output[start..end];
                let anchor = format!(
                    r#"<a href="{}/{}" class="internal-link" title="{}">{}</a>"#,
                    base_path, post.slug, post.title, matched
                );
                output.replace_range(start..end, &anchor);
                links_added += 1;
                debug!("Linked \"{}\" to /{}", phrase, post.slug);
                break;
            }
        }
    }

    InjectionResult { content: output, links_added }
}

/// First whole-word, case-insensitive occurrence of `phrase` that sits in
/// plain text: not inside a tag, and not inside an existing anchor.
fn find_linkable_span(content: &str, phrase: &str) -> Option<(usize, usize)> {
    let bytes = content.as_bytes();
    let needle = phrase.as_bytes();
    if needle.is_empty() || needle.len() > bytes.len() {
        return None;
    }

    let mut i = 0;
    while i + needle.len() <= bytes.len() {
        if content.is_char_boundary(i)
            && content.is_char_boundary(i + needle.len())
            && bytes[i..i + needle.len()].eq_ignore_ascii_case(needle)
            && is_word_boundary(bytes, i, i + needle.len())
            && !inside_tag(bytes, i)
            && !inside_anchor(bytes, i)
        {
            return Some((i, i + needle.len()));
        }
        i += 1;
    }
    None
}

fn is_word_boundary(bytes: &[u8], start: usize, end: usize) -> bool {
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

/// True when `pos` falls between a `<` and its closing `>`, i.e. inside a
/// tag's own markup rather than in text content.
fn inside_tag(bytes: &[u8], pos: usize) -> bool {
    for j in (0..pos).rev() {
        match bytes[j] {
            b'<' => return true,
            b'>' => return false,
            _ => {}
        }
    }
    false
}

/// True when the nearest preceding anchor tag is an unclosed `<a ...>`.
/// Text already wrapped in an anchor must not be linked again.
fn inside_anchor(bytes: &[u8], pos: usize) -> bool {
    for j in (0..pos).rev() {
        if bytes[j] != b'<' {
            continue;
        }
        let rest = &bytes[j + 1..pos];
        if let Some(&first) = rest.first() {
            if first == b'/' {
                if rest.len() >= 2
                    && rest[1].eq_ignore_ascii_case(&b'a')
                    && rest.get(2).map_or(true, |c| !c.is_ascii_alphanumeric())
                {
                    return false;
                }
            } else if first.eq_ignore_ascii_case(&b'a')
                && rest.get(1).map_or(true, |c| !c.is_ascii_alphanumeric())
            {
                return true;
            }
        }
    }
    false
}
