//! Markdown rendering and text-derived post fields

use pulldown_cmark::{html, Options, Parser};

/// Words per minute used for the reading-time estimate
const WORDS_PER_MINUTE: usize = 200;

/// Render markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_SMART_PUNCTUATION
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Parse excerpt from content (split by <!-- more -->).
/// Returns (excerpt, full content).
pub fn split_excerpt(content: &str) -> (Option<String>, String) {
    if let Some(pos) = content.find("<!-- more -->") {
        let excerpt = content[..pos].trim().to_string();
        let remaining = content[pos + 13..].trim().to_string();
        let full = format!("{}\n\n{}", excerpt, remaining);
        (Some(excerpt), full)
    } else {
        (None, content.to_string())
    }
}

/// Estimated reading time in whole minutes, never zero
pub fn reading_time(html: &str) -> usize {
    let words = count_words(html);
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Count words in HTML content (strips tags first)
fn count_words(html: &str) -> usize {
    let text = strip_html(html);
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else {
            in_word = false;
        }
    }

    count
}

/// Strip HTML tags from content
fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let html = render_markdown("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_split_excerpt() {
        let content = "This is excerpt.\n<!-- more -->\nThis is more content.";
        let (excerpt, full) = split_excerpt(content);
        assert_eq!(excerpt, Some("This is excerpt.".to_string()));
        assert!(full.contains("This is excerpt."));
        assert!(full.contains("This is more content."));
    }

    #[test]
    fn test_split_excerpt_without_marker() {
        let content = "No marker here.";
        let (excerpt, full) = split_excerpt(content);
        assert_eq!(excerpt, None);
        assert_eq!(full, "No marker here.");
    }

    #[test]
    fn test_reading_time_minimum_one_minute() {
        assert_eq!(reading_time("<p>short</p>"), 1);
        assert_eq!(reading_time(""), 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        // 201 words at 200 wpm reads as 2 minutes
        let words = vec!["word"; 201].join(" ");
        let html = format!("<p>{}</p>", words);
        assert_eq!(reading_time(&html), 2);
    }

    #[test]
    fn test_count_words_ignores_tags() {
        assert_eq!(count_words("<p>one two</p>"), 2);
    }
}
