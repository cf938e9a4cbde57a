use std::collections::HashMap;

use log::debug;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Converts a Markdown body to HTML.
///
/// GFM tables, strikethrough and task lists are enabled. Every heading gets an
/// id derived from its text.
pub(crate) fn to_html(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut events: Vec<Event> = Parser::new_ext(body, options).collect();
    assign_heading_ids(&mut events);

    let mut body_html = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut body_html, events.into_iter());
    body_html
}

fn assign_heading_ids(events: &mut [Event]) {
    let mut slugger = Slugger::default();
    for i in 0..events.len() {
        let Event::Start(Tag::Heading { id: None, .. }) = &events[i] else {
            continue;
        };
        let slug = slugger.slug(&heading_text(&events[i + 1..]));
        debug!("heading id: {slug}");
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(slug));
        }
    }
}

/// Plain text of a heading, up to its closing tag.
fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Produces heading anchors unique within one document.
#[derive(Default)]
struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut slug = base.clone();
        if let Some(mut count) = self.seen.get(&base).copied() {
            loop {
                count += 1;
                slug = format!("{base}-{count}");
                if !self.seen.contains_key(&slug) {
                    break;
                }
            }
            self.seen.insert(base, count);
        }
        self.seen.insert(slug.clone(), 0);
        slug
    }
}

fn slugify(text: &str) -> String {
    text.to_lowercase()
        .trim()
        .chars()
        .filter(|c| !is_slug_punctuation(*c))
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

fn is_slug_punctuation(c: char) -> bool {
    matches!(c, '\u{2000}'..='\u{206F}' | '\u{2E00}'..='\u{2E7F}')
        || "\\'!\"#$%&()*+,./:;<=>?@[]^`{|}~".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        assert_eq!(to_html("Hello"), "<p>Hello</p>\n");
    }

    #[test]
    fn test_heading_ids() {
        let html = to_html("# Privacy Policy\n\n## What's new?\n\n## The `data` we keep");
        assert!(html.contains(r#"<h1 id="privacy-policy">Privacy Policy</h1>"#));
        assert!(html.contains(r#"<h2 id="whats-new">"#));
        assert!(html.contains(r#"id="the-data-we-keep""#));
    }

    #[test]
    fn test_duplicate_heading_ids() {
        let html = to_html("## Contact\n\n## Contact\n\n## Contact");
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"id="contact-1""#));
        assert!(html.contains(r#"id="contact-2""#));
    }

    #[test]
    fn test_heading_attribute_syntax_is_plain_text() {
        let html = to_html("## Cookies {#cookie-policy}");
        assert!(html.contains(r#"<h2 id="cookies-cookie-policy">Cookies {#cookie-policy}</h2>"#));
    }

    #[test]
    fn test_gfm_extensions() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~\n\n- [x] done\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_soft_break_is_kept() {
        assert_eq!(to_html("one\ntwo"), "<p>one\ntwo</p>\n");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Data Retention & Deletion "), "data-retention--deletion");
        assert_eq!(slugify("Section 1.2: Scope"), "section-12-scope");
        assert_eq!(slugify("snake_case-kept"), "snake_case-kept");
    }
}
