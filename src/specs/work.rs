// src/specs/work.rs
//! Field extraction for one search result item.
//!
//! The ruleset is a fixed table: each column has its own selector and shaping
//! step, runs on its own, and yields `Some(value)` or `None`. Rules share no
//! state, so a missing element only empties its own column.
//!
//! The one multi-column rule is the title heading (`h4.heading`). A single
//! pass over its anchors fills title, link, authors and gifted_to, with the
//! "`[archived by X]`" text pattern taking precedence over `rel="author"`
//! anchors. When an item has several headings each is applied in turn and
//! later ones overwrite earlier ones.

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::config::consts::LIST_SEP;
use crate::core::html::{attr, flat_text, has_token, last_match, selector};
use crate::core::sanitize::{normalize_ws, remove_newlines, shield_fraction, strip_grouping};
use crate::specs::search::WorkFragment;
use crate::store::{Field, MetadataRecord};

/// How matches of a rule's selector become one value.
enum Shape {
    /// Text of the last match.
    Last,
    /// Texts of all matches, joined with `, `.
    All,
    /// Last match of the selector, then all matches of `inner` inside it,
    /// joined.
    LastGroup(Selector),
}

struct FieldRule {
    field: Field,
    select: Selector,
    shape: Shape,
    finish: fn(String) -> String,
}

impl FieldRule {
    fn new(field: Field, css: &'static str, shape: Shape) -> Self {
        Self { field, select: selector(css), shape, finish: std::convert::identity }
    }

    fn finish(mut self, f: fn(String) -> String) -> Self {
        self.finish = f;
        self
    }

    fn apply(&self, root: ElementRef<'_>) -> Option<String> {
        let raw = match &self.shape {
            Shape::Last => last_match(root, &self.select).map(flat_text),
            Shape::All => join_list(root.select(&self.select).map(flat_text)),
            Shape::LastGroup(inner) => last_match(root, &self.select)
                .and_then(|group| join_list(group.select(inner).filter(has_text).map(flat_text))),
        }?;
        Some((self.finish)(raw))
    }
}

/// Comma-joined list, or `None` when nothing matched.
fn join_list<I: IntoIterator<Item = String>>(items: I) -> Option<String> {
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() { None } else { Some(items.join(LIST_SEP)) }
}

fn has_text(el: &ElementRef<'_>) -> bool {
    el.text().any(|t| !t.is_empty())
}

/// Selectors used by the title-heading rule.
struct HeadingRule {
    heading: Selector,
    anchor: Selector,
    archived_by: Regex,
    author_archived_by: Regex,
}

/// Values one title heading contributes.
#[derive(Debug, Default, PartialEq, Eq)]
struct HeadingValues {
    title: Option<(String, String)>,
    archived_by: Option<String>,
    authors: Vec<String>,
    gifted_to: Vec<String>,
}

impl HeadingRule {
    fn new() -> Self {
        Self {
            heading: selector("h4.heading"),
            anchor: selector("a[href]"),
            archived_by: compile(r"\[archived by (.*)\]$"),
            author_archived_by: compile(r"by (.*) \[archived by .*\]$"),
        }
    }

    fn read(&self, heading: ElementRef<'_>, base_url: &str) -> HeadingValues {
        let mut out = HeadingValues::default();

        let text = normalize_ws(&remove_newlines(&flat_text(heading)));
        out.archived_by = self.archived_by.captures(&text).map(|c| s!(&c[1]));
        if out.archived_by.is_some() {
            if let Some(c) = self.author_archived_by.captures(&text) {
                // names end at the first bracket group
                let names = c[1].split(" [").next().unwrap_or_default();
                out.authors.extend(
                    names.split(',').map(str::trim).filter(|a| !a.is_empty()).map(String::from),
                );
            }
        }

        for a in heading.select(&self.anchor).filter(has_text) {
            let href = attr(a, "href").unwrap_or_default();
            let label = flat_text(a);
            if href.starts_with("/works") {
                out.title = Some((label, join!(base_url, href)));
            } else if href.starts_with("/gifts") || href.ends_with("/gifts") {
                out.gifted_to.push(label);
            } else if has_token(a, "rel", "author") && out.archived_by.is_none() {
                out.authors.push(label);
            }
        }
        out
    }

    fn apply(&self, root: ElementRef<'_>, base_url: &str, rec: &mut MetadataRecord) {
        for heading in root.select(&self.heading) {
            let v = self.read(heading, base_url);
            if let Some((title, link)) = v.title {
                rec.set(Field::Title, Some(title));
                rec.set(Field::TextLink, Some(link));
            }
            rec.set(Field::ArchivedBy, v.archived_by);
            rec.set(Field::Authors, join_list(v.authors));
            rec.set(Field::GiftedTo, join_list(v.gifted_to));
        }
    }
}

fn compile(pattern: &'static str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid pattern {pattern:?}: {e}"))
}

/// The complete per-item ruleset. Build once per run; `extract` is pure.
pub struct WorkRules {
    base_url: String,
    heading: HeadingRule,
    fields: Vec<FieldRule>,
}

impl WorkRules {
    pub fn new(base_url: impl Into<String>) -> Self {
        use Shape::*;
        let fields = vec![
            FieldRule::new(Field::LastUpdate, "p.datetime", Last),
            FieldRule::new(Field::DetailedWarnings, "span.text", Last),
            FieldRule::new(Field::Fandom, "h5.fandoms.heading", LastGroup(selector("a.tag[href]"))),
            FieldRule::new(Field::Characters, "li.characters", All),
            FieldRule::new(Field::Relationships, "li.relationships", All),
            FieldRule::new(Field::AdditionalTags, "li.freeforms", All),
            FieldRule::new(Field::Summary, "blockquote.userstuff.summary", Last).finish(|s| remove_newlines(&s)),
            FieldRule::new(Field::Language, "dl.stats dd.language", Last),
            FieldRule::new(Field::Words, "dl.stats dd.words", Last).finish(|s| strip_grouping(&s)),
            FieldRule::new(Field::Chapters, "dl.stats dd.chapters", Last).finish(|s| shield_fraction(&s)),
            FieldRule::new(Field::Comments, "dl.stats dd.comments a", Last),
            FieldRule::new(Field::Kudos, "dl.stats dd.kudos", Last),
            FieldRule::new(Field::Bookmarks, "dl.stats dd.bookmarks", Last),
            FieldRule::new(Field::Hits, "dl.stats dd.hits", Last),
            FieldRule::new(Field::RequiredTags, "ul.required-tags span.text", All),
        ];

        Self { base_url: base_url.into().trim_end_matches('/').to_string(), heading: HeadingRule::new(), fields }
    }

    /// One record per fragment, always; absent elements leave their column
    /// `None`.
    pub fn extract(&self, page: u32, frag: &WorkFragment<'_>) -> MetadataRecord {
        let mut rec = MetadataRecord::new(page, frag.id);
        for rule in &self.fields {
            rec.set(rule.field, rule.apply(frag.el));
        }
        self.heading.apply(frag.el, &self.base_url, &mut rec);
        rec
    }

    pub fn extract_all(&self, page: u32, frags: &[WorkFragment<'_>]) -> Vec<MetadataRecord> {
        frags.iter().map(|f| self.extract(page, f)).collect()
    }
}
