// @zen-component: CHAT-ReplyStructurer
//
//! Reply structurer. Turns free-text model output into a [`StructuredReply`].
//!
//! Each non-blank line is trimmed and classified by an ordered rule set
//! (first match wins):
//!
//! 1. [`LineKind::SectionHeader`] — `**Title**` or `Title:` with nothing after the colon
//! 2. [`LineKind::SubHeading`] — `**Label**` optionally followed by `:` and text
//! 3. [`LineKind::Bullet`] — `- item` or `* item`
//! 4. [`LineKind::Plain`] — anything else
//!
//! The lines are then folded into sections. Lines seen before the first
//! section header have nowhere to go and are dropped.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ContentItem, Section, StructuredReply};

/// Summary used when the model produced no text at all.
pub const NO_RESPONSE_SUMMARY: &str = "No response generated.";

static BOLD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+?)\*\*$").expect("bold header regex"));
static COLON_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?):$").expect("colon header regex"));
static SUBHEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+?)\*\*:?\s*(.*)").expect("subheading regex"));

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    SectionHeader { title: &'a str },
    SubHeading { label: &'a str, text: &'a str },
    Bullet { text: &'a str },
    Plain { text: &'a str },
}

/// Classify a trimmed, non-blank line.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let header = BOLD_HEADER
        .captures(line)
        .or_else(|| COLON_HEADER.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|title| !title.is_empty());
    if let Some(title) = header {
        return LineKind::SectionHeader { title };
    }

    if let Some(caps) = SUBHEADING.captures(line) {
        let label = caps.get(1).map_or("", |m| m.as_str().trim());
        if !label.is_empty() {
            let text = caps.get(2).map_or("", |m| m.as_str().trim());
            return LineKind::SubHeading { label, text };
        }
    }

    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return LineKind::Bullet { text: rest.trim() };
    }

    LineKind::Plain { text: line }
}

/// Structure raw model output. Never fails.
///
/// Blank input yields the [`NO_RESPONSE_SUMMARY`] sentinel. Otherwise the
/// summary is the text of the first item of the first section, or empty when
/// no section collected any content.
pub fn structure_reply(raw: &str) -> StructuredReply {
    if raw.trim().is_empty() {
        return StructuredReply::sentinel(NO_RESPONSE_SUMMARY);
    }

    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify_line)
        .fold(Cursor::default(), Cursor::step)
        .finish()
}

/// Where continuation lines go.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Subheading {
    #[default]
    Closed,
    /// The last item of the open section is a sub-heading that absorbs lines.
    Open,
    /// A sub-heading arrived before any section; it and its lines are lost.
    Orphaned,
}

#[derive(Debug, Default)]
struct Cursor {
    sections: Vec<Section>,
    current: Option<Section>,
    subheading: Subheading,
}

impl Cursor {
    fn step(mut self, kind: LineKind<'_>) -> Self {
        match kind {
            LineKind::SectionHeader { title } => {
                if let Some(section) = self.current.take() {
                    self.sections.push(section);
                }
                self.current = Some(Section {
                    title: title.to_string(),
                    content: Vec::new(),
                });
                self.subheading = Subheading::Closed;
            }
            LineKind::SubHeading { label, text } => match self.current.as_mut() {
                Some(section) => {
                    section
                        .content
                        .push(ContentItem::with_subheading(label, text));
                    self.subheading = Subheading::Open;
                }
                None => self.subheading = Subheading::Orphaned,
            },
            LineKind::Bullet { text } => match self.subheading {
                Subheading::Open => self.append(&format!("\n- {text}")),
                Subheading::Orphaned => {}
                Subheading::Closed => self.push_plain(format!("- {text}")),
            },
            LineKind::Plain { text } => match self.subheading {
                Subheading::Open => self.append(&format!(" {text}")),
                Subheading::Orphaned => {}
                Subheading::Closed => self.push_plain(text.to_string()),
            },
        }
        self
    }

    fn append(&mut self, suffix: &str) {
        if let Some(item) = self
            .current
            .as_mut()
            .and_then(|section| section.content.last_mut())
        {
            item.text.push_str(suffix);
        }
    }

    fn push_plain(&mut self, text: String) {
        if let Some(section) = self.current.as_mut() {
            section.content.push(ContentItem::plain(text));
        }
    }

    fn finish(mut self) -> StructuredReply {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        let summary = self
            .sections
            .first()
            .and_then(|section| section.content.first())
            .map(|item| item.text.clone())
            .unwrap_or_default();
        StructuredReply {
            summary,
            sections: self.sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_sentinel() {
        assert_eq!(
            structure_reply(""),
            StructuredReply::sentinel(NO_RESPONSE_SUMMARY)
        );
        assert_eq!(
            structure_reply("  \n\t\n"),
            StructuredReply::sentinel(NO_RESPONSE_SUMMARY)
        );
    }

    #[test]
    fn bold_line_opens_section_and_bullets_become_items() {
        let reply = structure_reply("**Eligibility**\nMust be 18+\n- valid ID\n- proof of address");

        assert_eq!(reply.sections.len(), 1);
        let section = &reply.sections[0];
        assert_eq!(section.title, "Eligibility");
        assert_eq!(
            section.content,
            vec![
                ContentItem::plain("Must be 18+"),
                ContentItem::plain("- valid ID"),
                ContentItem::plain("- proof of address"),
            ]
        );
        assert_eq!(reply.summary, "Must be 18+");
    }

    #[test]
    fn colon_lines_open_sections() {
        let reply =
            structure_reply("Documents required:\n- Aadhaar card\nSteps to apply :\nVisit the portal");

        let titles: Vec<&str> = reply.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Documents required", "Steps to apply"]);
        assert_eq!(reply.sections[0].content, vec![ContentItem::plain("- Aadhaar card")]);
        assert_eq!(reply.sections[1].content, vec![ContentItem::plain("Visit the portal")]);
    }

    #[test]
    fn subheading_accumulates_following_lines() {
        let raw = "**Scheme Overview**\n\
                   **What it is:** A pension scheme\n\
                   for senior citizens.\n\
                   - Monthly payout\n\
                   **Eligibility**: Age 60+";
        let reply = structure_reply(raw);

        assert_eq!(reply.sections.len(), 1);
        assert_eq!(
            reply.sections[0].content,
            vec![
                ContentItem::with_subheading(
                    "What it is:",
                    "A pension scheme for senior citizens.\n- Monthly payout"
                ),
                ContentItem::with_subheading("Eligibility", "Age 60+"),
            ]
        );
        assert_eq!(
            reply.summary,
            "A pension scheme for senior citizens.\n- Monthly payout"
        );
    }

    #[test]
    fn bare_bold_or_colon_lines_are_headers() {
        let reply = structure_reply("Overview:\n**Fees**:\nNone at all");
        // "**Fees**:" ends with a colon, so it is a section header.
        assert_eq!(reply.sections.len(), 2);
        assert_eq!(reply.sections[1].title, "**Fees**");

        let reply = structure_reply("Overview:\n**Fees** \nNone at all");
        assert_eq!(reply.sections[1].title, "Fees");
    }

    #[test]
    fn new_section_closes_open_subheading() {
        let reply = structure_reply("**A**\n**Sub:** x\n**B**\nplain");

        assert_eq!(reply.sections.len(), 2);
        assert_eq!(
            reply.sections[0].content,
            vec![ContentItem::with_subheading("Sub:", "x")]
        );
        assert_eq!(reply.sections[1].content, vec![ContentItem::plain("plain")]);
    }

    #[test]
    fn lines_before_first_section_are_dropped() {
        let reply = structure_reply("Here is some help.\n- a bullet\n**Title**\nBody");

        assert_eq!(reply.sections.len(), 1);
        assert_eq!(reply.sections[0].content, vec![ContentItem::plain("Body")]);
        assert_eq!(reply.summary, "Body");
    }

    #[test]
    fn orphaned_subheading_swallows_its_lines() {
        let reply = structure_reply("**Note:** careful\nmore text\n- bullet\n**Section**\nreal");

        assert_eq!(reply.sections.len(), 1);
        assert_eq!(reply.sections[0].title, "Section");
        assert_eq!(reply.sections[0].content, vec![ContentItem::plain("real")]);
    }

    #[test]
    fn text_without_sections_has_empty_summary() {
        let reply = structure_reply("Just a sentence.\nAnd another one.");
        assert_eq!(reply, StructuredReply::default());
    }

    #[test]
    fn header_without_content_gives_empty_summary() {
        let reply = structure_reply("**Only a title**");
        assert_eq!(reply.summary, "");
        assert_eq!(reply.sections.len(), 1);
        assert!(reply.sections[0].content.is_empty());
    }

    #[test]
    fn starred_bullets_are_normalised_to_dashes() {
        let reply = structure_reply("List:\n*   first\n* second");
        assert_eq!(
            reply.sections[0].content,
            vec![ContentItem::plain("- first"), ContentItem::plain("- second")]
        );
    }

    #[test]
    fn handles_crlf_and_indentation() {
        let reply = structure_reply("  Title:\r\n    line one\r\n\r\n");
        assert_eq!(reply.sections[0].title, "Title");
        assert_eq!(reply.sections[0].content, vec![ContentItem::plain("line one")]);
    }

    #[test]
    fn every_colon_terminated_line_becomes_a_titled_section() {
        let raw = "Intro text\nRights:\nSomething\n- x\nRemedies available  :\nmore";
        let reply = structure_reply(raw);
        for expected in ["Rights", "Remedies available"] {
            assert!(
                reply.sections.iter().any(|s| s.title == expected),
                "missing section {expected}"
            );
        }
    }

    #[test]
    fn section_titles_are_never_empty() {
        let reply = structure_reply("Start:\n** **\n**x**\n- y");
        assert!(reply.sections.iter().all(|s| !s.title.is_empty()));
        assert_eq!(reply.sections[0].content, vec![ContentItem::plain("** **")]);
    }

    #[test]
    fn classification_precedence() {
        assert_eq!(
            classify_line("**Eligibility**"),
            LineKind::SectionHeader { title: "Eligibility" }
        );
        assert_eq!(
            classify_line("**Eligibility:**"),
            LineKind::SectionHeader { title: "Eligibility:" }
        );
        assert_eq!(
            classify_line("- Required documents:"),
            LineKind::SectionHeader { title: "- Required documents" }
        );
        assert_eq!(
            classify_line("**Fee**: Rs. 10"),
            LineKind::SubHeading { label: "Fee", text: "Rs. 10" }
        );
        assert_eq!(classify_line("* item"), LineKind::Bullet { text: "item" });
        assert_eq!(classify_line("-item"), LineKind::Plain { text: "-item" });
        assert_eq!(
            classify_line("Call 1800: toll free"),
            LineKind::Plain { text: "Call 1800: toll free" }
        );
    }
}
