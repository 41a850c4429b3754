//! Corpus snapshot loading.
//!
//! The engine never reads the page itself; something else walks the rendered
//! content and hands over a snapshot. This module is that collector for the
//! JSON boundary: it deserializes a snapshot in which every text field is
//! optional, drops half-formed entries, and trims what survives. The engine
//! can then assume every item has both text fields defined.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::{Corpus, FaqEntry, SectionEntry, SourceRef};

/// Raw snapshot as collected: any field may be missing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCorpus {
    #[serde(default)]
    faq: Vec<RawFaqEntry>,
    #[serde(default)]
    sections: Vec<RawSectionEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFaqEntry {
    question: Option<String>,
    answer: Option<String>,
    source: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSectionEntry {
    title: Option<String>,
    content: Option<String>,
    source: Option<String>,
}

/// Read and parse a corpus snapshot from a JSON file.
pub fn load_corpus(path: &Path) -> Result<Corpus, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_corpus(&raw)
}

/// Parse a corpus snapshot from JSON.
///
/// Entries missing either text field are dropped, the same way the page
/// collector skips FAQ items whose question or answer element is absent.
/// Surviving text is trimmed. Entries without a supplied `source` get a
/// synthesized anchor (`#faq-{i}` / `#section-{i}`) from their input position.
pub fn parse_corpus(raw: &str) -> Result<Corpus, String> {
    let parsed: RawCorpus =
        serde_json::from_str(raw).map_err(|e| format!("Invalid corpus JSON: {}", e))?;

    let faq = parsed
        .faq
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match (entry.question, entry.answer) {
            (Some(question), Some(answer)) => Some(FaqEntry {
                question: question.trim().to_string(),
                answer: answer.trim().to_string(),
                source: anchor_or(entry.source, "faq", i),
            }),
            _ => None,
        })
        .collect();

    let sections = parsed
        .sections
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match (entry.title, entry.content) {
            (Some(title), Some(content)) => Some(SectionEntry {
                title: title.trim().to_string(),
                content: content.trim().to_string(),
                source: anchor_or(entry.source, "section", i),
            }),
            _ => None,
        })
        .collect();

    Ok(Corpus { faq, sections })
}

fn anchor_or(source: Option<String>, kind: &str, index: usize) -> SourceRef {
    match source {
        Some(source) => SourceRef(source),
        None => SourceRef(format!("#{}-{}", kind, index)),
    }
}

#[cfg(feature = "unicode-normalization")]
impl Corpus {
    /// A copy of this corpus with diacritics stripped from every text field.
    ///
    /// `SourceRef`s are untouched. Runs before the snapshot reaches the
    /// engine; scoring itself never normalizes.
    pub fn without_diacritics(&self) -> Corpus {
        use crate::utils::strip_diacritics;

        Corpus {
            faq: self
                .faq
                .iter()
                .map(|entry| FaqEntry {
                    question: strip_diacritics(&entry.question),
                    answer: strip_diacritics(&entry.answer),
                    source: entry.source.clone(),
                })
                .collect(),
            sections: self
                .sections
                .iter()
                .map(|entry| SectionEntry {
                    title: strip_diacritics(&entry.title),
                    content: strip_diacritics(&entry.content),
                    source: entry.source.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_snapshot() {
        let corpus = parse_corpus(
            r##"{
                "faq": [
                    {"question": "How to apply?", "answer": "Fill the form.", "source": "#faq-apply"}
                ],
                "sections": [
                    {"title": "Timeline", "content": "Deadlines in March.", "source": "#timeline"}
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(corpus.faq.len(), 1);
        assert_eq!(corpus.sections.len(), 1);
        assert_eq!(corpus.faq[0].source.as_str(), "#faq-apply");
    }

    #[test]
    fn drops_entries_missing_a_text_field() {
        let corpus = parse_corpus(
            r##"{
                "faq": [
                    {"question": "Kept?", "answer": "Yes."},
                    {"question": "No answer element"},
                    {"answer": "No question element"}
                ],
                "sections": [
                    {"title": "Orphan title"}
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(corpus.faq.len(), 1);
        assert_eq!(corpus.faq[0].question, "Kept?");
        assert!(corpus.sections.is_empty());
    }

    #[test]
    fn synthesizes_anchors_from_input_position() {
        let corpus = parse_corpus(
            r#"{
                "faq": [
                    {"question": "a", "answer": "b"},
                    {"question": "c", "answer": "d"}
                ],
                "sections": [
                    {"title": "t", "content": "c"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(corpus.faq[0].source.as_str(), "#faq-0");
        assert_eq!(corpus.faq[1].source.as_str(), "#faq-1");
        assert_eq!(corpus.sections[0].source.as_str(), "#section-0");
    }

    #[test]
    fn trims_collected_text() {
        let corpus = parse_corpus(
            r#"{"faq": [{"question": "  padded  ", "answer": "\n answer \t"}]}"#,
        )
        .unwrap();
        assert_eq!(corpus.faq[0].question, "padded");
        assert_eq!(corpus.faq[0].answer, "answer");
    }

    #[test]
    fn empty_fields_survive_as_empty_strings() {
        let corpus =
            parse_corpus(r#"{"faq": [{"question": "q", "answer": ""}]}"#).unwrap();
        assert_eq!(corpus.faq.len(), 1);
        assert_eq!(corpus.faq[0].answer, "");
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_corpus("not json").unwrap_err();
        assert!(err.contains("Invalid corpus JSON"));
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn without_diacritics_strips_text_but_not_sources() {
        let corpus = parse_corpus(
            r##"{"faq": [{"question": "مِنْحَة", "answer": "a", "source": "#mīn"}]}"##,
        )
        .unwrap();
        let stripped = corpus.without_diacritics();
        assert_eq!(stripped.faq[0].question, "منحة");
        assert_eq!(stripped.faq[0].source.as_str(), "#mīn");
    }
}
