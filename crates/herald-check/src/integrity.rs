//! Content-integrity checker.
//!
//! Compares an original document against an AI-modified candidate. Each of
//! the eight sub-checks either passes or appends exactly one issue string
//! and clears its flag in [`IntegrityDetails`].

use std::collections::HashSet;
use std::sync::LazyLock;

use herald_core::{IntegrityCheckResult, IntegrityDetails};
use regex::Regex;

use crate::html;

static KEY_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[А-Яа-яЁё\w\s]{10,50}").expect("static pattern should compile")
});

/// Share of original words that must survive.
pub const WORD_SIMILARITY_THRESHOLD: f64 = 0.75;
/// Share of original key phrases that must survive.
pub const KEY_PHRASE_THRESHOLD: f64 = 0.6;
/// Images and links may drop to this share of the original count.
pub const COUNT_TOLERANCE: f64 = 0.8;
/// Inline `style` attributes may drop to this share of the original count.
pub const STYLE_TOLERANCE: f64 = 0.7;

const META_MARKERS: [&str; 2] = ["charset", "viewport"];

/// Compare `original` with `candidate`. Pure.
#[must_use]
pub fn check_integrity(original: &str, candidate: &str) -> IntegrityCheckResult {
    let mut issues = Vec::new();
    let mut details = IntegrityDetails::default();

    details.title_match = record(&mut issues, check_title(original, candidate));
    details.main_text_match = record(&mut issues, check_main_text(original, candidate));
    details.image_count_match = record(&mut issues, check_images(original, candidate));
    details.link_count_match = record(&mut issues, check_links(original, candidate));
    details.cta_buttons_match = record(&mut issues, check_cta_buttons(original, candidate));
    details.structure_valid = record(&mut issues, check_structure(candidate));
    details.meta_tags_match = record(&mut issues, check_meta_tags(original, candidate));
    details.css_integrity_match = record(&mut issues, check_css(original, candidate));

    if !issues.is_empty() {
        tracing::debug!(?issues, "integrity check failed");
    }
    IntegrityCheckResult::from_parts(issues, details)
}

/// Append a check's issue; the check passed iff it produced none.
fn record(issues: &mut Vec<String>, found: Option<String>) -> bool {
    match found {
        Some(issue) => {
            issues.push(issue);
            false
        }
        None => true,
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        1.0
    } else {
        part as f64 / whole as f64
    }
}

#[allow(clippy::cast_precision_loss)]
fn below_tolerance(original: usize, candidate: usize, tolerance: f64) -> bool {
    original > 0 && (candidate as f64) < (original as f64 * tolerance).max(1.0)
}

fn check_title(original: &str, candidate: &str) -> Option<String> {
    let original_title = html::extract_title(original)?;
    match html::extract_title(candidate) {
        Some(candidate_title)
            if candidate_title == original_title
                || candidate_title.contains(&original_title)
                || original_title.contains(&candidate_title) =>
        {
            None
        }
        Some(candidate_title) => Some(format!(
            "Title changed: \"{original_title}\" → \"{candidate_title}\""
        )),
        None => Some(format!("Title removed: \"{original_title}\"")),
    }
}

/// Lower-cased words longer than two characters, numbers excluded.
fn significant_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 2 && !w.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

fn key_phrases(text: &str) -> Vec<&str> {
    KEY_PHRASE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Word overlap (duplicates counted in the denominator) and key-phrase
/// retention between the two visible texts.
#[must_use]
pub fn text_similarity(original: &str, candidate: &str) -> (f64, f64) {
    let original_text = html::strip_tags(original);
    let candidate_text = html::strip_tags(candidate);

    let original_words = significant_words(&original_text);
    let candidate_words: HashSet<String> = significant_words(&candidate_text).into_iter().collect();
    let matched = original_words
        .iter()
        .filter(|w| candidate_words.contains(*w))
        .count();
    let word_similarity = ratio(matched, original_words.len());

    let candidate_lower = candidate_text.to_lowercase();
    let phrases = key_phrases(&original_text);
    let found = phrases
        .iter()
        .filter(|p| candidate_text.contains(**p) || candidate_lower.contains(&p.to_lowercase()))
        .count();
    let key_phrase_similarity = ratio(found, phrases.len());

    (word_similarity, key_phrase_similarity)
}

fn check_main_text(original: &str, candidate: &str) -> Option<String> {
    let (words, phrases) = text_similarity(original, candidate);
    if words > WORD_SIMILARITY_THRESHOLD && phrases > KEY_PHRASE_THRESHOLD {
        None
    } else {
        Some(format!(
            "Main text content changed significantly (word similarity {:.1}%, key phrases {:.1}%)",
            words * 100.0,
            phrases * 100.0
        ))
    }
}

/// Count and source problems are folded into one issue.
fn check_images(original: &str, candidate: &str) -> Option<String> {
    let mut problems = Vec::new();
    let original_count = html::count_images(original);
    let candidate_count = html::count_images(candidate);
    if below_tolerance(original_count, candidate_count, COUNT_TOLERANCE) {
        problems.push(format!(
            "Image count decreased significantly: {original_count} → {candidate_count}"
        ));
    }

    let original_sources = html::img_sources(original);
    if !original_sources.is_empty() {
        let candidate_sources = html::img_sources(candidate);
        let preserved = original_sources
            .iter()
            .filter(|src| {
                candidate_sources
                    .iter()
                    .any(|c| c.contains(**src) || src.contains(*c))
            })
            .count();
        if ratio(preserved, original_sources.len()) < COUNT_TOLERANCE {
            problems.push(format!(
                "Original images replaced or removed: {preserved} of {} sources preserved",
                original_sources.len()
            ));
        }
    }
    (!problems.is_empty()).then(|| problems.join("; "))
}

fn check_links(original: &str, candidate: &str) -> Option<String> {
    let original_count = html::count_links(original);
    let candidate_count = html::count_links(candidate);
    if below_tolerance(original_count, candidate_count, COUNT_TOLERANCE) {
        Some(format!(
            "Link count decreased significantly: {original_count} → {candidate_count}"
        ))
    } else {
        None
    }
}

fn check_cta_buttons(original: &str, candidate: &str) -> Option<String> {
    let original_count = html::count_cta_buttons(original);
    let candidate_count = html::count_cta_buttons(candidate);
    if original_count > 0 && candidate_count < original_count {
        Some(format!(
            "CTA buttons lost: {original_count} → {candidate_count}"
        ))
    } else {
        None
    }
}

fn check_structure(candidate: &str) -> Option<String> {
    let missing = html::missing_tags(candidate, &html::STRUCTURE_TAGS);
    if missing.is_empty() {
        None
    } else {
        Some(format!("HTML structure broken: missing {}", missing.join(", ")))
    }
}

fn meta_marker_count(document: &str) -> usize {
    html::head_content(document).map_or(0, |head| {
        let head = head.to_ascii_lowercase();
        META_MARKERS.iter().filter(|m| head.contains(*m)).count()
    })
}

fn check_meta_tags(original: &str, candidate: &str) -> Option<String> {
    let original_count = meta_marker_count(original);
    let candidate_count = meta_marker_count(candidate);
    if candidate_count < original_count {
        Some(format!(
            "Meta tags lost: {original_count} → {candidate_count} (charset/viewport)"
        ))
    } else {
        None
    }
}

#[allow(clippy::cast_precision_loss)]
fn check_css(original: &str, candidate: &str) -> Option<String> {
    let original_count = html::count_style_attributes(original);
    let candidate_count = html::count_style_attributes(candidate);
    if original_count > 0 && (candidate_count as f64) < original_count as f64 * STYLE_TOLERANCE {
        Some(format!(
            "Inline styles removed: {original_count} → {candidate_count}"
        ))
    } else {
        None
    }
}
