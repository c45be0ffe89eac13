//! Post-hoc description of what an accepted rewrite contains.
//!
//! Each marker is an independent predicate over the final HTML. A match only
//! says the marker is present, not that the model put it there.

use std::sync::LazyLock;

use herald_core::requirements::BrandColors;
use regex::Regex;

/// Used when no marker matches.
pub const GENERIC_ENHANCEMENT: &str = "Применены улучшения CSS и вёрстки";

struct Marker {
    description: &'static str,
    detect: fn(&str) -> bool,
}

static DARK_MODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)prefers-color-scheme\s*:\s*dark").expect("static pattern should compile")
});
static MOBILE_MEDIA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)@media[^{]*max-width").expect("static pattern should compile")
});
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F300}-\x{1FAFF}\x{2600}-\x{27BF}]").expect("static pattern should compile")
});

const MARKERS: &[Marker] = &[
    Marker {
        description: "Добавлена поддержка тёмной темы",
        detect: |html| DARK_MODE.is_match(html),
    },
    Marker {
        description: "Добавлена адаптивность для мобильных устройств",
        detect: |html| MOBILE_MEDIA.is_match(html),
    },
    Marker {
        description: "Добавлены скруглённые углы (border-radius)",
        detect: |html| html.contains("border-radius"),
    },
    Marker {
        description: "Добавлены alt-атрибуты для изображений",
        detect: |html| html.contains("alt="),
    },
    Marker {
        description: "Добавлены эмодзи",
        detect: |html| EMOJI.is_match(html),
    },
];

/// Descriptions of every marker found in `html`, in a fixed order, followed
/// by the brand colours that appear in it.
#[must_use]
pub fn detect_enhancements(html: &str, brand_colors: &BrandColors) -> Vec<String> {
    let mut found: Vec<String> = MARKERS
        .iter()
        .filter(|marker| (marker.detect)(html))
        .map(|marker| marker.description.to_string())
        .collect();

    let lower = html.to_lowercase();
    let used: Vec<&str> = brand_colors
        .iter()
        .filter(|color| lower.contains(&color.to_lowercase()))
        .collect();
    if !used.is_empty() {
        found.push(format!("Использованы фирменные цвета: {}", used.join(", ")));
    }

    if found.is_empty() {
        found.push(GENERIC_ENHANCEMENT.to_string());
    }
    found
}
