use serde::{Deserialize, Serialize};

/// One asset declared in the campaign manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetEntry {
    pub id: Option<String>,
    #[serde(alias = "file_name", alias = "fileName")]
    pub filename: Option<String>,
    #[serde(alias = "file_path", alias = "filePath")]
    pub path: Option<String>,
    pub url: Option<String>,
    /// Free-form role, e.g. `hero`, `logo`, `icon`.
    #[serde(alias = "purpose", alias = "role")]
    pub usage: Option<String>,
    pub required: bool,
    #[serde(alias = "is_hero")]
    pub is_hero: bool,
}

impl AssetEntry {
    /// Bare file name, falling back to the last path segment.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .filter(|f| !f.is_empty())
            .or_else(|| {
                self.path
                    .as_deref()
                    .and_then(|p| p.rsplit(['/', '\\']).next())
                    .filter(|f| !f.is_empty())
            })
    }

    /// Whether the template must reference this asset.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
            || self.is_hero
            || self
                .usage
                .as_deref()
                .is_some_and(|u| u.to_lowercase().contains("hero"))
    }

    /// Whether `src` refers to this asset by file name or path, in either
    /// direction of containment.
    #[must_use]
    pub fn matches_src(&self, src: &str) -> bool {
        let by_name = self
            .file_name()
            .is_some_and(|name| src.contains(name) || name.contains(src));
        let by_path = self
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .is_some_and(|path| src.contains(path) || path.contains(src));
        by_name || by_path
    }
}

/// Assets from `assets/manifests/asset-manifest.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetManifest {
    pub images: Vec<AssetEntry>,
    pub icons: Vec<AssetEntry>,
}

impl AssetManifest {
    /// Images and icons together.
    pub fn entries(&self) -> impl Iterator<Item = &AssetEntry> {
        self.images.iter().chain(self.icons.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(filename: Option<&str>, path: Option<&str>) -> AssetEntry {
        AssetEntry {
            filename: filename.map(str::to_string),
            path: path.map(str::to_string),
            ..AssetEntry::default()
        }
    }

    #[test]
    fn file_name_falls_back_to_path_segment() {
        let asset = entry(None, Some("assets/images/hero.jpg"));
        assert_eq!(asset.file_name(), Some("hero.jpg"));
        assert_eq!(entry(Some("logo.png"), None).file_name(), Some("logo.png"));
        assert_eq!(entry(None, None).file_name(), None);
    }

    #[test]
    fn required_by_flag_or_hero_usage() {
        let mut asset = entry(Some("a.png"), None);
        assert!(!asset.is_required());
        asset.usage = Some("Hero banner".into());
        assert!(asset.is_required());

        let hero: AssetEntry = serde_json::from_str(r#"{"filename": "b.png", "isHero": true}"#).unwrap();
        assert!(hero.is_required());
    }

    #[test]
    fn matches_src_bidirectionally() {
        let asset = entry(Some("hero.jpg"), Some("assets/images/hero.jpg"));
        assert!(asset.matches_src("../assets/images/hero.jpg"));
        assert!(asset.matches_src("images/hero.jpg"));
        assert!(!asset.matches_src("banner.png"));
    }
}
