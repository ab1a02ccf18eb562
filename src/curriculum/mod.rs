pub mod data;
pub mod export;
pub mod sampler;

use std::fmt;
use std::str::FromStr;

/// Common European Framework of Reference proficiency tag.
///
/// The derived ordering follows the declaration order, A1 being the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum CefrLevel {
    #[default]
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub const ALL: [CefrLevel; 6] = [
        CefrLevel::A1,
        CefrLevel::A2,
        CefrLevel::B1,
        CefrLevel::B2,
        CefrLevel::C1,
        CefrLevel::C2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "Very common, high-frequency affixes like un-, -er.",
            CefrLevel::A2 => "Common affixes used in everyday communication.",
            CefrLevel::B1 => "Mid-frequency roots for academic vocabulary like mono-, dict.",
            CefrLevel::B2 => "Professional vocabulary and nuanced affixes like ambi-, inter-.",
            CefrLevel::C1 => "Low-frequency, technical roots like pneu-, ortho-.",
            CefrLevel::C2 => "Complex, literary, and highly specific archaic or technical forms.",
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown CEFR level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for CefrLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CefrLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prefix,
    Root,
    Suffix,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Prefix => "prefix",
            Category::Root => "root",
            Category::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category to focus on, or every category at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const CHOICES: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Prefix),
        CategoryFilter::Only(Category::Root),
        CategoryFilter::Only(Category::Suffix),
    ];

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Plural label used in prose, e.g. "prefixes" or "all categories".
    pub fn plural(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all categories",
            CategoryFilter::Only(Category::Prefix) => "prefixes",
            CategoryFilter::Only(Category::Root) => "roots",
            CategoryFilter::Only(Category::Suffix) => "suffixes",
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CategoryFilter::CHOICES
            .into_iter()
            .find(|choice| choice.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub word: &'static str,
    pub sentence: &'static str,
}

pub type WordPartId = u16;

/// One prefix, root or suffix of the curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPart {
    pub id: WordPartId,
    pub category: Category,
    pub value: &'static str,
    pub meaning: &'static str,
    pub origin: &'static str,
    pub trivia: &'static str,
    pub examples: &'static [Example],
    pub levels: &'static [CefrLevel],
}

impl WordPart {
    pub fn has_level(&self, level: CefrLevel) -> bool {
        self.levels.contains(&level)
    }

    pub fn levels_label(&self) -> String {
        self.levels
            .iter()
            .map(CefrLevel::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn example_words(&self) -> String {
        self.examples
            .iter()
            .map(|e| e.word)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Read-only view over a table of word parts.
#[derive(Debug, Clone, Copy)]
pub struct Curriculum {
    parts: &'static [WordPart],
}

impl Curriculum {
    pub fn new(parts: &'static [WordPart]) -> Self {
        Self { parts }
    }

    pub fn builtin() -> Self {
        Self::new(data::WORD_PARTS)
    }

    pub fn parts(&self) -> &'static [WordPart] {
        self.parts
    }

    pub fn get(&self, id: WordPartId) -> Option<&'static WordPart> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Resolves ids back to items, skipping any that are unknown.
    pub fn resolve(&self, ids: &[WordPartId]) -> Vec<&'static WordPart> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    pub fn find_by_value(&self, value: &str) -> Option<&'static WordPart> {
        self.parts.iter().find(|p| p.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn levels_are_totally_ordered() {
        let mut sorted = CefrLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, CefrLevel::ALL);
        assert!(CefrLevel::A1 < CefrLevel::C2);
    }

    #[test]
    fn level_and_category_parse_case_insensitively() {
        assert_eq!("b2".parse::<CefrLevel>(), Ok(CefrLevel::B2));
        assert!("D1".parse::<CefrLevel>().is_err());
        assert_eq!(
            "Root".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Root))
        );
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
    }

    #[test]
    fn builtin_curriculum_is_well_formed() {
        let curriculum = Curriculum::builtin();
        assert_eq!(curriculum.parts().len(), 24);

        let ids: HashSet<_> = curriculum.parts().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), curriculum.parts().len());

        for part in curriculum.parts() {
            assert!(!part.examples.is_empty(), "{} has no examples", part.value);
            assert!(!part.levels.is_empty(), "{} has no levels", part.value);
        }
    }

    #[test]
    fn every_level_has_content() {
        let curriculum = Curriculum::builtin();
        for level in CefrLevel::ALL {
            assert!(curriculum.parts().iter().any(|p| p.has_level(level)));
        }
    }

    #[test]
    fn resolve_skips_unknown_ids() {
        let curriculum = Curriculum::builtin();
        let resolved = curriculum.resolve(&[1, 9999, 3]);
        assert_eq!(
            resolved.iter().map(|p| p.value).collect::<Vec<_>>(),
            vec!["un-", "-spect-"]
        );
    }
}
