use rand::seq::SliceRandom;
use rand::Rng;

use super::{CategoryFilter, CefrLevel, WordPart};

pub const MIN_SESSION_SIZE: usize = 1;
pub const MAX_SESSION_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session size must be between 1 and 20, got {0}")]
pub struct SessionSizeError(pub usize);

/// Number of items requested for one session, always within 1..=20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SessionSize(usize);

impl SessionSize {
    pub fn new(size: usize) -> Result<Self, SessionSizeError> {
        if (MIN_SESSION_SIZE..=MAX_SESSION_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(SessionSizeError(size))
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for SessionSize {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<usize> for SessionSize {
    type Error = SessionSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<SessionSize> for usize {
    fn from(size: SessionSize) -> Self {
        size.0
    }
}

/// What the learner picked on the home screen.
///
/// Transitions return a new filter instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct SessionFilter {
    pub level: CefrLevel,
    pub category: CategoryFilter,
    pub size: SessionSize,
}

impl SessionFilter {
    pub fn with_level(self, level: CefrLevel) -> Self {
        Self { level, ..self }
    }

    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    pub fn with_size(self, size: SessionSize) -> Self {
        Self { size, ..self }
    }

    pub fn matches(&self, part: &WordPart) -> bool {
        part.has_level(self.level) && self.category.matches(part.category)
    }
}

/// Picks a fresh random subset of `pool` for one session.
///
/// The result never repeats an item and holds `min(size, matching)` entries.
/// An empty result means nothing matches the filter.
pub fn sample<'a>(pool: &'a [WordPart], filter: &SessionFilter) -> Vec<&'a WordPart> {
    sample_with_rng(pool, filter, &mut rand::thread_rng())
}

pub fn sample_with_rng<'a, R: Rng + ?Sized>(
    pool: &'a [WordPart],
    filter: &SessionFilter,
    rng: &mut R,
) -> Vec<&'a WordPart> {
    let mut matching: Vec<&WordPart> = pool.iter().filter(|p| filter.matches(p)).collect();

    // Fisher-Yates, last index down to 1
    matching.shuffle(rng);
    matching.truncate(filter.size.get());
    matching
}
