//! Browse and flashcard navigation over a sampled set.
//!
//! The deck stores word part ids rather than references so it can live in
//! the serialized dialogue state.

use teloxide::utils::html::escape;

use crate::curriculum::{Curriculum, WordPart, WordPartId};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    ids: Vec<WordPartId>,
    index: usize,
    flipped: bool,
    show_examples: bool,
}

impl Deck {
    /// `None` when nothing was sampled: there is no card to show.
    pub fn new(parts: &[&WordPart]) -> Option<Self> {
        if parts.is_empty() {
            return None;
        }
        Some(Self {
            ids: parts.iter().map(|p| p.id).collect(),
            index: 0,
            flipped: false,
            show_examples: true,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn shows_examples(&self) -> bool {
        self.show_examples
    }

    pub fn ids(&self) -> &[WordPartId] {
        &self.ids
    }

    pub fn current_id(&self) -> WordPartId {
        self.ids[self.index]
    }

    pub fn parts(&self, curriculum: &Curriculum) -> Vec<&'static WordPart> {
        curriculum.resolve(&self.ids)
    }

    pub fn current(&self, curriculum: &Curriculum) -> Option<&'static WordPart> {
        curriculum.get(self.current_id())
    }

    pub fn next_card(self) -> Self {
        Self {
            index: (self.index + 1) % self.ids.len(),
            flipped: false,
            ..self
        }
    }

    pub fn prev_card(self) -> Self {
        let len = self.ids.len();
        Self {
            index: (self.index + len - 1) % len,
            flipped: false,
            ..self
        }
    }

    pub fn flip(self) -> Self {
        Self {
            flipped: !self.flipped,
            ..self
        }
    }

    /// Turns the current card back to its front side.
    pub fn flip_down(self) -> Self {
        Self {
            flipped: false,
            ..self
        }
    }

    /// Jumps to the card with `id` if it is part of this deck.
    pub fn select(self, id: WordPartId) -> Self {
        let position = self.ids.iter().position(|candidate| *candidate == id);
        match position {
            Some(index) => Self {
                index,
                flipped: false,
                ..self
            },
            None => self,
        }
    }

    pub fn toggle_examples(self) -> Self {
        Self {
            show_examples: !self.show_examples,
            ..self
        }
    }
}

/// Detail card shown in browse mode.
pub fn describe(part: &WordPart, show_examples: bool) -> String {
    let mut text = format!(
        "<b>{}</b> ({})\n<i>{}</i>\n\n📜 Origin: {}\n💡 Trivia: {}\n🎓 Levels: {}",
        escape(part.value),
        part.category,
        escape(part.meaning),
        escape(part.origin),
        escape(part.trivia),
        part.levels_label()
    );
    if show_examples {
        text.push_str("\n\nExamples:");
        for example in part.examples {
            text.push_str(&format!(
                "\n• <b>{}</b>: {}",
                escape(example.word),
                escape(example.sentence)
            ));
        }
    }
    text
}

pub fn flashcard_front(part: &WordPart) -> String {
    format!(
        "{}\n\n<b>{}</b>\n\n(tap Flip to reveal)",
        part.category.as_str().to_uppercase(),
        escape(part.value)
    )
}

pub fn flashcard_back(part: &WordPart) -> String {
    let mut text = format!(
        "<b>{}</b>\n\n📜 {}\n",
        escape(part.meaning),
        escape(part.origin)
    );
    for example in part.examples {
        text.push_str(&format!(
            "\n• <b>{}</b>: <i>{}</i>",
            escape(example.word),
            escape(example.sentence)
        ));
    }
    text
}
