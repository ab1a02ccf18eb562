use serde_json::{json, Value};

use crate::curriculum::{CategoryFilter, CefrLevel};

const QUESTION_KINDS: [&str; 4] = [
    "meaning-match",
    "word-building",
    "definition-deduction",
    "fill-blank",
];

/// Builds the quiz request. The focus category is spelled out so a
/// roots-only session gets roots-only questions.
pub fn quiz_prompt(level: CefrLevel, focus: CategoryFilter, count: usize) -> String {
    let focus_line = match focus {
        CategoryFilter::All => "Cover a mix of prefixes, roots, and suffixes.".to_string(),
        CategoryFilter::Only(category) => format!(
            "Every question must be about a {}; do not ask about other kinds of word parts.",
            category
        ),
    };

    format!(
        "Generate {count} high-quality ESL quiz questions about English prefixes, roots, and suffixes for learners at CEFR level {level}.
Include various formats: 'meaning-match', 'word-building', 'definition-deduction', and 'fill-blank'.
{focus_line}

CRITICAL RULE: Each of the {count} questions MUST focus on a UNIQUE word part. Do not repeat the same prefix, root, or suffix across multiple questions in this specific set.

Ensure the difficulty strictly matches {level}.
The correctAnswer must be copied exactly from the options list.
For 'word-building', the correctAnswer should be a single word formed from parts.
For 'fill-blank', provide a sentence with a missing word that tests affix knowledge."
    )
}

pub fn trivia_prompt(word_part: &str) -> String {
    format!(
        "Provide historical origin notes and one interesting trivia fact for the English word part: \"{}\". Keep it concise for a tooltip.",
        word_part
    )
}

/// Array of question objects, in the OpenAPI subset the Gemini API accepts.
pub fn quiz_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "type": {
                    "type": "STRING",
                    "format": "enum",
                    "enum": QUESTION_KINDS
                },
                "prompt": { "type": "STRING" },
                "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                "correctAnswer": { "type": "STRING" },
                "explanation": { "type": "STRING" }
            },
            "required": ["id", "type", "prompt", "options", "correctAnswer", "explanation"]
        }
    })
}

pub fn trivia_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "origin": { "type": "STRING" },
            "trivia": { "type": "STRING" }
        },
        "required": ["origin", "trivia"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Category;

    #[test]
    fn quiz_prompt_pins_count_and_level() {
        let prompt = quiz_prompt(CefrLevel::C1, CategoryFilter::All, 7);
        assert!(prompt.starts_with("Generate 7 high-quality"));
        assert!(prompt.contains("Each of the 7 questions MUST focus on a UNIQUE word part"));
        assert!(prompt.contains("strictly matches C1"));
    }

    #[test]
    fn quiz_prompt_carries_focus_category() {
        let prompt = quiz_prompt(CefrLevel::B1, CategoryFilter::Only(Category::Root), 3);
        assert!(prompt.contains("Every question must be about a root"));
    }

    #[test]
    fn quiz_schema_restricts_question_kind() {
        let kind = &quiz_schema()["items"]["properties"]["type"];
        assert_eq!(kind["format"], "enum");
        assert_eq!(
            kind["enum"],
            json!(["meaning-match", "word-building", "definition-deduction", "fill-blank"])
        );
    }

    #[test]
    fn quiz_schema_requires_every_field() {
        let required = &quiz_schema()["items"]["required"];
        for field in ["id", "type", "prompt", "options", "correctAnswer", "explanation"] {
            assert!(required.as_array().unwrap().contains(&json!(field)));
        }
    }
}
