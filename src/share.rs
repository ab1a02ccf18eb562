use urlencoding::encode;

use crate::curriculum::{CategoryFilter, CefrLevel, WordPart};
use crate::quiz::session::QuizOutcome;

const GMAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// Webmail compose link with subject and body prefilled.
    pub fn compose_link(&self) -> String {
        format!(
            "{}&su={}&body={}",
            GMAIL_COMPOSE_URL,
            encode(&self.subject),
            encode(&self.body)
        )
    }
}

pub fn quiz_results(level: CefrLevel, focus: CategoryFilter, outcome: &QuizOutcome) -> MailDraft {
    MailDraft {
        subject: format!("My AffixMaster Quiz Results - {}", level),
        body: format!(
            "I just completed an AffixMaster Quiz for level {} focusing on {}!\n\nMy Score: {} / {} ({}%)\n\nCan you beat my score? Check out AffixMaster for ESL learning.",
            level,
            focus.plural(),
            outcome.score,
            outcome.total,
            outcome.percentage()
        ),
    }
}

pub fn session_summary(level: CefrLevel, parts: &[&WordPart]) -> MailDraft {
    let mut body = String::from(
        "Hello!\n\nI just finished a training session on AffixMaster. Here are the word parts I learned today:\n\n",
    );
    for part in parts {
        body.push_str(&format!("• {} ({}): {}\n", part.value, part.category, part.meaning));
        body.push_str(&format!("  Examples: {}\n\n", part.example_words()));
    }
    body.push_str("Happy learning!");

    MailDraft {
        subject: format!("My AffixMaster Learning Session - Level {}", level),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Curriculum;

    #[test]
    fn quiz_results_mentions_score_and_percentage() {
        let draft = quiz_results(
            CefrLevel::B1,
            CategoryFilter::All,
            &QuizOutcome { score: 2, total: 3 },
        );
        assert_eq!(draft.subject, "My AffixMaster Quiz Results - B1");
        assert!(draft.body.contains("My Score: 2 / 3 (67%)"));
    }

    #[test]
    fn summary_lists_every_part() {
        let curriculum = Curriculum::builtin();
        let parts = curriculum.resolve(&[1, 2]);
        let draft = session_summary(CefrLevel::A1, &parts);
        assert!(draft.body.contains("• un- (prefix): not, opposite of\n  Examples: unhappy, unusual\n"));
        assert!(draft.body.contains("• -er (suffix)"));
        assert!(draft.body.ends_with("Happy learning!"));
    }

    #[test]
    fn link_escapes_subject_and_body() {
        let draft = MailDraft {
            subject: "A & B".into(),
            body: "line one\nline=two".into(),
        };
        assert_eq!(
            draft.compose_link(),
            "https://mail.google.com/mail/?view=cm&fs=1&su=A%20%26%20B&body=line%20one%0Aline%3Dtwo"
        );
    }
}
