use csv::{QuoteStyle, WriterBuilder};

use super::{CefrLevel, WordPart};

const HEADERS: [&str; 6] = ["Type", "Value", "Meaning", "Origin", "Trivia", "CEFR Levels"];

pub fn export_file_name(level: CefrLevel) -> String {
    format!("affix_master_data_{}.csv", level)
}

/// Renders the whole table as CSV, one row per item.
///
/// Every field is quoted so free-text notes and the comma-joined levels
/// column survive a round trip through any CSV reader.
pub fn curriculum_to_csv(parts: &[WordPart]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for part in parts {
        let levels = part.levels_label();
        writer.write_record([
            part.category.as_str(),
            part.value,
            part.meaning,
            part.origin,
            part.trivia,
            levels.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::{Category, Curriculum, Example};

    static QUOTED: [WordPart; 1] = [WordPart {
        id: 99,
        category: Category::Root,
        value: "-graph-",
        meaning: "to write",
        origin: "From Greek \"graphein\".",
        trivia: "A \"paragraph\", literally, is something written beside.",
        examples: &[Example {
            word: "autograph",
            sentence: "She signed an autograph.",
        }],
        levels: &[CefrLevel::B2, CefrLevel::C1],
    }];

    #[test]
    fn file_name_embeds_level() {
        assert_eq!(export_file_name(CefrLevel::B2), "affix_master_data_B2.csv");
    }

    #[test]
    fn quotes_and_commas_round_trip() {
        let bytes = curriculum_to_csv(&QUOTED).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADERS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "root");
        assert_eq!(&rows[0][3], QUOTED[0].origin);
        assert_eq!(&rows[0][4], QUOTED[0].trivia);
        assert_eq!(&rows[0][5], "B2, C1");
    }

    #[test]
    fn internal_quotes_are_doubled() {
        let bytes = curriculum_to_csv(&QUOTED).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"A \"\"paragraph\"\", literally, is something written beside.\""));
    }

    #[test]
    fn full_curriculum_has_one_row_per_item() {
        let curriculum = Curriculum::builtin();
        let bytes = curriculum_to_csv(curriculum.parts()).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        assert_eq!(reader.records().count(), curriculum.parts().len());
    }
}
