use super::CefrLevel::*;
use super::{Category, Example, WordPart};

pub static WORD_PARTS: &[WordPart] = &[
    // A1-A2
    WordPart {
        id: 1,
        category: Category::Prefix,
        value: "un-",
        meaning: "not, opposite of",
        origin: "Old English, of Germanic origin.",
        trivia: "One of the most common prefixes in English, appearing in thousands of words.",
        examples: &[
            Example {
                word: "unhappy",
                sentence: "She felt unhappy when her ice cream fell.",
            },
            Example {
                word: "unusual",
                sentence: "It is unusual to see snow in the desert.",
            },
        ],
        levels: &[A1, A2],
    },
    WordPart {
        id: 2,
        category: Category::Suffix,
        value: "-er",
        meaning: "a person or thing that does something",
        origin: "Common Germanic suffix used for agents.",
        trivia: "Often transforms verbs into nouns (e.g., teach -> teacher).",
        examples: &[
            Example {
                word: "teacher",
                sentence: "The teacher explained the math problem.",
            },
            Example {
                word: "player",
                sentence: "He is a great basketball player.",
            },
        ],
        levels: &[A1, A2],
    },
    WordPart {
        id: 7,
        category: Category::Prefix,
        value: "re-",
        meaning: "again or back",
        origin: "From Latin re-, meaning \"again\".",
        trivia: "Used in over 2,000 common English words.",
        examples: &[
            Example {
                word: "rewrite",
                sentence: "I need to rewrite this essay.",
            },
            Example {
                word: "return",
                sentence: "Please return the book to the library.",
            },
        ],
        levels: &[A1, A2],
    },
    WordPart {
        id: 8,
        category: Category::Prefix,
        value: "pre-",
        meaning: "before",
        origin: "From Latin prae, meaning \"before\".",
        trivia: "Think of a \"pre-game\" show that happens before the game starts.",
        examples: &[
            Example {
                word: "prepare",
                sentence: "I need to prepare for my exam tomorrow.",
            },
            Example {
                word: "preview",
                sentence: "Let's watch the movie preview.",
            },
        ],
        levels: &[A1, A2],
    },
    WordPart {
        id: 9,
        category: Category::Suffix,
        value: "-ly",
        meaning: "in a certain way or manner",
        origin: "Old English -līce, related to \"like\".",
        trivia: "The most common way to turn an adjective into an adverb.",
        examples: &[
            Example {
                word: "quickly",
                sentence: "He ran quickly to catch the bus.",
            },
            Example {
                word: "slowly",
                sentence: "The turtle moved slowly across the road.",
            },
        ],
        levels: &[A1, A2],
    },
    WordPart {
        id: 10,
        category: Category::Suffix,
        value: "-ful",
        meaning: "full of",
        origin: "Old English, from the word \"full\".",
        trivia: "Words ending in -ful are almost always adjectives.",
        examples: &[
            Example {
                word: "helpful",
                sentence: "Thank you for being so helpful today.",
            },
            Example {
                word: "colorful",
                sentence: "The garden was filled with colorful flowers.",
            },
        ],
        levels: &[A1, A2],
    },
    WordPart {
        id: 11,
        category: Category::Prefix,
        value: "bi-",
        meaning: "two",
        origin: "From Latin bi-, meaning \"twice\" or \"two\".",
        trivia: "A bicycle has two wheels, hence the name!",
        examples: &[
            Example {
                word: "bicycle",
                sentence: "I ride my bicycle to school every day.",
            },
            Example {
                word: "bilingual",
                sentence: "She is bilingual and speaks English and Spanish.",
            },
        ],
        levels: &[A1, A2],
    },
    WordPart {
        id: 12,
        category: Category::Prefix,
        value: "dis-",
        meaning: "not, apart, or away",
        origin: "From Latin dis-, indicating reversal or removal.",
        trivia: "It is the opposite of \"con-\" or \"as-\".",
        examples: &[
            Example {
                word: "disagree",
                sentence: "It's okay to disagree with your friends.",
            },
            Example {
                word: "disappear",
                sentence: "The magician made the rabbit disappear.",
            },
        ],
        levels: &[A2, B1],
    },
    // B1-B2
    WordPart {
        id: 3,
        category: Category::Root,
        value: "-spect-",
        meaning: "to look or see",
        origin: "From Latin specere, meaning \"to look at\".",
        trivia: "The word \"spectacles\" (glasses) comes directly from this root.",
        examples: &[
            Example {
                word: "inspector",
                sentence: "The inspector checked the building for safety.",
            },
            Example {
                word: "perspective",
                sentence: "Traveling gives you a new perspective on life.",
            },
            Example {
                word: "spectator",
                sentence: "The spectator watched the game from the stands.",
            },
        ],
        levels: &[B1, B2],
    },
    WordPart {
        id: 4,
        category: Category::Prefix,
        value: "mono-",
        meaning: "one, single",
        origin: "From Greek monos, meaning \"alone\" or \"single\".",
        trivia: "Used extensively in scientific and technical terminology.",
        examples: &[
            Example {
                word: "monologue",
                sentence: "The actor delivered a powerful monologue.",
            },
            Example {
                word: "monotone",
                sentence: "His voice was flat and monotone.",
            },
        ],
        levels: &[B1, B2],
    },
    WordPart {
        id: 13,
        category: Category::Root,
        value: "-port-",
        meaning: "to carry",
        origin: "From Latin portare.",
        trivia: "A \"portable\" device is one you can easily carry around.",
        examples: &[
            Example {
                word: "transport",
                sentence: "The train is a great way to transport goods.",
            },
            Example {
                word: "import",
                sentence: "Many countries import oil from abroad.",
            },
            Example {
                word: "export",
                sentence: "We export our products to many countries.",
            },
        ],
        levels: &[B1, B2],
    },
    WordPart {
        id: 14,
        category: Category::Root,
        value: "-dict-",
        meaning: "to say or speak",
        origin: "From Latin dicere, past participle dictus.",
        trivia: "A dictionary is literally a book of \"said\" or defined words.",
        examples: &[
            Example {
                word: "predict",
                sentence: "It is hard to predict the weather accurately.",
            },
            Example {
                word: "dictate",
                sentence: "He will dictate the letter to his assistant.",
            },
            Example {
                word: "contradict",
                sentence: "Please don't contradict me in front of the team.",
            },
        ],
        levels: &[B1, B2],
    },
    WordPart {
        id: 15,
        category: Category::Prefix,
        value: "auto-",
        meaning: "self",
        origin: "From Greek autos.",
        trivia: "An autobiography is a biography written by the person themselves.",
        examples: &[
            Example {
                word: "automatic",
                sentence: "The door has an automatic opening system.",
            },
            Example {
                word: "automobile",
                sentence: "The automobile changed how people travel.",
            },
        ],
        levels: &[B1, B2],
    },
    WordPart {
        id: 16,
        category: Category::Prefix,
        value: "multi-",
        meaning: "many",
        origin: "From Latin multus.",
        trivia: "A \"multiverse\" consists of many different universes.",
        examples: &[
            Example {
                word: "multiple",
                sentence: "There are multiple ways to solve this problem.",
            },
            Example {
                word: "multicultural",
                sentence: "London is a very multicultural city.",
            },
        ],
        levels: &[B1, B2],
    },
    WordPart {
        id: 17,
        category: Category::Root,
        value: "-form-",
        meaning: "shape",
        origin: "From Latin forma.",
        trivia: "To \"transform\" something is to change its shape or appearance.",
        examples: &[
            Example {
                word: "formation",
                sentence: "The birds flew in a V-shaped formation.",
            },
            Example {
                word: "reform",
                sentence: "The government plans to reform the tax system.",
            },
        ],
        levels: &[B1, B2],
    },
    WordPart {
        id: 18,
        category: Category::Prefix,
        value: "inter-",
        meaning: "between or among",
        origin: "From Latin inter.",
        trivia: "The \"internet\" is a network that connects computers between different locations.",
        examples: &[
            Example {
                word: "international",
                sentence: "The company has an international presence.",
            },
            Example {
                word: "interact",
                sentence: "It's important to interact with your colleagues.",
            },
        ],
        levels: &[B1, B2],
    },
    // C1-C2
    WordPart {
        id: 5,
        category: Category::Root,
        value: "pneu-",
        meaning: "air, breath, or lung",
        origin: "From Greek pneuma, meaning \"wind\" or \"spirit\".",
        trivia: "Pneumatic tools use compressed air to function.",
        examples: &[
            Example {
                word: "pneumonia",
                sentence: "Pneumonia is an infection that inflames the air sacs in the lungs.",
            },
            Example {
                word: "pneumatic",
                sentence: "The mechanic used a pneumatic drill.",
            },
        ],
        levels: &[C1, C2],
    },
    WordPart {
        id: 6,
        category: Category::Prefix,
        value: "ortho-",
        meaning: "straight, correct, or right",
        origin: "From Greek orthos.",
        trivia: "Orthodontists \"straighten\" teeth.",
        examples: &[
            Example {
                word: "orthodox",
                sentence: "The scientist used orthodox methods for the experiment.",
            },
            Example {
                word: "orthography",
                sentence: "English orthography can be very confusing.",
            },
        ],
        levels: &[C1, C2],
    },
    WordPart {
        id: 19,
        category: Category::Prefix,
        value: "hyper-",
        meaning: "over, above, or excessive",
        origin: "From Greek hyper, meaning \"over\".",
        trivia: "A \"hyperbole\" is a figure of speech that uses extreme exaggeration.",
        examples: &[
            Example {
                word: "hyperactive",
                sentence: "The puppy was extremely hyperactive this morning.",
            },
            Example {
                word: "hypercritical",
                sentence: "She tends to be hypercritical of her own work.",
            },
        ],
        levels: &[C1, C2],
    },
    WordPart {
        id: 20,
        category: Category::Prefix,
        value: "hypo-",
        meaning: "under, below, or deficient",
        origin: "From Greek hypo, meaning \"under\".",
        trivia: "Opposite of \"hyper-\". \"Hypothermia\" means dangerously low body temperature.",
        examples: &[
            Example {
                word: "hypothesis",
                sentence: "We need to test our hypothesis with an experiment.",
            },
            Example {
                word: "hypodermic",
                sentence: "The nurse used a hypodermic needle for the injection.",
            },
        ],
        levels: &[C1, C2],
    },
    WordPart {
        id: 21,
        category: Category::Root,
        value: "-anthrop-",
        meaning: "human or mankind",
        origin: "From Greek anthropos.",
        trivia: "Anthropology is the scientific study of humans.",
        examples: &[
            Example {
                word: "philanthropy",
                sentence: "His philanthropy helped build several hospitals.",
            },
            Example {
                word: "anthropomorphic",
                sentence: "The cartoon features anthropomorphic animals.",
            },
        ],
        levels: &[C1, C2],
    },
    WordPart {
        id: 22,
        category: Category::Prefix,
        value: "meta-",
        meaning: "beyond, after, or change",
        origin: "From Greek meta.",
        trivia: "Metamorphosis is the process of transformation from an immature form to an adult form.",
        examples: &[
            Example {
                word: "metaphor",
                sentence: "The poem uses a powerful metaphor for life.",
            },
            Example {
                word: "metabolism",
                sentence: "She has a very fast metabolism.",
            },
        ],
        levels: &[C1, C2],
    },
    WordPart {
        id: 23,
        category: Category::Prefix,
        value: "peri-",
        meaning: "around or about",
        origin: "From Greek peri.",
        trivia: "A perimeter is the total distance around the edge of a shape.",
        examples: &[
            Example {
                word: "peripheral",
                sentence: "The patient had a problem with their peripheral vision.",
            },
            Example {
                word: "periscope",
                sentence: "The submarine crew used a periscope to see above water.",
            },
        ],
        levels: &[C1, C2],
    },
    WordPart {
        id: 24,
        category: Category::Prefix,
        value: "pseudo-",
        meaning: "false or sham",
        origin: "From Greek pseudes.",
        trivia: "A \"pseudonym\" is a fake name used by an author.",
        examples: &[
            Example {
                word: "pseudoscience",
                sentence: "Some people dismiss astrology as pseudoscience.",
            },
            Example {
                word: "pseudonym",
                sentence: "The author wrote under a pseudonym for years.",
            },
        ],
        levels: &[C1, C2],
    },
];
