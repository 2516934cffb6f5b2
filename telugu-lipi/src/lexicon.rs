//! Static Telugu→English lexicon
//!
//! The lexicon is a read-only table built once at construction. Multi-word
//! entries (compound phrases) are kept separate from single-word entries and
//! sorted longest-first, so an idiom like "ఇష్టం లేదు" is consumed before the
//! bare "ఇష్టం" entry can shadow part of it.

use std::collections::HashMap;

/// Source phrase → English gloss. Keys are unique.
///
/// Entries with an internal space are compound phrases; everything else is a
/// whole-word entry. A handful of case-inflected noun forms (dative
/// "పాఠశాలకు" and friends) are listed as plain entries so common travel and
/// school sentences gloss without leaving script residue.
const TELUGU_ENGLISH: &[(&str, &str)] = &[
    // Greetings and common words
    ("నమస్కారం", "Namaste"),
    ("నమస్కారములు", "Greetings"),
    ("హలో", "Hello"),
    ("ధన్యవాదాలు", "Thank you"),
    ("క్షమించండి", "Sorry"),
    ("దయచేసి", "Please"),
    ("అవును", "Yes"),
    ("కాదు", "No"),
    ("సరే", "Okay"),
    ("బాగుంది", "Good"),
    ("చాలా", "Very"),
    // Question words
    ("ఎలా", "How"),
    ("ఎక్కడ", "Where"),
    ("ఎప్పుడు", "When"),
    ("ఎవరు", "Who"),
    ("ఏమిటి", "What"),
    ("ఎందుకు", "Why"),
    ("ఎంత", "How much"),
    ("ఎవరిది", "Whose"),
    // Pronouns
    ("నేను", "I"),
    ("నా", "My"),
    ("మీరు", "You"),
    ("మీ", "Your"),
    ("అతను", "He"),
    ("అతని", "His"),
    ("ఆమె", "She"),
    ("ఆమెది", "Hers"),
    ("మేము", "We"),
    ("మా", "Our"),
    ("వారు", "They"),
    ("వారి", "Their"),
    ("ఇది", "This"),
    ("అది", "That"),
    // Family terms
    ("తల్లి", "Mother"),
    ("తండ్రి", "Father"),
    ("అమ్మ", "Mom"),
    ("నాన్న", "Dad"),
    ("అన్నా", "Elder brother"),
    ("అక్క", "Elder sister"),
    ("తమ్ముడు", "Younger brother"),
    ("చెల్లెలు", "Younger sister"),
    ("అజ్జ", "Grandfather"),
    ("అజ్జి", "Grandmother"),
    ("మామ", "Uncle"),
    ("అత్త", "Aunt"),
    ("కుటుంబం", "Family"),
    // Time
    ("రోజు", "Day"),
    ("రాత్రి", "Night"),
    ("ఉదయం", "Morning"),
    ("మధ్యాహ్నం", "Afternoon"),
    ("సాయంత్రం", "Evening"),
    ("వారం", "Week"),
    ("నెల", "Month"),
    ("సంవత్సరం", "Year"),
    ("సమయం", "Time"),
    ("గంట", "Hour"),
    ("నిమిషం", "Minute"),
    ("ఈరోజు", "Today"),
    ("నిన్న", "Yesterday"),
    ("రేపు", "Tomorrow"),
    ("ప్రతిరోజూ", "Every day"),
    // Numbers
    ("ఒకటి", "One"),
    ("రెండు", "Two"),
    ("మూడు", "Three"),
    ("నాలుగు", "Four"),
    ("అయిదు", "Five"),
    ("ఆరు", "Six"),
    ("ఏడు", "Seven"),
    ("ఎనిమిది", "Eight"),
    ("తొమ్మిది", "Nine"),
    ("పది", "Ten"),
    // Common nouns
    ("ఇల్లు", "House"),
    ("ఇంటి", "House"),
    ("ఇంటికి", "to home"),
    ("పాఠశాల", "School"),
    ("పాఠశాలకు", "to school"),
    ("కాలేజీ", "College"),
    ("విశ్వవిద్యాలయం", "University"),
    ("పని", "Work"),
    ("ఉద్యోగం", "Job"),
    ("నీరు", "Water"),
    ("అన్నం", "Rice"),
    ("భోజనం", "Food"),
    ("పుస్తకం", "Book"),
    ("పేరు", "Name"),
    ("వయస్సు", "Age"),
    ("ఊరు", "Village"),
    ("నగరం", "City"),
    ("దేశం", "Country"),
    ("రాష్ట్రం", "State"),
    ("కారు", "Car"),
    ("బైకు", "Bike"),
    ("బస్సు", "Bus"),
    ("రైలు", "Train"),
    ("విమానం", "Airplane"),
    ("తెలుగు", "Telugu"),
    ("భాష", "Language"),
    ("పదాలు", "Words"),
    ("స్నేహితులు", "Friends"),
    ("ఆటలు", "Games"),
    ("పార్కుకు", "to the park"),
    ("ఆలయం", "Temple"),
    ("వాతావరణం", "Weather"),
    // Verbs, first person
    ("వస్తాను", "I come"),
    ("వచ్చాను", "I came"),
    ("వస్తున్నాను", "I am coming"),
    ("వెళ్తాను", "I go"),
    ("వెళ్ళాను", "I went"),
    ("వెళ్తున్నాను", "I am going"),
    ("చేస్తాను", "I do"),
    ("చేశాను", "I did"),
    ("చేస్తున్నాను", "I am doing"),
    ("చూస్తాను", "I see"),
    ("చూశాను", "I saw"),
    ("చూస్తున్నాను", "I am seeing"),
    ("వింటాను", "I listen"),
    ("విన్నాను", "I listened"),
    ("వింటున్నాను", "I am listening"),
    ("మాట్లాడతాను", "I speak"),
    ("మాట్లాడాను", "I spoke"),
    ("మాట్లాడుతున్నాను", "I am speaking"),
    ("తింటాను", "I eat"),
    ("తిన్నాను", "I ate"),
    ("తింటున్నాను", "I am eating"),
    ("త్రాగుతాను", "I drink"),
    ("త్రాగాను", "I drank"),
    ("త్రాగుతున్నాను", "I am drinking"),
    ("పడుకుంటాను", "I sleep"),
    ("పడుకున్నాను", "I slept"),
    ("పడుకుంటున్నాను", "I am sleeping"),
    ("లేస్తాను", "I wake up"),
    ("లేచాను", "I woke up"),
    ("నేర్చుకుంటున్నాను", "I am learning"),
    // Adjectives
    ("అందమైన", "Beautiful"),
    ("చెడ్డ", "Bad"),
    ("మంచి", "Good"),
    ("పెద్ద", "Big"),
    ("చిన్న", "Small"),
    ("కొత్త", "New"),
    ("పాత", "Old"),
    ("వేగమైన", "Fast"),
    ("నెమ్మదిగా", "Slow"),
    ("ఎత్తైన", "Tall"),
    ("పొట్టి", "Short"),
    ("దప్పు", "Thick"),
    ("సన్నని", "Thin"),
    // Compound phrases (multi-word, substituted before single words)
    ("ఎలా ఉన్నారు", "How are you"),
    ("నాకు తెలుసు", "I know"),
    ("నాకు తెలియదు", "I don't know"),
    ("అర్థం అయింది", "I understand"),
    ("అర్థం కాలేదు", "I don't understand"),
    ("సహాయం చేయండి", "Please help"),
    ("ఇష్టం లేదు", "Don't like"),
    ("ఇష్టం", "Like"),
    // Academic terms
    ("చదువు", "Study"),
    ("చదువుతున్నాను", "I am studying"),
    ("చదివాను", "I studied"),
    ("పరీక్ష", "Exam"),
    ("గ్రేడ్", "Grade"),
    ("మార్కులు", "Marks"),
    ("విద్యార్థి", "Student"),
    ("గురువు", "Teacher"),
    ("ప్రిన్సిపాల్", "Principal"),
    ("క్లాస్", "Class"),
    ("హోంవర్క్", "Homework"),
];

/// Read-only Telugu→English lexicon, partitioned for the two substitution
/// passes of the translator.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Multi-word phrases, longest first
    compounds: Vec<(&'static str, &'static str)>,
    /// Whole-word entries
    words: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    /// Build the Telugu→English lexicon from the static entry table.
    pub fn telugu_english() -> Self {
        let mut compounds = Vec::new();
        let mut words = HashMap::new();

        for &(source, gloss) in TELUGU_ENGLISH {
            if source.contains(char::is_whitespace) {
                compounds.push((source, gloss));
            } else {
                words.insert(source, gloss);
            }
        }

        // Longest phrase first so nested idioms cannot be partially consumed
        compounds.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

        Self { compounds, words }
    }

    /// Compound phrases in substitution order (longest first).
    pub fn compounds(&self) -> &[(&'static str, &'static str)] {
        &self.compounds
    }

    /// Look up the gloss for a single-word entry.
    pub fn lookup(&self, word: &str) -> Option<&'static str> {
        self.words.get(word).copied()
    }

    /// All single-word source entries.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.keys().copied()
    }

    /// Total number of entries (compound and single-word).
    pub fn len(&self) -> usize {
        self.compounds.len() + self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::telugu_english()
    }
}
