//! Grammatical categories and parts of speech
//!
//! Tag names follow the OpenCorpora convention (`nomn`, `gent`, `ADJF`, ...)
//! so lexicon files and serialized output stay readable to anyone who has
//! worked with Russian morphological dictionaries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Part of speech of a parsed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    /// Noun
    #[serde(rename = "NOUN")]
    Noun,
    /// Full adjective (also adjectival pronouns such as `этот`)
    #[serde(rename = "ADJF")]
    Adjective,
    /// Verb, including infinitive and past forms
    #[serde(rename = "VERB")]
    Verb,
    /// Personal pronoun
    #[serde(rename = "NPRO")]
    Pronoun,
    /// Numeral written as a word
    #[serde(rename = "NUMR")]
    Numeral,
    /// Adverb
    #[serde(rename = "ADVB")]
    Adverb,
    /// Preposition
    #[serde(rename = "PREP")]
    Preposition,
    /// Conjunction
    #[serde(rename = "CONJ")]
    Conjunction,
    /// Particle
    #[serde(rename = "PRCL")]
    Particle,
    /// Interjection
    #[serde(rename = "INTJ")]
    Interjection,
    /// Word written in Latin script
    #[serde(rename = "LATN")]
    Latin,
    /// Number written with digits
    #[serde(rename = "NUMB")]
    Number,
}

impl PartOfSpeech {
    /// Every part of speech, in tag order
    pub const ALL: [PartOfSpeech; 12] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Adjective,
        PartOfSpeech::Verb,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Numeral,
        PartOfSpeech::Adverb,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Particle,
        PartOfSpeech::Interjection,
        PartOfSpeech::Latin,
        PartOfSpeech::Number,
    ];

    /// OpenCorpora tag
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Adjective => "ADJF",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Pronoun => "NPRO",
            PartOfSpeech::Numeral => "NUMR",
            PartOfSpeech::Adverb => "ADVB",
            PartOfSpeech::Preposition => "PREP",
            PartOfSpeech::Conjunction => "CONJ",
            PartOfSpeech::Particle => "PRCL",
            PartOfSpeech::Interjection => "INTJ",
            PartOfSpeech::Latin => "LATN",
            PartOfSpeech::Number => "NUMB",
        }
    }

    /// Prepositions, conjunctions and particles
    pub fn is_function_word(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Preposition | PartOfSpeech::Conjunction | PartOfSpeech::Particle
        )
    }

    /// Whether words of this part of speech change form by case
    pub fn is_declinable(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::Adjective
                | PartOfSpeech::Pronoun
                | PartOfSpeech::Numeral
        )
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::ALL
            .into_iter()
            .find(|pos| pos.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown part of speech '{s}'"))
    }
}

/// One of the six Russian grammatical cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Именительный
    Nominative,
    /// Родительный
    Genitive,
    /// Дательный
    Dative,
    /// Винительный
    Accusative,
    /// Творительный
    Instrumental,
    /// Предложный
    Prepositional,
}

impl Case {
    /// All cases in canonical school-grammar order
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// OpenCorpora tag (`nomn`, `gent`, ...)
    pub fn tag(&self) -> &'static str {
        self.grammeme().tag()
    }

    /// English name of the case
    pub fn name(&self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Prepositional => "prepositional",
        }
    }

    /// Matching grammeme
    pub fn grammeme(&self) -> Grammeme {
        match self {
            Case::Nominative => Grammeme::Nomn,
            Case::Genitive => Grammeme::Gent,
            Case::Dative => Grammeme::Datv,
            Case::Accusative => Grammeme::Accs,
            Case::Instrumental => Grammeme::Ablt,
            Case::Prepositional => Grammeme::Loct,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Case::ALL
            .into_iter()
            .find(|case| case.name() == lower || case.tag() == lower)
            .ok_or_else(|| format!("unknown case '{s}'"))
    }
}

/// A single grammatical feature of a word form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grammeme {
    #[serde(rename = "nomn")]
    Nomn,
    #[serde(rename = "gent")]
    Gent,
    #[serde(rename = "datv")]
    Datv,
    #[serde(rename = "accs")]
    Accs,
    #[serde(rename = "ablt")]
    Ablt,
    #[serde(rename = "loct")]
    Loct,
    #[serde(rename = "sing")]
    Sing,
    #[serde(rename = "plur")]
    Plur,
    #[serde(rename = "masc")]
    Masc,
    #[serde(rename = "femn")]
    Femn,
    #[serde(rename = "neut")]
    Neut,
    #[serde(rename = "anim")]
    Anim,
    #[serde(rename = "inan")]
    Inan,
    #[serde(rename = "1per")]
    Per1,
    #[serde(rename = "2per")]
    Per2,
    #[serde(rename = "3per")]
    Per3,
    #[serde(rename = "past")]
    Past,
    #[serde(rename = "pres")]
    Pres,
    #[serde(rename = "impr")]
    Impr,
    #[serde(rename = "infn")]
    Infn,
    /// Indeclinable / unchangeable word
    #[serde(rename = "fixd")]
    Fixd,
}

impl Grammeme {
    /// OpenCorpora tag
    pub fn tag(&self) -> &'static str {
        match self {
            Grammeme::Nomn => "nomn",
            Grammeme::Gent => "gent",
            Grammeme::Datv => "datv",
            Grammeme::Accs => "accs",
            Grammeme::Ablt => "ablt",
            Grammeme::Loct => "loct",
            Grammeme::Sing => "sing",
            Grammeme::Plur => "plur",
            Grammeme::Masc => "masc",
            Grammeme::Femn => "femn",
            Grammeme::Neut => "neut",
            Grammeme::Anim => "anim",
            Grammeme::Inan => "inan",
            Grammeme::Per1 => "1per",
            Grammeme::Per2 => "2per",
            Grammeme::Per3 => "3per",
            Grammeme::Past => "past",
            Grammeme::Pres => "pres",
            Grammeme::Impr => "impr",
            Grammeme::Infn => "infn",
            Grammeme::Fixd => "fixd",
        }
    }

    /// Case represented by this grammeme, if any
    pub fn as_case(&self) -> Option<Case> {
        Case::ALL.into_iter().find(|case| case.grammeme() == *self)
    }

    fn is_number(&self) -> bool {
        matches!(self, Grammeme::Sing | Grammeme::Plur)
    }

    fn is_gender(&self) -> bool {
        matches!(self, Grammeme::Masc | Grammeme::Femn | Grammeme::Neut)
    }

    fn is_animacy(&self) -> bool {
        matches!(self, Grammeme::Anim | Grammeme::Inan)
    }
}

impl fmt::Display for Grammeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unordered set of grammemes attached to a word form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grammemes(SmallVec<[Grammeme; 8]>);

impl Grammemes {
    /// Empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a grammeme, ignoring duplicates
    pub fn insert(&mut self, grammeme: Grammeme) {
        if !self.contains(grammeme) {
            self.0.push(grammeme);
        }
    }

    /// Builder-style insert
    pub fn with(mut self, grammeme: Grammeme) -> Self {
        self.insert(grammeme);
        self
    }

    pub fn contains(&self, grammeme: Grammeme) -> bool {
        self.0.contains(&grammeme)
    }

    /// True when every grammeme of `other` is present here
    pub fn contains_all(&self, other: &Grammemes) -> bool {
        other.iter().all(|g| self.contains(g))
    }

    pub fn iter(&self) -> impl Iterator<Item = Grammeme> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The case grammeme, if present
    pub fn case(&self) -> Option<Case> {
        self.iter().find_map(|g| g.as_case())
    }

    /// `Sing` or `Plur`, if present
    pub fn number(&self) -> Option<Grammeme> {
        self.iter().find(Grammeme::is_number)
    }

    /// `Masc`, `Femn` or `Neut`, if present
    pub fn gender(&self) -> Option<Grammeme> {
        self.iter().find(Grammeme::is_gender)
    }

    /// `Anim` or `Inan`, if present
    pub fn animacy(&self) -> Option<Grammeme> {
        self.iter().find(Grammeme::is_animacy)
    }
}

impl FromIterator<Grammeme> for Grammemes {
    fn from_iter<I: IntoIterator<Item = Grammeme>>(iter: I) -> Self {
        let mut set = Grammemes::new();
        for grammeme in iter {
            set.insert(grammeme);
        }
        set
    }
}

impl Extend<Grammeme> for Grammemes {
    fn extend<I: IntoIterator<Item = Grammeme>>(&mut self, iter: I) {
        for grammeme in iter {
            self.insert(grammeme);
        }
    }
}

impl fmt::Display for Grammemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.iter().map(|g| g.tag()).collect();
        f.write_str(&tags.join(","))
    }
}
