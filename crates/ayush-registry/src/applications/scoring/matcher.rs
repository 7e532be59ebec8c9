use std::ops::Range;

/// Word characters follow the classic ASCII `\w` class; everything else separates words.
pub(crate) fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Lower-cased analysis text together with its word tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    length: usize,
    tokens: Vec<Range<usize>>,
}

impl Corpus {
    pub fn new(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let length = text.encode_utf16().count();
        let tokens = tokenize(&text);
        Self {
            text,
            length,
            tokens,
        }
    }

    /// Joins the idea explanation and company description the way the intake form submits them.
    pub fn from_narrative(idea_explanation: &str, company_description: &str) -> Self {
        Self::new(&format!("{idea_explanation} {company_description}"))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in UTF-16 code units, matching what browser clients report for the same text.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens
            .get(index)
            .and_then(|range| self.text.get(range.clone()))
    }

    /// Text between token `index` and the token after it.
    pub fn separator(&self, index: usize) -> Option<&str> {
        let current = self.tokens.get(index)?;
        let next = self.tokens.get(index + 1)?;
        self.text.get(current.end..next.start)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}

fn tokenize(text: &str) -> Vec<Range<usize>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (index, byte) in text.bytes().enumerate() {
        match (is_word_byte(byte), start) {
            (true, None) => start = Some(index),
            (false, Some(begin)) => {
                tokens.push(begin..index);
                start = None;
            }
            _ => {}
        }
    }

    if let Some(begin) = start {
        tokens.push(begin..text.len());
    }

    tokens
}

/// Suffixes accepted on the final word of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Morphology {
    suffixes: &'static [&'static str],
}

impl Morphology {
    pub const EXACT: Morphology = Morphology { suffixes: &[""] };
    pub const COMMON_INFLECTIONS: Morphology = Morphology {
        suffixes: &["", "s", "ing", "ed"],
    };
    pub const COMMON_INFLECTIONS_WITH_ES: Morphology = Morphology {
        suffixes: &["", "s", "es", "ing", "ed"],
    };

    pub fn accepts(&self, stem: &str, word: &str) -> bool {
        word.strip_prefix(stem)
            .map(|suffix| self.suffixes.contains(&suffix))
            .unwrap_or(false)
    }
}

/// Keyword or multi-word phrase matched on whole words.
///
/// Inner words must match exactly and be joined by the same separator as the phrase
/// (`"business model"` needs a single space, `"cutting-edge"` a hyphen). Only the final word
/// takes inflections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    raw: String,
    words: Vec<String>,
    separators: Vec<String>,
}

impl Phrase {
    pub fn parse(raw: &str) -> Self {
        let corpus = Corpus::new(raw);
        let words = (0..corpus.token_count())
            .filter_map(|index| corpus.token(index).map(str::to_string))
            .collect::<Vec<_>>();
        let separators = (0..words.len().saturating_sub(1))
            .filter_map(|index| corpus.separator(index).map(str::to_string))
            .collect();

        Self {
            raw: corpus.text,
            words,
            separators,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Non-overlapping occurrences of the phrase, scanning left to right.
    pub fn count_in(&self, corpus: &Corpus, morphology: Morphology) -> usize {
        let span = self.words.len();
        if span == 0 {
            return 0;
        }

        let mut count = 0;
        let mut index = 0;
        while index + span <= corpus.token_count() {
            if self.matches_at(corpus, index, morphology) {
                count += 1;
                index += span;
            } else {
                index += 1;
            }
        }
        count
    }

    fn matches_at(&self, corpus: &Corpus, index: usize, morphology: Morphology) -> bool {
        let Some((last, leading)) = self.words.split_last() else {
            return false;
        };

        for (offset, word) in leading.iter().enumerate() {
            if corpus.token(index + offset) != Some(word.as_str()) {
                return false;
            }
            let expected = self.separators.get(offset).map(String::as_str);
            if corpus.separator(index + offset) != expected {
                return false;
            }
        }

        corpus
            .token(index + leading.len())
            .map(|word| morphology.accepts(last, word))
            .unwrap_or(false)
    }
}
