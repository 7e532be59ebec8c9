use super::lexicon::{NEGATIVE_TERMS, POSITIVE_TERMS, SOLUTION_VERBS};
use super::matcher::{Corpus, Morphology, Phrase};

/// Points added per unit of sentiment before clamping.
const POINTS_PER_TERM: i64 = 2;
const MAX_ADJUSTMENT: i64 = 15;

/// Positive and negative term tables used to nudge every criterion.
#[derive(Debug, Clone)]
pub(crate) struct SentimentLexicon {
    positive: Vec<Phrase>,
    negative: Vec<Phrase>,
    solution_verbs: &'static [&'static str],
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE_TERMS.iter().map(|term| Phrase::parse(term)).collect(),
            negative: NEGATIVE_TERMS.iter().map(|term| Phrase::parse(term)).collect(),
            solution_verbs: SOLUTION_VERBS,
        }
    }
}

impl SentimentLexicon {
    /// Net count of positive minus unexcused negative mentions.
    pub(crate) fn score(&self, corpus: &Corpus) -> i64 {
        let positive: usize = self
            .positive
            .iter()
            .map(|term| term.count_in(corpus, Morphology::COMMON_INFLECTIONS))
            .sum();

        let penalised: usize = self
            .negative
            .iter()
            .map(|term| {
                let mentions = term.count_in(corpus, Morphology::COMMON_INFLECTIONS);
                let excused: usize = self
                    .solution_verbs
                    .iter()
                    .map(|verb| solution_context_spans(corpus.text(), verb, term.as_str()))
                    .sum();
                mentions.saturating_sub(excused)
            })
            .sum();

        to_i64(positive) - to_i64(penalised)
    }

    /// Score adjustment applied to each criterion, bounded to ±15 points.
    pub(crate) fn adjustment(&self, corpus: &Corpus) -> f64 {
        let points = self
            .score(corpus)
            .saturating_mul(POINTS_PER_TERM)
            .clamp(-MAX_ADJUSTMENT, MAX_ADJUSTMENT);
        points as f64
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Counts spans where `verb` and `term` share a line, in either order.
///
/// Matching is on raw substrings. Each span is leftmost and greedy: it starts at the first
/// occurrence of either word and runs to the last occurrence of the other word on that line.
/// Spans never overlap.
pub(crate) fn solution_context_spans(text: &str, verb: &str, term: &str) -> usize {
    if verb.is_empty() || term.is_empty() {
        return 0;
    }

    text.split(|c: char| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
        .map(|line| spans_in_line(line, verb, term))
        .sum()
}

fn spans_in_line(line: &str, verb: &str, term: &str) -> usize {
    let mut count = 0;
    let mut cursor = 0;

    while let Some(rest) = line.get(cursor..) {
        let verb_first = greedy_span(rest, verb, term);
        let term_first = greedy_span(rest, term, verb);

        let (_, end) = match (verb_first, term_first) {
            (Some(verb_span), Some(term_span)) if term_span.0 < verb_span.0 => term_span,
            (Some(verb_span), _) => verb_span,
            (None, Some(term_span)) => term_span,
            (None, None) => break,
        };

        count += 1;
        cursor += end;
    }

    count
}

fn greedy_span(haystack: &str, lead: &str, trail: &str) -> Option<(usize, usize)> {
    let start = haystack.find(lead)?;
    let after = start + lead.len();
    let last = haystack.get(after..)?.rfind(trail)?;
    Some((start, after + last + trail.len()))
}
