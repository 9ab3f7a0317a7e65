//! Keyword search over the editor buffer.
//!
//! The entry line holds comma-separated keywords. The buffer is split into
//! sentences, every sentence containing any keyword is collected, and each
//! keyword's occurrence count is taken over the matched text with the
//! `regex` crate (escaped literals, optional case-insensitivity).

use regex::RegexBuilder;

/// Case handling for keyword matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Keywords must match with identical case.
    #[default]
    MatchCase,
    /// Keywords match regardless of case.
    IgnoreCase,
}

impl MatchMode {
    /// Human-readable label used by the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            MatchMode::MatchCase => "Match Case",
            MatchMode::IgnoreCase => "Ignore Case",
        }
    }
}

/// Outcome of one buffer search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Sentences containing at least one keyword, in buffer order.
    pub sentences: Vec<String>,
    /// Occurrence count per keyword over the matched sentences.
    pub keyword_counts: Vec<(String, usize)>,
}

impl SearchReport {
    /// Number of matched sentences.
    pub fn sentence_matches(&self) -> usize {
        self.sentences.len()
    }

    /// Render the report for the results panel and for export.
    pub fn render(&self) -> String {
        let mut out = format!("Sentence matches: {}\n", self.sentence_matches());
        out.push_str("\nMatches:\n\n");
        out.push_str(&self.sentences.join("\n\n"));
        out.push_str("\n\n------END OF RESULTS------\n\n");
        for (keyword, count) in &self.keyword_counts {
            out.push_str(&format!("Number of matches for \"{keyword}\": {count}\n"));
        }
        out
    }
}

/// Run a keyword search over `text`.
pub fn search(text: &str, entry: &str, mode: MatchMode) -> Result<SearchReport, regex::Error> {
    let keywords = split_keywords(entry);
    let sentences: Vec<String> = split_sentences(text)
        .into_iter()
        .filter(|sentence| {
            keywords
                .iter()
                .any(|keyword| sentence_contains(sentence, keyword, mode))
        })
        .collect();

    let matched_text = sentences.join("\n\n");
    let mut keyword_counts = Vec::with_capacity(keywords.len());
    for keyword in &keywords {
        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(mode == MatchMode::IgnoreCase)
            .build()?;
        keyword_counts.push((keyword.clone(), pattern.find_iter(&matched_text).count()));
    }

    Ok(SearchReport {
        sentences,
        keyword_counts,
    })
}

/// Split a comma-separated keyword entry, dropping empty items.
pub fn split_keywords(entry: &str) -> Vec<String> {
    entry
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into sentences, keeping the terminating punctuation with each
/// sentence. A `.`, `!` or `?` ends a sentence when followed by whitespace or
/// the end of input; a trailing fragment without punctuation still counts.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?')
            && chars.peek().is_none_or(|next| next.is_whitespace())
        {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

fn sentence_contains(sentence: &str, keyword: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::MatchCase => sentence.contains(keyword),
        MatchMode::IgnoreCase => sentence
            .to_lowercase()
            .contains(&keyword.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_keep_their_punctuation() {
        let sentences = split_sentences("First one. Second one! Third?");
        assert_eq!(sentences, ["First one.", "Second one!", "Third?"]);
    }

    #[test]
    fn decimal_points_do_not_split_sentences() {
        let sentences = split_sentences("Version 1.5 shipped. Done.");
        assert_eq!(sentences, ["Version 1.5 shipped.", "Done."]);
    }

    #[test]
    fn trailing_fragment_counts_as_a_sentence() {
        let sentences = split_sentences("Finished. still typing");
        assert_eq!(sentences, ["Finished.", "still typing"]);
    }

    #[test]
    fn keywords_split_on_commas_and_drop_blanks() {
        assert_eq!(split_keywords("fox, dog ,,"), ["fox", "dog"]);
    }

    #[test]
    fn collects_sentences_containing_any_keyword() {
        let text = "The fox ran. The dog slept. Nothing here.";
        let report = search(text, "fox,dog", MatchMode::MatchCase).unwrap();
        assert_eq!(report.sentences, ["The fox ran.", "The dog slept."]);
        assert_eq!(report.sentence_matches(), 2);
    }

    #[test]
    fn match_case_distinguishes_case() {
        let text = "Fox here. fox there.";
        let report = search(text, "fox", MatchMode::MatchCase).unwrap();
        assert_eq!(report.sentences, ["fox there."]);
        assert_eq!(report.keyword_counts, [("fox".to_string(), 1)]);
    }

    #[test]
    fn ignore_case_counts_every_variant() {
        let text = "Fox here. fox there. FOX everywhere.";
        let report = search(text, "fox", MatchMode::IgnoreCase).unwrap();
        assert_eq!(report.sentence_matches(), 3);
        assert_eq!(report.keyword_counts, [("fox".to_string(), 3)]);
    }

    #[test]
    fn regex_metacharacters_in_keywords_are_literal() {
        let text = "Cost is $5.00 today.";
        let report = search(text, "$5.00", MatchMode::MatchCase).unwrap();
        assert_eq!(report.sentence_matches(), 1);
        assert_eq!(report.keyword_counts, [("$5.00".to_string(), 1)]);
    }

    #[test]
    fn report_renders_counts_and_totals() {
        let report = search("The fox ran.", "fox", MatchMode::MatchCase).unwrap();
        let rendered = report.render();
        assert!(rendered.starts_with("Sentence matches: 1\n"));
        assert!(rendered.contains("The fox ran."));
        assert!(rendered.contains("Number of matches for \"fox\": 1"));
    }
}
