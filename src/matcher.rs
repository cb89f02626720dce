#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    /// 1-based
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub present: bool,
    /// First line containing the phrase. `None` if the phrase is absent or
    /// only occurs across a line break.
    pub context: Option<ContextLine>,
}

/// Case-insensitive containment over the whole text.
pub fn matches(text: &str, phrase: &str) -> bool {
    text.to_lowercase().contains(&phrase.to_lowercase())
}

/// The first line containing `phrase`, trimmed.
pub fn context_line(text: &str, phrase: &str) -> Option<ContextLine> {
    let phrase = phrase.to_lowercase();

    text.split('\n')
        .enumerate()
        .find(|(_, line)| line.to_lowercase().contains(&phrase))
        .map(|(i, line)| ContextLine {
            number: i + 1,
            text: line.trim().to_string(),
        })
}

pub fn find_phrase(text: &str, phrase: &str) -> MatchResult {
    if !matches(text, phrase) {
        return MatchResult {
            present: false,
            context: None,
        };
    }

    MatchResult {
        present: true,
        context: context_line(text, phrase),
    }
}
