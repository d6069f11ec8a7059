pub const DEFAULT_MAX_WORDS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("No text to analyze")]
    Empty,
    #[error("Text has {count} words, the limit is {max}")]
    TooManyWords { count: usize, max: usize },
}

/// What a piece of collected input turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    Single(String),
    Batch(Vec<String>),
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trim `text` and check it against the word limit.
pub fn validate_text(text: &str, max_words: usize) -> Result<String, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let count = count_words(trimmed);
    if count > max_words {
        return Err(InputError::TooManyWords {
            count,
            max: max_words,
        });
    }

    Ok(trimmed.to_string())
}

/// Non-blank lines of `content`, trimmed, in file order.
pub fn parse_batch(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify uploaded file content: several lines form a batch, otherwise the
/// whole content is one text.
pub fn parse_upload(content: &str) -> TextInput {
    let lines = parse_batch(content);
    if lines.len() > 1 {
        TextInput::Batch(lines)
    } else {
        TextInput::Single(content.to_string())
    }
}
