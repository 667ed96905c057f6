use thiserror::Error;

/// Errors raised while building a section parser.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParserError {
    #[error("label vocabulary must not be empty")]
    EmptyVocabulary,
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
