#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that is neither whitespace, a digit, an operator
    /// symbol, a grouping mark, a terminator, nor alphabetic.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The byte offset of the character in the source text.
        position:  usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Unrecognized character '{character}' at offset {position}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
