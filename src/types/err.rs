//! Error types used in the library.
//!
//! - Parse errors are external, and returned whenever formula or literal text is malformed.
//! - Rule errors are returned when a line of a rule file cannot be read as a rule.
//! - Clause database errors are returned when a clause cannot be added to a knowledge base.
//!
//! Resolution has no errors, as exhausting every option is an answer (not entailed) and exhausting a limit is reported as unknown.
//!
//! Names of the error enums overlap with corresponding structs or modules.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    ClauseDB(ClauseDBError),
    Parse(ParseError),
    Rule(RuleError),

    /// Some failure to read input, with the message of the underlying error.
    Io(String),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClauseDB(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Rule(e) => write!(f, "{e}"),
            Self::Io(message) => write!(f, "io: {message}"),
        }
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e.to_string())
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// An attempt to add an empty clause.
    ///
    /// The empty clause is never satisfied, and as every goal could be derived from it by other means it is rejected.
    EmptyClause,
}

impl std::fmt::Display for ClauseDBError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClause => write!(f, "the empty clause cannot be added"),
        }
    }
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing of formula or literal text.
///
/// Positions are indices into the sequence of tokens, starting from zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No tokens.
    Empty,

    /// The tokens ended where an operand was expected, e.g. after `not` or a connective.
    UnexpectedEnd,

    /// A token which cannot begin an operand, e.g. a connective or a closing parenthesis.
    UnexpectedToken { position: usize, token: String },

    /// An opening parenthesis without a matching closing parenthesis.
    UnmatchedParenthesis { position: usize },

    /// Tokens remain after a complete formula, e.g. an unopened closing parenthesis.
    Trailing { position: usize, token: String },

    /// An atom containing the negation marker.
    Negation { position: usize },

    /// Connectives or parentheses nested beyond the depth limit, detected at the given token.
    TooDeep { position: usize },

    /// Text which does not read as a literal.
    InvalidLiteral(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::UnexpectedEnd => write!(f, "formula ended where an operand was expected"),
            Self::UnexpectedToken { position, token } => {
                write!(f, "unexpected '{token}' at token {position}")
            }
            Self::UnmatchedParenthesis { position } => {
                write!(f, "parenthesis at token {position} is never closed")
            }
            Self::Trailing { position, token } => {
                write!(f, "trailing '{token}' at token {position}")
            }
            Self::Negation { position } => {
                write!(f, "negation marker inside the atom at token {position}")
            }
            Self::TooDeep { position } => {
                write!(f, "formula nested too deeply at token {position}")
            }
            Self::InvalidLiteral(text) => write!(f, "'{text}' is not a literal"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during preprocessing of a clause.
///
/// Internal to the library, as the clause database reports an empty clause as a [ClauseDBError].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PreprocessingError {
    /// The clause is (or became) empty.
    Unsatisfiable,
}

impl std::fmt::Display for PreprocessingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsatisfiable => write!(f, "empty clause"),
        }
    }
}

/// Errors when reading a line of a rule file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RuleError {
    /// No `THEN` keyword.
    MissingThen,

    /// Nothing after `THEN`.
    MissingConclusion,

    /// Nothing before `THEN`.
    MissingConditions,

    /// More than a (possibly negated) atom after `THEN`.
    TrailingConclusion(String),

    /// `NOT` without an atom to negate.
    DanglingNot,

    /// `AND` or `OR` without an atom on each side.
    DanglingConnective(String),

    /// Two conditions without `AND` or `OR` between them.
    MissingConnective(String),

    /// A token which is not an atom, e.g. a reserved word of the formula syntax or a parenthesis.
    InvalidAtom(String),
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingThen => write!(f, "no THEN"),
            Self::MissingConclusion => write!(f, "no conclusion after THEN"),
            Self::MissingConditions => write!(f, "no conditions before THEN"),
            Self::TrailingConclusion(token) => write!(f, "trailing '{token}' after the conclusion"),
            Self::DanglingNot => write!(f, "NOT without an atom"),
            Self::DanglingConnective(token) => write!(f, "{token} without an atom on each side"),
            Self::MissingConnective(token) => write!(f, "no AND or OR before '{token}'"),
            Self::InvalidAtom(token) => write!(f, "'{token}' is not an atom"),
        }
    }
}

impl From<RuleError> for ErrorKind {
    fn from(e: RuleError) -> Self {
        ErrorKind::Rule(e)
    }
}
