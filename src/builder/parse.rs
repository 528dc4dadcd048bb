/*!
A tokenizer and parser for formulas.

# Syntax

Tokens are separated by whitespace, and each parenthesis is a token by itself.
A token is either one of the reserved words `not`, `and`, `or`, `implies`, `equiv`, a parenthesis, or else an [atom](crate::structures::atom).

From loosest to tightest, the connectives bind as:

| connective | associativity |
|------------|---------------|
| `equiv`    | left          |
| `implies`  | left          |
| `or`       | left          |
| `and`      | left          |
| `not`      | prefix        |

So, `not p and q` is `(not p) and q`, and `p implies q implies r` is `(p implies q) implies r`.
Within parentheses, parsing begins again from `equiv`.

```rust
# use kb_entail::builder::parse::parse_formula;
# use kb_entail::structures::term::Term;
let formula = parse_formula("not p and q or r").unwrap();

assert_eq!(
    formula,
    Term::or(Term::and(Term::not(Term::var("p")), Term::var("q")), Term::var("r"))
);
```

Every token must be used, and an error is returned otherwise.
An error is also returned for a formula nested deeper than the [depth limit](DEPTH_LIMIT).
*/

use crate::{
    misc::log::targets::{self},
    structures::{atom::RESERVED, literal::NEGATION, term::Term},
    types::err::ParseError,
};

/// A token of a formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    Not,
    And,
    Or,
    Implies,
    Equiv,
    Atom(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Not => write!(f, "{}", RESERVED[0]),
            Self::And => write!(f, "{}", RESERVED[1]),
            Self::Or => write!(f, "{}", RESERVED[2]),
            Self::Implies => write!(f, "{}", RESERVED[3]),
            Self::Equiv => write!(f, "{}", RESERVED[4]),
            Self::Atom(atom) => write!(f, "{atom}"),
        }
    }
}

/// Splits text into tokens.
///
/// Fails only if some atom contains the negation marker.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let padded = text.replace('(', " ( ").replace(')', " ) ");

    padded
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| match token {
            "(" => Ok(Token::Open),
            ")" => Ok(Token::Close),
            "not" => Ok(Token::Not),
            "and" => Ok(Token::And),
            "or" => Ok(Token::Or),
            "implies" => Ok(Token::Implies),
            "equiv" => Ok(Token::Equiv),
            atom if atom.contains(NEGATION) => Err(ParseError::Negation { position }),
            atom => Ok(Token::Atom(atom.to_owned())),
        })
        .collect()
}

/// Parses text to a term.
pub fn parse_formula(text: &str) -> Result<Term, ParseError> {
    let tokens = tokenize(text)?;
    log::trace!(target: targets::PARSE, "Tokens: {tokens:?}");

    let term = parse_tokens(tokens)?;
    log::trace!(target: targets::PARSE, "Parsed: {term}");

    Ok(term)
}

/// The greatest nesting of connectives and parentheses in a formula.
///
/// Deeper formulas fail to parse with [ParseError::TooDeep], as each later pass over a term recurses through its depth.
pub const DEPTH_LIMIT: usize = 256;

/// Parses a sequence of tokens to a term, using every token.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Term, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        position: 0,
        nesting: 0,
    };

    let (term, _) = parser.equiv()?;

    match parser.peek() {
        None => Ok(term),
        Some(token) => Err(ParseError::Trailing {
            position: parser.position,
            token: token.to_string(),
        }),
    }
}

impl std::str::FromStr for Term {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

/// A term, with the depth of its deepest connective.
type Parsed = (Term, usize);

/// A cursor over tokens, with a method for each level of binding.
struct Parser {
    tokens: Vec<Token>,
    position: usize,

    /// Open negations and parentheses, each of which is a level of recursion.
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Advances past the current token if it is `token`.
    fn eat(&mut self, token: &Token) -> bool {
        match self.peek() {
            Some(current) if current == token => {
                self.position += 1;
                true
            }
            _ => false,
        }
    }

    /// Checks a depth, of either a term or of nesting, against the [limit](DEPTH_LIMIT).
    fn within_limit(&self, depth: usize) -> Result<(), ParseError> {
        match depth > DEPTH_LIMIT {
            true => Err(ParseError::TooDeep {
                position: self.position,
            }),
            false => Ok(()),
        }
    }

    /// Parses with `level` one level of nesting further in.
    fn nested(&mut self, level: fn(&mut Self) -> Result<Parsed, ParseError>) -> Result<Parsed, ParseError> {
        self.within_limit(self.nesting + 1)?;
        self.nesting += 1;
        let parsed = level(self);
        self.nesting -= 1;
        parsed
    }

    /// A left associative loop of `connective` over operands from `operand`.
    fn binary(
        &mut self,
        connective: Token,
        operand: fn(&mut Self) -> Result<Parsed, ParseError>,
        build: fn(Term, Term) -> Term,
    ) -> Result<Parsed, ParseError> {
        let (mut left, mut depth) = operand(self)?;
        while self.eat(&connective) {
            let (right, right_depth) = operand(self)?;
            depth = std::cmp::max(depth, right_depth) + 1;
            self.within_limit(depth)?;
            left = build(left, right);
        }
        Ok((left, depth))
    }

    fn equiv(&mut self) -> Result<Parsed, ParseError> {
        self.binary(Token::Equiv, Self::implies, Term::equiv)
    }

    fn implies(&mut self) -> Result<Parsed, ParseError> {
        self.binary(Token::Implies, Self::or, Term::implies)
    }

    fn or(&mut self) -> Result<Parsed, ParseError> {
        self.binary(Token::Or, Self::and, Term::or)
    }

    fn and(&mut self) -> Result<Parsed, ParseError> {
        self.binary(Token::And, Self::not, Term::and)
    }

    fn not(&mut self) -> Result<Parsed, ParseError> {
        match self.eat(&Token::Not) {
            true => {
                let (operand, depth) = self.nested(Self::not)?;
                self.within_limit(depth + 1)?;
                Ok((Term::not(operand), depth + 1))
            }
            false => self.term(),
        }
    }

    fn term(&mut self) -> Result<Parsed, ParseError> {
        let position = self.position;

        match self.tokens.get(position).cloned() {
            None => Err(ParseError::UnexpectedEnd),

            Some(Token::Atom(atom)) => {
                self.position += 1;
                Ok((Term::Var(atom), 0))
            }

            Some(Token::Open) => {
                self.position += 1;
                let parsed = self.nested(Self::equiv)?;
                match self.eat(&Token::Close) {
                    true => Ok(parsed),
                    false => Err(ParseError::UnmatchedParenthesis { position }),
                }
            }

            Some(token) => Err(ParseError::UnexpectedToken {
                position,
                token: token.to_string(),
            }),
        }
    }
}
