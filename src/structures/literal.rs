//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The canonical implementation of the literal trait is the [CLiteral] structure.
//!
//! As text, a literal is the name of its atom, prefixed by the [negation marker](NEGATION) if the polarity of the literal is false.
//! The same text is used to display a literal and to read a literal.
//!
//! ```rust
//! # use kb_entail::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new("p", true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), "p");
//! assert_eq!(literal.negate().to_string(), "¬p");
//!
//! let read: CLiteral = "¬p".parse().unwrap();
//! assert!(read.is_complement(&literal));
//! ```
//!
//! Implementation of the literal trait requires implementation of two additional traits:
//! - [Ord]
//!   + Literals should be ordered by atom and then polarity, with 'false' strictly less than 'true'.
//! - [Hash](std::hash::Hash)
//!   + So literals may be used as keys of maps, and lists of literals as keys of a cache.

use crate::{
    structures::atom::{valid_atom, Atom},
    types::err::ParseError,
};

/// The single character used to mark a negated literal.
pub const NEGATION: char = '¬';

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: impl Into<Atom>, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> &str;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its canonical form.
    fn canonical(&self) -> CLiteral;

    /// Whether the literal is the negation of the other literal.
    fn is_complement(&self, other: &Self) -> bool {
        self.atom() == other.atom() && self.polarity() != other.polarity()
    }
}

/// The representation of a literal as an atom paired with a boolean.
///
/// The derived order compares atoms first, as the atom is the first field.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// The polarity of a literal.
    polarity: bool,
}

impl Literal for CLiteral {
    fn new(atom: impl Into<Atom>, polarity: bool) -> Self {
        Self {
            atom: atom.into(),
            polarity,
        }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            polarity: !self.polarity,
        }
    }

    fn atom(&self) -> &str {
        &self.atom
    }

    fn polarity(&self) -> bool {
        self.polarity
    }

    fn canonical(&self) -> CLiteral {
        self.clone()
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "{NEGATION}{}", self.atom),
        }
    }
}

impl std::str::FromStr for CLiteral {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, polarity) = match s.strip_prefix(NEGATION) {
            Some(name) => (name, false),
            None => (s, true),
        };

        match valid_atom(name) {
            true => Ok(CLiteral::new(name, polarity)),
            false => Err(ParseError::InvalidLiteral(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn order() {
        let not_p = CLiteral::new("p", false);
        let p = CLiteral::new("p", true);
        let not_q = CLiteral::new("q", false);

        assert!(not_p < p);
        assert!(p < not_q);
    }

    #[test]
    fn read() {
        assert_eq!("S02".parse(), Ok(CLiteral::new("S02", true)));
        assert_eq!("¬S02".parse(), Ok(CLiteral::new("S02", false)));

        for bad in ["", "¬", "¬¬p", "not", "p)", "a¬b"] {
            assert_eq!(
                bad.parse::<CLiteral>(),
                Err(ParseError::InvalidLiteral(bad.to_owned()))
            );
        }
    }

    #[test]
    fn complement() {
        let p = CLiteral::new("p", true);

        assert!(p.is_complement(&p.negate()));
        assert!(!p.is_complement(&p));
        assert!(!p.is_complement(&CLiteral::new("q", false)));
    }
}
