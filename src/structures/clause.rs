//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! Order of the literals is kept, so iteration over a clause (and so the goals derived from the clause during resolution) is deterministic.
//!
//! ```rust
//! # use kb_entail::structures::literal::{CLiteral, Literal};
//! # use kb_entail::structures::clause::Clause;
//! let clause = vec![CLiteral::new("B", false),
//!                   CLiteral::new("C", false),
//!                   CLiteral::new("A", true)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_string(), "{¬B, ¬C, A}");
//! assert_eq!(clause.as_formula(), "not B or not C or A");
//! assert!(!clause.is_tautology());
//! ```
//!
//! - The empty clause is always false (never true).
//! - A clause containing some literal and its negation is a tautology, and always true.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::literal::{CLiteral, Literal};

/// The clause trait.
pub trait Clause {
    /// The clause as a set of literals, e.g. `{¬B, ¬C, A}`.
    fn as_string(&self) -> String;

    /// The clause as a disjunction in the formula syntax, e.g. `not B or not C or A`.
    ///
    /// The empty clause has no such representation, and is written as the empty string.
    fn as_formula(&self) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order and with repetition.
    fn atoms(&self) -> impl Iterator<Item = &str>;

    /// Whether the clause contains some literal and its negation.
    fn is_tautology(&self) -> bool;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for CClause {
    fn as_string(&self) -> String {
        let literals = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        format!("{{{}}}", literals.join(", "))
    }

    fn as_formula(&self) -> String {
        let disjuncts = self
            .iter()
            .map(|literal| match literal.polarity() {
                true => literal.atom().to_owned(),
                false => format!("not {}", literal.atom()),
            })
            .collect::<Vec<_>>();
        disjuncts.join(" or ")
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|literal| literal.atom())
    }

    fn is_tautology(&self) -> bool {
        self.iter()
            .enumerate()
            .any(|(index, literal)| self[index + 1..].iter().any(|other| literal.is_complement(other)))
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for CLiteral {
    fn as_string(&self) -> String {
        format!("{{{self}}}")
    }

    fn as_formula(&self) -> String {
        match self.polarity() {
            true => self.atom().to_owned(),
            false => format!("not {}", self.atom()),
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.atom())
    }

    fn is_tautology(&self) -> bool {
        false
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
