/*!
Assignments of truth values to atoms.

An assignment is partial, and any atom without a value is read as false when [evaluating](crate::structures::term::Term::evaluate) a formula.

Assignments are used to check a formula agrees with its normal form, and to record the literals established by a [proof](crate::procedures::proof::Proof).
*/

use std::collections::BTreeMap;

use crate::structures::{
    atom::Atom,
    clause::CClause,
    literal::{CLiteral, Literal},
};

/// A (partial) map from atoms to truth values, ordered by atom.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<Atom, bool>,
}

impl Assignment {
    /// Sets the value of `atom`, returning the previous value, if any.
    pub fn set(&mut self, atom: impl Into<Atom>, value: bool) -> Option<bool> {
        self.values.insert(atom.into(), value)
    }

    /// The value of `atom`, if one has been set.
    pub fn value_of(&self, atom: &str) -> Option<bool> {
        self.values.get(atom).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// An iterator over (atom, value) pairs, in order of atom.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(atom, value)| (atom.as_str(), *value))
    }

    /// The assignment as literals, in order of atom.
    pub fn literals(&self) -> impl Iterator<Item = CLiteral> + '_ {
        self.iter().map(|(atom, value)| CLiteral::new(atom, value))
    }

    /// Whether the literal is true on the assignment.
    pub fn satisfies_literal(&self, literal: &CLiteral) -> bool {
        self.value_of(literal.atom()).unwrap_or(false) == literal.polarity()
    }

    /// Whether each clause has some literal true on the assignment.
    pub fn satisfies(&self, clauses: &[CClause]) -> bool {
        clauses
            .iter()
            .all(|clause| clause.iter().any(|literal| self.satisfies_literal(literal)))
    }

    /// Every assignment to the given atoms, with the assignments read from the bits of a counter.
    pub fn every<'a>(atoms: &'a [&'a str]) -> impl Iterator<Item = Assignment> + 'a {
        (0..(1_u64 << atoms.len())).map(move |bits| {
            let mut assignment = Assignment::default();
            for (index, atom) in atoms.iter().enumerate() {
                assignment.set(*atom, bits & (1 << index) != 0);
            }
            assignment
        })
    }
}

impl FromIterator<CLiteral> for Assignment {
    fn from_iter<I: IntoIterator<Item = CLiteral>>(literals: I) -> Self {
        let mut assignment = Assignment::default();
        for literal in literals {
            let polarity = literal.polarity();
            assignment.set(literal.atom(), polarity);
        }
        assignment
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self.literals().map(|l| l.to_string()).collect::<Vec<_>>();
        write!(f, "{}", literals.join(" "))
    }
}

#[cfg(test)]
mod assignment_tests {
    use super::*;

    #[test]
    fn every() {
        let atoms = ["p", "q", "r"];
        let all = Assignment::every(&atoms).collect::<Vec<_>>();

        assert_eq!(all.len(), 8);
        assert!(all.iter().all(|a| a.len() == 3));
        assert_eq!(all[5].to_string(), "p ¬q r");
    }

    #[test]
    fn satisfaction() {
        let assignment: Assignment = [CLiteral::new("p", true), CLiteral::new("q", false)]
            .into_iter()
            .collect();

        let clauses = vec![
            vec![CLiteral::new("q", true), CLiteral::new("p", true)],
            vec![CLiteral::new("r", false)],
        ];
        assert!(assignment.satisfies(&clauses));

        assert!(!assignment.satisfies(&[vec![CLiteral::new("r", true)]]));
        assert!(!assignment.satisfies(&[CClause::new()]));
    }
}
