/*!
Formulas, as trees of connectives over atoms.

A [Term] owns its children, and no pass over a term mutates a term in place.
Instead, each [transformation](crate::transform) consumes a term and builds a fresh term.

# Text

The [Display] of a term is in the formula syntax read by the [parser](crate::builder::parse), with every binary connective parenthesised.
So, printing a term and parsing the result returns an identical term.

```rust
# use kb_entail::structures::term::Term;
let formula = Term::implies(
    Term::and(Term::var("S02"), Term::not(Term::var("S04"))),
    Term::var("L02"),
);

assert_eq!(formula.to_string(), "((S02 and not S04) implies L02)");
assert_eq!(formula.symbolic(), "((S02 ∧ ¬S04) → L02)");
assert_eq!(formula.to_string().parse::<Term>(), Ok(formula));
```
*/

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Assignment,
};

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// An atom.
    Var(Atom),

    /// The negation of a formula.
    Not(Box<Term>),

    /// The conjunction of two formulas.
    And(Box<Term>, Box<Term>),

    /// The disjunction of two formulas.
    Or(Box<Term>, Box<Term>),

    /// A (material) implication from an antecedent to a consequent.
    Implies(Box<Term>, Box<Term>),

    /// The (material) equivalence of two formulas.
    Equiv(Box<Term>, Box<Term>),
}

impl Term {
    pub fn var(atom: impl Into<Atom>) -> Self {
        Term::Var(atom.into())
    }

    pub fn not(operand: Term) -> Self {
        Term::Not(Box::new(operand))
    }

    pub fn and(left: Term, right: Term) -> Self {
        Term::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Term, right: Term) -> Self {
        Term::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(antecedent: Term, consequent: Term) -> Self {
        Term::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn equiv(left: Term, right: Term) -> Self {
        Term::Equiv(Box::new(left), Box::new(right))
    }

    /// The term of a literal, so either an atom or a negated atom.
    pub fn literal(literal: &CLiteral) -> Self {
        match literal.polarity() {
            true => Term::var(literal.atom()),
            false => Term::not(Term::var(literal.atom())),
        }
    }

    /// The literal of the term, if the term is an atom or a negated atom.
    pub fn as_literal(&self) -> Option<CLiteral> {
        match self {
            Term::Var(atom) => Some(CLiteral::new(atom.as_str(), true)),
            Term::Not(operand) => match operand.as_ref() {
                Term::Var(atom) => Some(CLiteral::new(atom.as_str(), false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether the term is an atom or a negated atom.
    pub fn is_literal(&self) -> bool {
        self.as_literal().is_some()
    }

    /// Whether the term is a disjunction of literals (including a single literal).
    pub fn is_clause(&self) -> bool {
        match self {
            Term::Or(left, right) => left.is_clause() && right.is_clause(),
            _ => self.is_literal(),
        }
    }

    /// Whether the term is a conjunction of clauses (including a single clause).
    pub fn is_cnf(&self) -> bool {
        match self {
            Term::And(left, right) => left.is_cnf() && right.is_cnf(),
            _ => self.is_clause(),
        }
    }

    /// The atoms of the term, sorted and without repetition.
    pub fn atoms(&self) -> Vec<&str> {
        let mut atoms = Vec::default();
        self.collect_atoms(&mut atoms);
        atoms.sort_unstable();
        atoms.dedup();
        atoms
    }

    fn collect_atoms<'t>(&'t self, atoms: &mut Vec<&'t str>) {
        match self {
            Term::Var(atom) => atoms.push(atom),
            Term::Not(operand) => operand.collect_atoms(atoms),
            Term::And(left, right)
            | Term::Or(left, right)
            | Term::Implies(left, right)
            | Term::Equiv(left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }

    /// The count of nodes in the term.
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) => 1,
            Term::Not(operand) => 1 + operand.size(),
            Term::And(left, right)
            | Term::Or(left, right)
            | Term::Implies(left, right)
            | Term::Equiv(left, right) => 1 + left.size() + right.size(),
        }
    }

    /// The value of the term on an assignment, where any atom without a value is false.
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        match self {
            Term::Var(atom) => assignment.value_of(atom).unwrap_or(false),
            Term::Not(operand) => !operand.evaluate(assignment),
            Term::And(left, right) => left.evaluate(assignment) && right.evaluate(assignment),
            Term::Or(left, right) => left.evaluate(assignment) || right.evaluate(assignment),
            Term::Implies(left, right) => !left.evaluate(assignment) || right.evaluate(assignment),
            Term::Equiv(left, right) => left.evaluate(assignment) == right.evaluate(assignment),
        }
    }

    /// The term written with the usual symbols of logic in place of the reserved words.
    pub fn symbolic(&self) -> String {
        match self {
            Term::Var(atom) => atom.clone(),
            Term::Not(operand) => format!("¬{}", operand.symbolic()),
            Term::And(left, right) => format!("({} ∧ {})", left.symbolic(), right.symbolic()),
            Term::Or(left, right) => format!("({} ∨ {})", left.symbolic(), right.symbolic()),
            Term::Implies(left, right) => format!("({} → {})", left.symbolic(), right.symbolic()),
            Term::Equiv(left, right) => format!("({} ↔ {})", left.symbolic(), right.symbolic()),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(atom) => write!(f, "{atom}"),
            Term::Not(operand) => write!(f, "not {operand}"),
            Term::And(left, right) => write!(f, "({left} and {right})"),
            Term::Or(left, right) => write!(f, "({left} or {right})"),
            Term::Implies(left, right) => write!(f, "({left} implies {right})"),
            Term::Equiv(left, right) => write!(f, "({left} equiv {right})"),
        }
    }
}
