/*!
Random formulas and clause sets.

Formulas are generated top down.
At each node, the node is a (possibly negated) atom with some probability, or if the node is deep enough, and is otherwise a random connective over two random subformulas.

```rust
# use kb_entail::generic::{minimal_pcg::MinimalPCG32, random::random_formula};
# use rand::SeedableRng;
let mut rng = MinimalPCG32::seed_from_u64(7);
let formula = random_formula(&mut rng, &["A", "B", "C"]).unwrap();

assert!(formula.atoms().iter().all(|atom| ["A", "B", "C"].contains(atom)));
```

Each generator returns None when given no atoms.
*/

use rand::Rng;

use crate::structures::{
    clause::CClause,
    literal::{CLiteral, Literal},
    term::Term,
};

/// The probability a leaf is negated.
pub const NEGATION_PROBABILITY: f64 = 0.3;

/// The probability a node is a leaf, when the node is not too deep to have children.
pub const LEAF_PROBABILITY: f64 = 0.3;

/// Nodes deeper than this are leaves.
pub const MAX_DEPTH: usize = 2;

fn random_atom<'a>(rng: &mut impl Rng, atoms: &[&'a str]) -> Option<&'a str> {
    match atoms.is_empty() {
        true => None,
        false => Some(atoms[rng.random_range(0..atoms.len())]),
    }
}

/// A random literal over the atoms, negative with probability [NEGATION_PROBABILITY].
pub fn random_literal(rng: &mut impl Rng, atoms: &[&str]) -> Option<CLiteral> {
    let atom = random_atom(rng, atoms)?;
    let polarity = !rng.random_bool(NEGATION_PROBABILITY);
    Some(CLiteral::new(atom, polarity))
}

/// A random formula over the atoms.
pub fn random_formula(rng: &mut impl Rng, atoms: &[&str]) -> Option<Term> {
    random_formula_at(rng, atoms, 0)
}

fn random_formula_at(rng: &mut impl Rng, atoms: &[&str], depth: usize) -> Option<Term> {
    if depth > MAX_DEPTH || rng.random_bool(LEAF_PROBABILITY) {
        return random_literal(rng, atoms).map(|literal| Term::literal(&literal));
    }

    let left = random_formula_at(rng, atoms, depth + 1)?;
    let right = random_formula_at(rng, atoms, depth + 1)?;

    let formula = match rng.random_range(0..4) {
        0 => Term::and(left, right),
        1 => Term::or(left, right),
        2 => Term::implies(left, right),
        _ => Term::equiv(left, right),
    };
    Some(formula)
}

/// A random clause of between one and `width` literals over the atoms, with either polarity equally likely.
///
/// Literals may repeat, and the clause may be a tautology.
pub fn random_clause(rng: &mut impl Rng, atoms: &[&str], width: usize) -> Option<CClause> {
    let size = rng.random_range(1..=width.max(1));
    (0..size)
        .map(|_| {
            let atom = random_atom(rng, atoms)?;
            Some(CLiteral::new(atom, rng.random_bool(0.5)))
        })
        .collect()
}

/// A collection of `count` random clauses.
pub fn random_clause_set(
    rng: &mut impl Rng,
    atoms: &[&str],
    count: usize,
    width: usize,
) -> Option<Vec<CClause>> {
    (0..count).map(|_| random_clause(rng, atoms, width)).collect()
}

#[cfg(test)]
mod random_tests {
    use rand::SeedableRng;

    use crate::generic::minimal_pcg::MinimalPCG32;

    use super::*;

    #[test]
    fn depth_bound() {
        let mut rng = MinimalPCG32::seed_from_u64(1);
        for _ in 0..100 {
            let formula = random_formula(&mut rng, &["A", "B"]).unwrap();
            // Three levels of connectives, with a negation at each leaf.
            assert!(formula.size() <= 7 + 16);
        }
    }

    #[test]
    fn reproducible() {
        let atoms = ["A", "B", "C", "D", "E"];
        let a = random_clause_set(&mut MinimalPCG32::seed_from_u64(9), &atoms, 20, 3);
        let b = random_clause_set(&mut MinimalPCG32::seed_from_u64(9), &atoms, 20, 3);

        assert_eq!(a, b);
        assert!(a.is_some_and(|clauses| clauses.iter().all(|c| !c.is_empty() && c.len() <= 3)));
    }

    #[test]
    fn no_atoms() {
        let mut rng = MinimalPCG32::seed_from_u64(1);

        assert!(random_literal(&mut rng, &[]).is_none());
        assert!(random_clause(&mut rng, &[], 3).is_none());
    }
}
