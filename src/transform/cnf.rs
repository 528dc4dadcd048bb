/*!
Conjunctive normal form, by three passes over a term.

1. [eliminate_implications] rewrites `implies` and `equiv` with `not`, `and`, and `or`.
2. [push_negations] moves each negation to an atom, by De Morgan's laws and double negation.
3. [distribute] distributes `or` over `and`, until no disjunction has a conjunction as an immediate subterm.

Each pass consumes a term and returns a fresh term, and [to_cnf] is the composition of the passes, in order.

```rust
# use kb_entail::transform::cnf::to_cnf;
# use kb_entail::builder::parse::parse_formula;
let formula = parse_formula("p equiv q").unwrap();

assert_eq!(
    to_cnf(formula).to_string(),
    "((not p or q) and (not q or p))"
);
```

The normal form is not minimal, as e.g. repeated literals and tautological disjunctions remain.
Those are handled when [reading clauses](crate::transform::clauses).

Distribution may grow a term exponentially, e.g. `(a and b) or (c and d) or ...`.
For the rules of a knowledge base this is not an issue, as conditions are short.
*/

use crate::{misc::log::targets::{self}, structures::term::Term};

/// Rewrites implications and equivalences:
/// - `p implies q` to `not p or q`
/// - `p equiv q` to `(not p or q) and (not q or p)`
pub fn eliminate_implications(term: Term) -> Term {
    match term {
        Term::Var(_) => term,

        Term::Not(operand) => Term::not(eliminate_implications(*operand)),

        Term::And(left, right) => {
            Term::and(eliminate_implications(*left), eliminate_implications(*right))
        }

        Term::Or(left, right) => {
            Term::or(eliminate_implications(*left), eliminate_implications(*right))
        }

        Term::Implies(antecedent, consequent) => Term::or(
            Term::not(eliminate_implications(*antecedent)),
            eliminate_implications(*consequent),
        ),

        Term::Equiv(left, right) => {
            let left = eliminate_implications(*left);
            let right = eliminate_implications(*right);
            Term::and(
                Term::or(Term::not(left.clone()), right.clone()),
                Term::or(Term::not(right), left),
            )
        }
    }
}

/// Moves negations inward, until each negation is of an atom:
/// - `not not p` to `p`
/// - `not (p and q)` to `not p or not q`
/// - `not (p or q)` to `not p and not q`
///
/// Implications and equivalences are expected to have been eliminated.
/// Still, any which remain are kept, with a negation of either pushed through as `p and not q` or `p equiv not q`, so the result is equivalent to the given term.
pub fn push_negations(term: Term) -> Term {
    match term {
        Term::Var(_) => term,

        Term::Not(operand) => match *operand {
            Term::Var(atom) => Term::not(Term::Var(atom)),

            Term::Not(inner) => push_negations(*inner),

            Term::And(left, right) => Term::or(
                push_negations(Term::Not(left)),
                push_negations(Term::Not(right)),
            ),

            Term::Or(left, right) => Term::and(
                push_negations(Term::Not(left)),
                push_negations(Term::Not(right)),
            ),

            Term::Implies(antecedent, consequent) => Term::and(
                push_negations(*antecedent),
                push_negations(Term::Not(consequent)),
            ),

            Term::Equiv(left, right) => {
                Term::equiv(push_negations(*left), push_negations(Term::Not(right)))
            }
        },

        Term::And(left, right) => Term::and(push_negations(*left), push_negations(*right)),

        Term::Or(left, right) => Term::or(push_negations(*left), push_negations(*right)),

        Term::Implies(antecedent, consequent) => {
            Term::implies(push_negations(*antecedent), push_negations(*consequent))
        }

        Term::Equiv(left, right) => Term::equiv(push_negations(*left), push_negations(*right)),
    }
}

/// Distributes disjunction over conjunction:
/// - `(p and q) or r` to `(p or r) and (q or r)`
/// - `p or (q and r)` to `(p or q) and (p or r)`
///
/// Negations are expected to be of atoms, and so are left as they are.
pub fn distribute(term: Term) -> Term {
    match term {
        Term::And(left, right) => Term::and(distribute(*left), distribute(*right)),

        Term::Or(left, right) => distribute_pair(distribute(*left), distribute(*right)),

        _ => term,
    }
}

/// The disjunction of two terms, each already distributed, distributed.
fn distribute_pair(left: Term, right: Term) -> Term {
    match (left, right) {
        (Term::And(a, b), right) => Term::and(
            distribute_pair(*a, right.clone()),
            distribute_pair(*b, right),
        ),

        (left, Term::And(a, b)) => Term::and(
            distribute_pair(left.clone(), *a),
            distribute_pair(left, *b),
        ),

        (left, right) => Term::or(left, right),
    }
}

/// The conjunctive normal form of a term.
pub fn to_cnf(term: Term) -> Term {
    let eliminated = eliminate_implications(term);
    let pushed = push_negations(eliminated);
    let cnf = distribute(pushed);

    log::trace!(target: targets::CNF, "CNF: {cnf}");
    cnf
}
