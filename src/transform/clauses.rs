//! Reading clauses from a term in conjunctive normal form.
//!
//! Each conjunct of a term is read as a clause, with the literals of the clause read from the disjuncts of the conjunct.
//! Repeated literals are collapsed, so `(C or E or E)` is read as the clause `{C, E}`.
//!
//! [flatten] keeps tautological clauses, while [to_clauses] drops them.
//! A tautology is satisfied on every assignment and so does not constrain a knowledge base.
//!
//! ```rust
//! # use kb_entail::transform::clauses::formula_to_clauses;
//! # use kb_entail::structures::clause::Clause;
//! let clauses = formula_to_clauses("(p or not p or q) and (C or E or E)").unwrap();
//!
//! assert_eq!(clauses.len(), 1);
//! assert_eq!(clauses[0].as_string(), "{C, E}");
//! ```

use crate::{
    builder::{
        parse::parse_formula,
        preprocess::preprocess_clause,
    },
    misc::log::targets::{self},
    structures::{clause::CClause, clause::Clause, term::Term},
    transform::cnf::to_cnf,
    types::err::ParseError,
};

/// The clauses of a term in conjunctive normal form, in order and without repeated literals.
///
/// A term not in conjunctive normal form is first [normalised](to_cnf).
pub fn flatten(term: &Term) -> Vec<CClause> {
    if !term.is_cnf() {
        return flatten(&to_cnf(term.clone()));
    }

    let mut clauses = Vec::default();
    collect_clauses(term, &mut clauses);
    clauses
}

fn collect_clauses(term: &Term, clauses: &mut Vec<CClause>) {
    match term {
        Term::And(left, right) => {
            collect_clauses(left, clauses);
            collect_clauses(right, clauses);
        }

        disjunction => {
            let mut clause = CClause::default();
            collect_literals(disjunction, &mut clause);
            let preprocessed = preprocess_clause(&mut clause);
            debug_assert!(preprocessed.is_ok(), "A conjunct has at least one literal");
            clauses.push(clause);
        }
    }
}

fn collect_literals(term: &Term, clause: &mut CClause) {
    match term {
        Term::Or(left, right) => {
            collect_literals(left, clause);
            collect_literals(right, clause);
        }

        literal => clause.extend(literal.as_literal()),
    }
}

/// The clauses of a term, without tautologies.
pub fn to_clauses(term: Term) -> Vec<CClause> {
    let cnf = match term.is_cnf() {
        true => term,
        false => to_cnf(term),
    };

    let mut clauses = flatten(&cnf);
    clauses.retain(|clause| match clause.is_tautology() {
        true => {
            log::debug!(target: targets::CNF, "Dropped tautology: {}", clause.as_string());
            false
        }
        false => true,
    });

    clauses
}

/// The clauses of a formula, given as text.
pub fn formula_to_clauses(text: &str) -> Result<Vec<CClause>, ParseError> {
    let term = parse_formula(text)?;
    Ok(to_clauses(term))
}
