/*!
Transformations of formulas.

- [cnf] rewrites a term to an equivalent term in conjunctive normal form, by three passes.
- [clauses] reads the clauses of a term in conjunctive normal form.

The composition of parsing, normalisation, and reading is [formula_to_clauses](clauses::formula_to_clauses).
*/

pub mod clauses;
pub mod cnf;
