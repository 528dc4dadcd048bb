/*!
Procedures to decide whether a knowledge base entails a query.

- [solve] searches without a cache.
- [solve_cached] searches with a cache of failed lists of goals.
- [solve_with] searches as configured, with counts and a proof.

Each call makes a fresh search, with a fresh cache, so calls are independent of one another.
In particular, calls on different threads may share a knowledge base without any further coordination.

```rust
# use kb_entail::procedures::{solve, solve_cached};
# use kb_entail::structures::{clause::CClause, literal::CLiteral};
let kb = ["¬B ¬C A", "¬D B", "C", "D"]
    .iter()
    .map(|clause| clause.split_whitespace().map(|l| l.parse().unwrap()).collect())
    .collect::<Vec<CClause>>();

let a = "A".parse::<CLiteral>().unwrap();
let e = "E".parse::<CLiteral>().unwrap();

assert!(solve(&kb, &[a.clone()]));
assert!(solve_cached(&kb, &[a]));
assert!(!solve(&kb, &[e]));
```
*/

pub mod proof;
pub mod resolution;

use crate::{
    config::Config,
    context::Counters,
    procedures::{proof::Proof, resolution::Search},
    reports::Report,
    structures::{clause::CClause, literal::CLiteral},
};

/// Whether the query is entailed by the clauses, by a search without a cache.
///
/// A search which reaches the depth limit of the default configuration returns false.
pub fn solve(kb: &[CClause], query: &[CLiteral]) -> bool {
    let mut config = Config::default();
    config.cache.value = false;
    config.record_proof.value = false;

    let (report, _) = Search::new(kb, &config).run(query, &mut Counters::default());
    report.entailed()
}

/// Whether the query is entailed by the clauses, by a search with a cache.
///
/// Always the same as [solve], and often quicker.
pub fn solve_cached(kb: &[CClause], query: &[CLiteral]) -> bool {
    let mut config = Config::default();
    config.record_proof.value = false;

    let (report, _) = Search::new(kb, &config).run(query, &mut Counters::default());
    report.entailed()
}

/// A report on whether the query is entailed by the clauses, by a search as configured.
///
/// The counters are reset and then updated during the search.
/// A proof is returned when the query is entailed and the configuration asks for proofs.
pub fn solve_with(
    kb: &[CClause],
    query: &[CLiteral],
    config: &Config,
    counters: &mut Counters,
) -> (Report, Option<Proof>) {
    Search::new(kb, config).run(query, counters)
}
