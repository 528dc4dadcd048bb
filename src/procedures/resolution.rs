/*!
Backward chaining, by resolution of goals against the clauses of a knowledge base.

# Overview

A clause such as `{¬a, ¬b, c}` is read as the rule 'a and b implies c'.
So, to prove the goal `c` it suffices to prove `a` and `b`.

In general, a list of goals is proved by taking the first goal *q* and, for each clause (in order) containing *q*, attempting to prove the negation of every other literal of the clause together with the remaining goals.
The first success proves the list of goals, and if no clause leads to success the list of goals is not proved.

```rust,ignore
prove(goals):
  if goals is empty: success
  q, rest = goals[0], goals[1..]
  for clause in kb containing q:
    if prove(negations of clause - {q} ++ rest): success
  failure
```

# Search

The search is made with an explicit stack of [frames](Frame), one for each list of goals on the current path, and so long chains of rules are bounded by the [depth limit](crate::config::Config::depth_limit) rather than by the call stack.

Lists of goals are compared by key, where the key of a list is the list sorted and without repetition.

- A list whose key is already on the current path is a cycle, and fails on that path.
- Each frame records the *low* depth, the shallowest frame on the path reached by a cycle from the search below the frame (or else the depth of the frame).
- A failed frame whose low depth is its own depth is cached by key.
  Every cycle cut below such a frame returns to the frame itself or to some frame opened after it, and so the failure does not depend on the path to the frame.
- A failed frame whose low depth is shallower passes the low depth to its parent, and is not cached, as the failure depends on the path.
- A success ends the search, and so successes need not be cached.

This is the lowlink rule of Tarjan's strongly connected components algorithm, applied to lists of goals.
Reuse of cached failures never changes the result of a search.

The cache and the keys of the current path belong to a single search.
*/

use std::{
    collections::{HashMap, HashSet},
    time::Instant,
};

use crate::{
    config::{Config, ContradictoryGoals},
    context::Counters,
    misc::log::targets::{self},
    procedures::proof::{Proof, ProofStep},
    reports::Report,
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// A list of goals, to be proved together.
pub type Goals = Vec<CLiteral>;

/// The literals, in order and with only the first occurrence of each.
pub fn deduplicate(literals: impl IntoIterator<Item = CLiteral>) -> Goals {
    let mut goals = Goals::default();
    for literal in literals {
        if !goals.contains(&literal) {
            goals.push(literal);
        }
    }
    goals
}

/// The goals left by resolving `goal` against `clause`, given the `rest` of the goals.
///
/// That is, the negation of each other literal in the clause, followed by the rest of the goals, without repetition.
pub fn resolve(clause: &CClause, goal: &CLiteral, rest: &[CLiteral]) -> Goals {
    let premises = clause
        .iter()
        .filter(|literal| *literal != goal)
        .map(|literal| literal.negate());

    deduplicate(premises.chain(rest.iter().cloned()))
}

/// The key of a list of goals.
pub fn key(goals: &[CLiteral]) -> Goals {
    let mut key = goals.to_vec();
    key.sort_unstable();
    key.dedup();
    key
}

/// A list of goals on the current path of a search.
struct Frame {
    goals: Goals,

    key: Goals,

    /// The index of the next clause to try.
    next_clause: usize,

    /// The clause most recently tried, and the resolvent.
    trying: Option<(usize, Goals)>,

    /// The depth of the shallowest frame reached by a cycle from the search below this frame, or the depth of this frame.
    low: usize,
}

/// The result of an attempt to open a list of goals.
enum Attempt {
    /// The goals are proved, without further search.
    Proven,

    /// The goals are not proved, without further search.
    ///
    /// If the goals are a cycle, the depth of the frame with the same key.
    Failed { cycle: Option<usize> },

    /// The goals are open, on top of the stack.
    Opened,

    /// Opening the goals would exceed the depth limit.
    Limit,
}

/// A search for a derivation of some goals from the clauses of a knowledge base.
pub struct Search<'kb, 'cfg> {
    kb: &'kb [CClause],

    config: &'cfg Config,

    stack: Vec<Frame>,

    /// Keys of the frames on the stack, each with the depth of the frame.
    path: HashMap<Goals, usize>,

    /// Keys of lists of goals known to fail.
    failures: HashSet<Goals>,

    started: Instant,
}

impl<'kb, 'cfg> Search<'kb, 'cfg> {
    pub fn new(kb: &'kb [CClause], config: &'cfg Config) -> Self {
        Search {
            kb,
            config,
            stack: Vec::default(),
            path: HashMap::default(),
            failures: HashSet::default(),
            started: Instant::now(),
        }
    }

    /// Searches for a derivation of the query, with a proof of the query if one is found and proofs are recorded.
    pub fn run(mut self, query: &[CLiteral], counters: &mut Counters) -> (Report, Option<Proof>) {
        *counters = Counters::default();
        self.started = Instant::now();

        let report = self.search(query, counters);
        counters.time = self.started.elapsed();

        log::info!(target: targets::RESOLUTION, "{report} after {counters}");

        let proof = match (report, self.config.record_proof.value) {
            (Report::Entailed, true) => Some(self.proof(query)),
            _ => None,
        };

        (report, proof)
    }

    fn search(&mut self, query: &[CLiteral], counters: &mut Counters) -> Report {
        match self.attempt(deduplicate(query.iter().cloned()), counters) {
            Attempt::Opened => {}
            Attempt::Proven => return Report::Entailed,
            Attempt::Failed { .. } => return Report::NotEntailed,
            Attempt::Limit => return Report::Unknown,
        }

        let step_limit = self.config.step_limit.value;
        let time_limit = self.config.time_limit.value;

        while let Some(frame) = self.stack.last_mut() {
            let Some((goal, rest)) = frame.goals.split_first() else {
                // Empty goals are proven when attempted, and so never opened.
                return Report::Entailed;
            };

            let found = self.kb[frame.next_clause..]
                .iter()
                .position(|clause| clause.contains(goal));

            let Some(offset) = found else {
                self.close();
                continue;
            };

            let index = frame.next_clause + offset;
            frame.next_clause = index + 1;

            let resolvent = resolve(&self.kb[index], goal, rest);
            log::trace!(target: targets::RESOLUTION, "{goal} with clause {index} leaves {resolvent:?}");
            frame.trying = Some((index, resolvent.clone()));

            counters.steps += 1;
            if step_limit > 0 && counters.steps > step_limit {
                log::info!(target: targets::RESOLUTION, "Step limit reached");
                return Report::Unknown;
            }

            if !time_limit.is_zero() && self.started.elapsed() > time_limit {
                log::info!(target: targets::RESOLUTION, "Time limit reached");
                return Report::Unknown;
            }

            match self.attempt(resolvent, counters) {
                Attempt::Opened => {}

                Attempt::Proven => return Report::Entailed,

                Attempt::Failed { cycle: Some(depth) } => {
                    if let Some(frame) = self.stack.last_mut() {
                        frame.low = std::cmp::min(frame.low, depth);
                    }
                }

                Attempt::Failed { cycle: None } => {}

                Attempt::Limit => {
                    log::info!(target: targets::RESOLUTION, "Depth limit reached");
                    return Report::Unknown;
                }
            }
        }

        Report::NotEntailed
    }

    /// Attempts to open a list of goals.
    fn attempt(&mut self, goals: Goals, counters: &mut Counters) -> Attempt {
        let goals = match self.config.contradictory_goals.value {
            ContradictoryGoals::Retain => goals,

            ContradictoryGoals::Reject => {
                if has_complement(&goals) {
                    log::trace!(target: targets::RESOLUTION, "Rejected contradictory goals {goals:?}");
                    return Attempt::Failed { cycle: None };
                }
                goals
            }

            ContradictoryGoals::Discharge => {
                let remaining = goals
                    .iter()
                    .filter(|goal| !goals.iter().any(|other| goal.is_complement(other)))
                    .cloned()
                    .collect::<Goals>();
                if remaining.len() < goals.len() {
                    log::trace!(target: targets::RESOLUTION, "Discharged contradictory goals {goals:?}");
                }
                remaining
            }
        };

        if goals.is_empty() {
            return Attempt::Proven;
        }

        let key = key(&goals);

        if self.config.cache.value && self.failures.contains(&key) {
            counters.cache_hits += 1;
            log::trace!(target: targets::CACHE, "Hit {key:?}");
            return Attempt::Failed { cycle: None };
        }

        if let Some(depth) = self.path.get(&key) {
            counters.cycles += 1;
            log::trace!(target: targets::RESOLUTION, "Cycle at {key:?} to depth {depth}");
            return Attempt::Failed { cycle: Some(*depth) };
        }

        let depth = self.stack.len();
        if depth >= self.config.depth_limit.value {
            return Attempt::Limit;
        }

        self.path.insert(key.clone(), depth);
        self.stack.push(Frame {
            goals,
            key,
            next_clause: 0,
            trying: None,
            low: depth,
        });
        counters.max_depth = std::cmp::max(counters.max_depth, self.stack.len());

        Attempt::Opened
    }

    /// Closes the frame on top of the stack as a failure.
    fn close(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        self.path.remove(&frame.key);
        let depth = self.stack.len();

        match frame.low < depth {
            true => {
                if let Some(parent) = self.stack.last_mut() {
                    parent.low = std::cmp::min(parent.low, frame.low);
                }
            }

            false => {
                if self.config.cache.value {
                    log::trace!(target: targets::CACHE, "Failure {:?}", frame.key);
                    self.failures.insert(frame.key);
                }
            }
        }
    }

    /// The proof of a successful search, read from the stack.
    fn proof(&self, query: &[CLiteral]) -> Proof {
        let steps = self
            .stack
            .iter()
            .filter_map(|frame| {
                frame.trying.as_ref().map(|(clause, resolvent)| ProofStep {
                    goals: frame.goals.clone(),
                    clause: *clause,
                    resolvent: resolvent.clone(),
                })
            })
            .collect();

        Proof {
            query: query.to_vec(),
            steps,
        }
    }
}

/// Whether some goal is the negation of some other goal.
fn has_complement(goals: &[CLiteral]) -> bool {
    goals
        .iter()
        .enumerate()
        .any(|(index, goal)| goals[index + 1..].iter().any(|other| goal.is_complement(other)))
}

#[cfg(test)]
mod resolution_tests {
    use super::*;

    fn lit(text: &str) -> CLiteral {
        text.parse().unwrap()
    }

    fn clause(text: &str) -> CClause {
        text.split_whitespace().map(lit).collect()
    }

    fn run(kb: &[CClause], query: &str, config: &Config) -> (Report, Counters) {
        let mut counters = Counters::default();
        let query = clause(query);
        let (report, _) = Search::new(kb, config).run(&query, &mut counters);
        (report, counters)
    }

    #[test]
    fn resolvent() {
        let c = clause("¬B ¬C A");

        assert_eq!(resolve(&c, &lit("A"), &clause("D B")), clause("B C D"));
        assert_eq!(key(&clause("¬B A ¬B B")), clause("A ¬B B"));
    }

    #[test]
    fn cycle_then_alternative() {
        let kb = vec![
            clause("¬Y X"),
            clause("¬X Y"),
            clause("¬Z Y"),
            clause("Z"),
        ];

        for cache in [false, true] {
            let mut config = Config::default();
            config.cache.value = cache;

            let (report, counters) = run(&kb, "X", &config);
            assert_eq!(report, Report::Entailed);
            assert!(counters.cycles > 0);
        }
    }

    #[test]
    fn cache_hit() {
        // Each route to G fails, and fails for the same reason.
        let kb = vec![clause("¬A G"), clause("¬B G"), clause("¬C A"), clause("¬C B")];

        let (report, counters) = run(&kb, "G", &Config::default());
        assert_eq!(report, Report::NotEntailed);
        assert_eq!(counters.cache_hits, 1);

        let mut config = Config::default();
        config.cache.value = false;
        let (report, counters) = run(&kb, "G", &config);
        assert_eq!(report, Report::NotEntailed);
        assert_eq!(counters.cache_hits, 0);
    }

    #[test]
    fn cycle_within_failure_is_cached() {
        // A and B only support each other, so A fails wherever it is reached.
        let kb = vec![
            clause("¬A Q"),
            clause("¬Z Q"),
            clause("¬B A"),
            clause("¬A B"),
            clause("¬A Z"),
        ];

        let (report, counters) = run(&kb, "Q", &Config::default());
        assert_eq!(report, Report::NotEntailed);
        assert_eq!(counters.cycles, 1);
        assert_eq!(counters.cache_hits, 1);

        let mut config = Config::default();
        config.cache.value = false;
        let (report, counters) = run(&kb, "Q", &config);
        assert_eq!(report, Report::NotEntailed);
        assert_eq!(counters.cycles, 2);
        assert_eq!(counters.cache_hits, 0);
    }

    #[test]
    fn cycle_to_query_then_alternative() {
        // By way of Y the query is reached again, while X also holds by way of Z.
        let kb = vec![
            clause("¬Y X"),
            clause("¬X Y"),
            clause("¬W G"),
            clause("¬Y W"),
            clause("¬Z X"),
            clause("Z"),
        ];

        for cache in [false, true] {
            let mut config = Config::default();
            config.cache.value = cache;
            assert_eq!(run(&kb, "X G", &config).0, Report::Entailed);
        }
    }

    #[test]
    fn limits() {
        let mut kb = (0..50)
            .map(|i| vec![CLiteral::new(format!("p{}", i + 1), false), CLiteral::new(format!("p{i}"), true)])
            .collect::<Vec<_>>();
        kb.push(vec![CLiteral::new("p50", true)]);

        assert_eq!(run(&kb, "p0", &Config::default()).0, Report::Entailed);

        let mut config = Config::default();
        config.depth_limit.value = 10;
        assert_eq!(run(&kb, "p0", &config).0, Report::Unknown);

        let mut config = Config::default();
        config.step_limit.value = 10;
        let (report, counters) = run(&kb, "p0", &config);
        assert_eq!(report, Report::Unknown);
        assert_eq!(counters.steps, 11);
    }

    #[test]
    fn contradictory_goals() {
        let kb = vec![clause("x ¬p")];

        let mut config = Config::default();
        assert_eq!(run(&kb, "x ¬p", &config).0, Report::NotEntailed);

        config.contradictory_goals.value = ContradictoryGoals::Reject;
        assert_eq!(run(&kb, "x ¬p", &config).0, Report::NotEntailed);
        assert_eq!(run(&kb, "p ¬p", &config).0, Report::NotEntailed);

        config.contradictory_goals.value = ContradictoryGoals::Discharge;
        assert_eq!(run(&kb, "x ¬p", &config).0, Report::Entailed);
        assert_eq!(run(&kb, "p ¬p", &config).0, Report::Entailed);
    }

    #[test]
    fn proof_of_discharge_fails_verification() {
        let kb = vec![clause("x ¬p")];
        let mut config = Config::default();
        config.contradictory_goals.value = ContradictoryGoals::Discharge;

        let query = clause("x ¬p");
        let (report, proof) = Search::new(&kb, &config).run(&query, &mut Counters::default());

        assert_eq!(report, Report::Entailed);
        assert!(proof.is_some_and(|proof| !proof.verify(&kb)));
    }

    #[test]
    fn empty_query() {
        let (report, counters) = run(&[], "", &Config::default());

        assert_eq!(report, Report::Entailed);
        assert_eq!(counters.steps, 0);
    }
}
