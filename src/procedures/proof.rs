/*!
Derivations found by a search.

A proof is the sequence of resolution steps along the successful path of a search.
Each step records the goals open at the step, the clause (by index in the knowledge base) used to resolve the first goal, and the goals left by the resolution.

A proof may be [verified](Proof::verify) against a knowledge base by replaying each step.

```rust
# use kb_entail::db::KnowledgeBase;
# use kb_entail::procedures::solve_with;
# use kb_entail::config::Config;
# use kb_entail::context::Counters;
# use kb_entail::structures::literal::{CLiteral, Literal};
let mut kb = KnowledgeBase::default();
kb.add_formula("(B and C) implies A").unwrap();
kb.add_formula("D implies B").unwrap();
kb.add_formula("C and D").unwrap();

let query = [CLiteral::new("A", true)];
let (_, proof) = solve_with(kb.clauses(), &query, &Config::default(), &mut Counters::default());
let proof = proof.unwrap();

assert!(proof.verify(kb.clauses()));
assert_eq!(proof.assignment().to_string(), "A B C D");
```
*/

use crate::{
    procedures::resolution::{deduplicate, resolve},
    structures::{clause::CClause, literal::CLiteral, valuation::Assignment},
};

/// One resolution step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofStep {
    /// The goals open before the step, where the first goal is resolved.
    pub goals: Vec<CLiteral>,

    /// The index of the clause used to resolve the first goal.
    pub clause: usize,

    /// The goals open after the step.
    pub resolvent: Vec<CLiteral>,
}

/// A derivation of a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    /// The query derived.
    pub query: Vec<CLiteral>,

    /// The steps of the derivation, in order.
    pub steps: Vec<ProofStep>,
}

impl Proof {
    /// Whether the proof is a derivation of the query from the clauses.
    ///
    /// A proof which relies on discharging complementary goals is not a derivation, and fails verification.
    pub fn verify(&self, kb: &[CClause]) -> bool {
        let mut open = deduplicate(self.query.iter().cloned());

        for step in &self.steps {
            if step.goals != open {
                return false;
            }

            let Some((goal, rest)) = step.goals.split_first() else {
                return false;
            };

            let Some(clause) = kb.get(step.clause) else {
                return false;
            };

            if !clause.contains(goal) || resolve(clause, goal, rest) != step.resolvent {
                return false;
            }

            open = step.resolvent.clone();
        }

        open.is_empty()
    }

    /// The literals resolved along the derivation, each of which is established by the derivation.
    pub fn assignment(&self) -> Assignment {
        self.steps
            .iter()
            .filter_map(|step| step.goals.first().cloned())
            .collect()
    }
}

fn goal_string(goals: &[CLiteral]) -> String {
    match goals.is_empty() {
        true => "□".to_owned(),
        false => goals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

impl std::fmt::Display for Proof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, step) in self.steps.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} | clause {} | {}",
                goal_string(&step.goals),
                step.clause,
                goal_string(&step.resolvent)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod proof_tests {
    use crate::structures::literal::Literal;

    use super::*;

    fn lit(text: &str) -> CLiteral {
        text.parse().unwrap()
    }

    fn kb() -> Vec<CClause> {
        vec![vec![lit("¬D"), lit("B")], vec![lit("D")]]
    }

    fn proof() -> Proof {
        Proof {
            query: vec![lit("B"), lit("B")],
            steps: vec![
                ProofStep {
                    goals: vec![lit("B")],
                    clause: 0,
                    resolvent: vec![lit("D")],
                },
                ProofStep {
                    goals: vec![lit("D")],
                    clause: 1,
                    resolvent: vec![],
                },
            ],
        }
    }

    #[test]
    fn replay() {
        let proof = proof();

        assert!(proof.verify(&kb()));
        assert_eq!(proof.to_string(), "B | clause 0 | D\nD | clause 1 | □");
        assert_eq!(proof.assignment().value_of("D"), Some(true));
    }

    #[test]
    fn broken() {
        let mut wrong_clause = proof();
        wrong_clause.steps[1].clause = 0;
        assert!(!wrong_clause.verify(&kb()));

        let mut unfinished = proof();
        unfinished.steps.pop();
        assert!(!unfinished.verify(&kb()));

        let mut unchained = proof();
        unchained.steps[1].goals = vec![CLiteral::new("D", false)];
        assert!(!unchained.verify(&kb()));

        let mut missing = proof();
        missing.steps[0].clause = 7;
        assert!(!missing.verify(&kb()));
    }
}
