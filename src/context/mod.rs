/*!
The context, to which formulas are added and within which queries are made.

A context pairs a [knowledge base](crate::db::KnowledgeBase) with a [configuration](crate::config::Config), and keeps the [counters](Counters), [report](crate::reports::Report), and [proof](crate::procedures::proof::Proof) of the most recent query.

# Example
```rust
# use kb_entail::context::Context;
# use kb_entail::config::Config;
# use kb_entail::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_formula("(B and C) implies A").is_ok());
assert!(the_context.add_formula("D implies B").is_ok());
assert!(the_context.add_formula("C and D").is_ok());

let query = the_context.query_from_string("A").unwrap();
assert_eq!(the_context.entails(&query), Report::Entailed);
assert_eq!(the_context.report(), Report::Entailed);
assert!(the_context.proof().is_some());

let query = the_context.query_from_string("¬A").unwrap();
assert_eq!(the_context.entails(&query), Report::NotEntailed);
```
*/

mod counters;
pub use counters::Counters;

use std::io::BufRead;

use crate::{
    builder::{rules::read_rules, ClauseOk, FormulaOk},
    config::Config,
    db::KnowledgeBase,
    misc::log::targets::{self},
    procedures::{proof::Proof, solve_with},
    reports::Report,
    structures::{clause::Clause, literal::CLiteral},
    types::err::{ErrorKind, ParseError},
};

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input, and no query has been made since the last input.
    Input,

    /// A query is being made.
    Searching,

    /// A query has been made, with the given report.
    Finished(Report),
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Searching => write!(f, "Searching"),
            Self::Finished(report) => write!(f, "Finished ({report})"),
        }
    }
}

/// Details of rules read into a context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulesOk {
    /// A count of rules read and added.
    pub rules: usize,

    /// A count of clauses added, across all rules.
    pub clauses: usize,

    /// Lines skipped, each paired with a description of the reason.
    pub skipped: Vec<(usize, String)>,
}

/// A context, to which formulas are added and within which queries are made.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The knowledge base of the context.
    pub kb: KnowledgeBase,

    /// Counts from the most recent query.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    proof: Option<Proof>,
}

impl Context {
    /// A context with an empty knowledge base.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            kb: KnowledgeBase::default(),
            counters: Counters::default(),
            state: ContextState::Input,
            proof: None,
        }
    }

    /// A context with the given knowledge base.
    pub fn from_kb(config: Config, kb: KnowledgeBase) -> Self {
        let mut context = Context::from_config(config);
        context.kb = kb;
        context
    }

    /// Adds a clause to the knowledge base, unless the clause is a tautology.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        self.state = ContextState::Input;
        self.kb.add_clause(clause)
    }

    /// Adds a literal to the knowledge base, as a unit clause.
    pub fn add_fact(&mut self, literal: CLiteral) -> Result<ClauseOk, ErrorKind> {
        self.state = ContextState::Input;
        self.kb.add_fact(literal)
    }

    /// Adds each clause of a formula to the knowledge base, or no clause if the formula fails to parse.
    pub fn add_formula(&mut self, formula: &str) -> Result<FormulaOk, ErrorKind> {
        self.state = ContextState::Input;
        self.kb.add_formula(formula)
    }

    /// Reads rules, one per line, and adds the clauses of each rule to the knowledge base.
    ///
    /// Lines which are not rules are skipped, and noted in the returned details.
    pub fn read_rules(&mut self, reader: impl BufRead) -> Result<RulesOk, ErrorKind> {
        self.state = ContextState::Input;
        let info = read_rules(reader)?;

        let mut details = RulesOk::default();
        for (line, e) in info.skipped {
            details.skipped.push((line, e.to_string()));
        }

        for (line, formula) in info.formulas {
            match self.kb.add_formula(&formula) {
                Ok(formula_ok) => {
                    details.rules += 1;
                    details.clauses += formula_ok.added;
                }
                Err(e) => {
                    log::warn!(target: targets::RULES, "Skipped line {line}: {e}");
                    details.skipped.push((line, e.to_string()));
                }
            }
        }

        details.skipped.sort_unstable();
        Ok(details)
    }

    /// A literal, read from text such as `S02` or `¬S02`.
    pub fn literal_from_string(&self, literal: &str) -> Result<CLiteral, ErrorKind> {
        Ok(literal.trim().parse::<CLiteral>()?)
    }

    /// A query, read from whitespace separated literals.
    pub fn query_from_string(&self, query: &str) -> Result<Vec<CLiteral>, ErrorKind> {
        let literals = query
            .split_whitespace()
            .map(|literal| literal.parse::<CLiteral>())
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(literals)
    }

    /// Whether the knowledge base entails each literal of the query, as configured.
    pub fn entails(&mut self, query: &[CLiteral]) -> Report {
        self.state = ContextState::Searching;
        self.proof = None;

        let (report, proof) = solve_with(self.kb.clauses(), query, &self.config, &mut self.counters);

        self.proof = proof;
        self.state = ContextState::Finished(report);
        report
    }

    /// The report of the most recent query, or unknown if there is no such query.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The proof found by the most recent query, if any.
    pub fn proof(&self) -> Option<&Proof> {
        self.proof.as_ref()
    }
}

#[cfg(test)]
mod context_tests {
    use crate::structures::literal::Literal;

    use super::*;

    #[test]
    fn state() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.report(), Report::Unknown);

        let _ = the_context.add_formula("p");
        let query = the_context.query_from_string("p").unwrap();
        assert_eq!(the_context.entails(&query), Report::Entailed);
        assert_eq!(the_context.state, ContextState::Finished(Report::Entailed));

        let _ = the_context.add_formula("q");
        assert_eq!(the_context.state, ContextState::Input);
        assert_eq!(the_context.report(), Report::Unknown);
    }

    #[test]
    fn queries() {
        let the_context = Context::from_config(Config::default());

        assert_eq!(the_context.query_from_string(" A  ¬B ").map(|q| q.len()), Ok(2));
        assert_eq!(
            the_context.query_from_string("A not"),
            Err(ErrorKind::Parse(ParseError::InvalidLiteral("not".to_owned())))
        );
        assert!(the_context.literal_from_string("¬¬A").is_err());
    }

    #[test]
    fn rules() {
        let mut the_context = Context::from_config(Config::default());
        let rules = "S02 THEN L01\nS01 L01\nS02 AND S04 THEN L02\n";

        let details = the_context.read_rules(rules.as_bytes()).unwrap();
        assert_eq!(details.rules, 2);
        assert_eq!(details.clauses, 2);
        assert_eq!(details.skipped.len(), 1);
        assert_eq!(details.skipped[0].0, 2);

        let _ = the_context.add_fact(CLiteral::new("S02", true));
        let query = the_context.query_from_string("L01").unwrap();
        assert_eq!(the_context.entails(&query), Report::Entailed);
        assert!(the_context.counters.steps > 0);
    }
}
