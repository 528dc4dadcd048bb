//! A library for deciding whether a propositional knowledge base entails a query.
//!
//! Knowledge bases are built from formulas, or from rules such as `S02 AND S04 THEN L02`.
//! Each formula is parsed, rewritten to conjunctive normal form, and read as clauses.
//! A query (a list of literals) is then decided by backward chaining, with resolution of each goal against the clauses of the knowledge base.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//! A context pairs a [knowledge base](db::KnowledgeBase) with a [configuration](config), and records the outcome of the most recent query.
//!
//! From text to an answer:
//! - The [parser](builder::parse) reads a formula to a [term](structures::term::Term).
//! - The [normaliser](transform::cnf) rewrites a term to conjunctive normal form, in three passes.
//! - The [clause reader](transform::clauses) reads clauses from a normal form, dropping tautologies.
//! - The [search](procedures::resolution) decides a query against the clauses.
//!
//! Each step is available on its own, and [formula_to_clauses](transform::clauses::formula_to_clauses), [solve](procedures::solve), and [solve_cached](procedures::solve_cached) offer the common compositions.
//!
//! # Examples
//!
//! + Decide queries against a few rules.
//!
//! ```rust
//! # use kb_entail::config::Config;
//! # use kb_entail::context::Context;
//! # use kb_entail::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let rules = "S02 THEN L01
//! S03 THEN L01
//! S02 AND S04 THEN L02";
//! assert!(the_context.read_rules(rules.as_bytes()).is_ok());
//!
//! let fact = the_context.literal_from_string("S03").unwrap();
//! assert!(the_context.add_fact(fact).is_ok());
//!
//! let query = the_context.query_from_string("L01").unwrap();
//! assert_eq!(the_context.entails(&query), Report::Entailed);
//!
//! let query = the_context.query_from_string("L02").unwrap();
//! assert_eq!(the_context.entails(&query), Report::NotEntailed);
//! ```
//!
//! + Normalise a formula.
//!
//! ```rust
//! # use kb_entail::builder::parse::parse_formula;
//! # use kb_entail::transform::{cnf::to_cnf, clauses::to_clauses};
//! # use kb_entail::structures::clause::Clause;
//! let formula = parse_formula("S02 or S03 and S04 implies L02").unwrap();
//! let clauses = to_clauses(to_cnf(formula));
//!
//! let clauses = clauses.iter().map(|c| c.as_string()).collect::<Vec<_>>();
//! assert_eq!(clauses, vec!["{¬S02, L02}", "{¬S03, ¬S04, L02}"]);
//! ```
//!
//! # Logs
//!
//! Calls to [log] are made throughout the library, with [targets](misc::log::targets) for each part of the library.
//! No logger is installed by the library.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod transform;
pub mod types;
