/*!
The knowledge base, an ordered collection of clauses.

Clauses are added in order, and are never removed or revised.
The order of clauses is the order in which a search tries clauses, and so the order fixes which derivation of a query is found first, though not whether a derivation exists.

Each clause is preprocessed when added:
- Repeated literals are collapsed.
- Tautologies are dropped, as a tautology does not constrain the knowledge base.
- The empty clause is rejected.

Formulas are added by their clauses, and a formula which fails to parse adds no clause.
*/

use crate::{
    builder::{
        parse::parse_formula,
        preprocess::{preprocess_clause, PreprocessingOk},
        ClauseOk, FormulaOk,
    },
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
        term::Term,
    },
    transform::clauses::flatten,
    types::err::{ClauseDBError, ErrorKind, ParseError},
};

/// An ordered collection of clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    clauses: Vec<CClause>,
}

impl KnowledgeBase {
    /// A knowledge base of the clauses of each formula, with the index and error of each formula which fails to parse.
    ///
    /// A formula which fails to parse is skipped, and the clauses of every other formula are kept, in order.
    pub fn from_formulas<S: AsRef<str>>(
        formulas: impl IntoIterator<Item = S>,
    ) -> (Self, Vec<(usize, ParseError)>) {
        let mut kb = KnowledgeBase::default();
        let mut errors = Vec::default();

        for (index, formula) in formulas.into_iter().enumerate() {
            match parse_formula(formula.as_ref()) {
                Ok(term) => {
                    kb.add_term(term);
                }
                Err(e) => {
                    log::warn!(target: targets::CLAUSE_DB, "Skipped formula {index}: {e}");
                    errors.push((index, e));
                }
            }
        }

        (kb, errors)
    }

    /// Adds a clause, unless the clause is a tautology.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        let mut clause = clause.canonical();

        match preprocess_clause(&mut clause) {
            Err(_) => Err(ClauseDBError::EmptyClause.into()),

            Ok(PreprocessingOk::Tautology) => {
                log::debug!(target: targets::CLAUSE_DB, "Tautology: {}", clause.as_string());
                Ok(ClauseOk::Tautology)
            }

            Ok(PreprocessingOk::Clause) => {
                log::trace!(target: targets::CLAUSE_DB, "Clause {}: {}", self.clauses.len(), clause.as_string());
                self.clauses.push(clause);
                Ok(ClauseOk::Added)
            }
        }
    }

    /// Adds a literal, as a unit clause.
    pub fn add_fact(&mut self, literal: CLiteral) -> Result<ClauseOk, ErrorKind> {
        self.add_clause(literal)
    }

    /// Adds each clause of a formula, given as text.
    ///
    /// If the formula fails to parse, the error is returned and no clause is added.
    pub fn add_formula(&mut self, formula: &str) -> Result<FormulaOk, ErrorKind> {
        let term = parse_formula(formula)?;
        Ok(self.add_term(term))
    }

    /// Adds each clause of a term.
    pub fn add_term(&mut self, term: Term) -> FormulaOk {
        let mut info = FormulaOk::default();

        for clause in flatten(&term) {
            let added = self.add_clause(clause);
            debug_assert!(added.is_ok(), "Every clause of a term has some literal");

            match added {
                Ok(ClauseOk::Added) => info.added += 1,
                Ok(ClauseOk::Tautology) => info.tautologies += 1,
                Err(e) => log::error!(target: targets::CLAUSE_DB, "Clause of {term} not added: {e}"),
            }
        }

        info
    }

    /// A copy of the knowledge base, with each literal added as a unit clause.
    pub fn with_facts(&self, facts: impl IntoIterator<Item = CLiteral>) -> Self {
        let mut kb = self.clone();
        for fact in facts {
            let added = kb.add_fact(fact);
            debug_assert!(added.is_ok(), "A fact is a unit clause");
        }
        kb
    }

    /// The clauses, in order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn get(&self, index: usize) -> Option<&CClause> {
        self.clauses.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The atoms of the clauses, sorted and without repetition.
    pub fn atoms(&self) -> Vec<&str> {
        let mut atoms = self.clauses.iter().flat_map(|c| c.atoms()).collect::<Vec<_>>();
        atoms.sort_unstable();
        atoms.dedup();
        atoms
    }

    /// The knowledge base as a conjunction of clauses, in the formula syntax.
    ///
    /// The empty knowledge base has no such representation, and is written as the empty string.
    pub fn as_formula(&self) -> String {
        self.clauses
            .iter()
            .map(|clause| format!("({})", clause.as_formula()))
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

impl std::fmt::Display for KnowledgeBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, clause) in self.clauses.iter().enumerate() {
            writeln!(f, "{index}: {}", clause.as_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod knowledge_base_tests {
    use crate::structures::literal::Literal;

    use super::*;

    #[test]
    fn bad_rule_is_isolated() {
        let (kb, errors) = KnowledgeBase::from_formulas([
            "(S02) implies L01",
            "(S03 implies L01",
            "(S01) implies L02",
        ]);

        assert_eq!(kb.len(), 2);
        assert_eq!(errors, vec![(1, ParseError::UnmatchedParenthesis { position: 0 })]);
        assert_eq!(kb.as_formula(), "(not S02 or L01) and (not S01 or L02)");
    }

    #[test]
    fn failed_formula_adds_nothing() {
        let mut kb = KnowledgeBase::default();
        assert!(kb.add_formula("p and q").is_ok());

        let before = kb.clone();
        assert!(kb.add_formula("p and (q or").is_err());
        assert_eq!(kb, before);
    }

    #[test]
    fn clauses() {
        let mut kb = KnowledgeBase::default();
        let p = CLiteral::new("p", true);

        assert_eq!(kb.add_clause(vec![p.clone(), p.negate()]), Ok(ClauseOk::Tautology));
        assert_eq!(kb.add_clause(CClause::new()), Err(ErrorKind::ClauseDB(ClauseDBError::EmptyClause)));
        assert_eq!(kb.add_clause(vec![p.clone(), p.clone()]), Ok(ClauseOk::Added));

        assert_eq!(kb.clauses(), &[vec![p]]);
    }

    #[test]
    fn formula_counts() {
        let mut kb = KnowledgeBase::default();

        assert_eq!(
            kb.add_formula("(p or not p) and q and (C or E or E)"),
            Ok(FormulaOk {
                added: 2,
                tautologies: 1
            })
        );
        assert_eq!(kb.atoms(), vec!["C", "E", "q"]);
    }

    #[test]
    fn term_counts() {
        let mut kb = KnowledgeBase::default();
        let term = parse_formula("(p or p) and (q or not q) and not (r or s)").unwrap();

        assert_eq!(
            kb.add_term(term),
            FormulaOk {
                added: 3,
                tautologies: 1
            }
        );
        assert_eq!(kb.as_formula(), "(p) and (not r) and (not s)");
    }

    #[test]
    fn facts() {
        let mut kb = KnowledgeBase::default();
        let _ = kb.add_formula("S02 implies L01");

        let with = kb.with_facts([CLiteral::new("S02", true)]);
        assert_eq!(with.len(), 2);
        assert_eq!(kb.len(), 1);
    }
}
