use crate::{
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, PreprocessingError},
};

/// Primarily to distinguish the case where preprocessing finds a tautology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreprocessingOk {
    /// A tautology.
    Tautology,

    /// Any clause.
    Clause,
}

/// Preprocess a clause to remove duplicate literals, keeping the first occurrence of each literal.
///
/// Duplicates are removed from a tautology as from any other clause, and whether the clause is a tautology is returned.
pub fn preprocess_clause(clause: &mut CClause) -> Result<PreprocessingOk, err::PreprocessingError> {
    let mut tautology = false;
    let mut kept: CClause = Vec::with_capacity(clause.len());

    for literal in clause.drain(..) {
        if kept.contains(&literal) {
            continue;
        }
        if kept.iter().any(|other: &CLiteral| other.is_complement(&literal)) {
            tautology = true;
        }
        kept.push(literal);
    }

    *clause = kept;

    match (clause.is_empty(), tautology) {
        (true, _) => Err(PreprocessingError::Unsatisfiable),
        (false, true) => Ok(PreprocessingOk::Tautology),
        (false, false) => Ok(PreprocessingOk::Clause),
    }
}
