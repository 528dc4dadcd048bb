//! Abstract structures and their representations.
//!
//! - [Atoms](atom) are names of propositions.
//! - [Literals](literal) are atoms paired with a polarity.
//! - [Clauses](clause) are collections of literals, interpreted as their disjunction.
//! - [Terms](term) are formulas, built from atoms by the connectives.
//! - [Assignments](valuation) map atoms to truth values.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod term;
pub mod valuation;
