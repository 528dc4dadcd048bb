/*!
Tools for building a knowledge base.

# Basic methods

A knowledge base may be built with three methods:
- [add_clause](crate::db::KnowledgeBase::add_clause), to add a clause.
- [add_formula](crate::db::KnowledgeBase::add_formula), to add each clause of a formula, given as text.
- [add_fact](crate::db::KnowledgeBase::add_fact), to add a literal as a unit clause.

Each method is also available on a [context](crate::context::Context).

Formulas are read by the [parser](parse), and rules (written with keywords such as `THEN`) are translated to formulas by the [rule reader](rules).

# Examples

```rust
# use kb_entail::context::Context;
# use kb_entail::config::Config;
# use kb_entail::reports::Report;
# use kb_entail::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_formula("(S02 and S04) implies L02").is_ok());
assert!(the_context.add_fact(CLiteral::new("S02", true)).is_ok());
assert!(the_context.add_fact(CLiteral::new("S04", true)).is_ok());

assert_eq!(the_context.entails(&[CLiteral::new("L02", true)]), Report::Entailed);
```

A bad formula is rejected with no change to the knowledge base.

```rust
# use kb_entail::context::Context;
# use kb_entail::config::Config;
# use kb_entail::types::err::{ErrorKind, ParseError};
let mut the_context = Context::from_config(Config::default());

assert!(the_context.add_formula("p implies q").is_ok());
assert_eq!(
    the_context.add_formula("(p and q"),
    Err(ErrorKind::Parse(ParseError::UnmatchedParenthesis { position: 0 }))
);
assert_eq!(the_context.kb.len(), 1);
```
*/

pub mod parse;
pub mod preprocess;
pub mod rules;

/// Ok results when adding a clause to a knowledge base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the knowledge base.
    Added,

    /// The clause was a tautology (and so was not added to the knowledge base).
    Tautology,
}

/// Ok result when adding a formula to a knowledge base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormulaOk {
    /// A count of clauses added.
    pub added: usize,

    /// A count of clauses of the formula dropped as tautologies.
    pub tautologies: usize,
}
