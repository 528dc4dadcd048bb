/*!
An atom (aka. a 'variable', or 'proposition').

Atoms are names.
A name is a non-empty string of non-whitespace characters such that:
- The name is not one of the [reserved words](RESERVED) of the formula syntax.
- The name contains neither parenthesis.
- The name contains no [negation marker](crate::structures::literal::NEGATION), as the marker is used to write negated literals.

Examples: `p`, `S02`, `eligible`, `18-59`.

```rust
# use kb_entail::structures::atom::valid_atom;
assert!(valid_atom("S02"));
assert!(!valid_atom("implies"));
assert!(!valid_atom("¬p"));
assert!(!valid_atom("(p"));
```
*/

use crate::structures::literal::NEGATION;

/// An atom, as an owned name.
pub type Atom = String;

/// Words with a fixed meaning in the formula syntax, and so unavailable as names of atoms.
pub const RESERVED: [&str; 5] = ["not", "and", "or", "implies", "equiv"];

/// Whether the given string may be used as the name of an atom.
pub fn valid_atom(name: &str) -> bool {
    !name.is_empty()
        && !RESERVED.contains(&name)
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c == '(' || c == ')' || c == NEGATION)
}
