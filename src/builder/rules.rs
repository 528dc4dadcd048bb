/*!
Rules, written as lines of keywords and atoms, and their translation to formulas.

A rule is a line of the form:

```text
<conditions> THEN <conclusion>
```

Where the conditions are (possibly negated) atoms joined by `AND` or `OR`, and the conclusion is a (possibly negated) atom.
Negation is written `NOT`, before the atom negated.
Empty lines, and lines beginning with `#`, are skipped.

In a rule `OR` binds tighter than `AND`, so conditions are read as a conjunction of disjunctions, and translated with a parenthesised group for each conjunct.

```rust
# use kb_entail::builder::rules::rule_to_formula;
assert_eq!(rule_to_formula("S02 THEN L01").unwrap(), "(S02) implies L01");

assert_eq!(
    rule_to_formula("S02 AND NOT S04 THEN L02").unwrap(),
    "(S02 and not S04) implies L02"
);

assert_eq!(
    rule_to_formula("S01 OR S02 AND S10 THEN L03").unwrap(),
    "((S01 or S02) and (S10)) implies L03"
);
```
*/

use std::io::BufRead;

use crate::{
    misc::log::targets::{self},
    structures::atom::valid_atom,
    types::err::{ErrorKind, RuleError},
};

const AND: &str = "AND";
const OR: &str = "OR";
const NOT: &str = "NOT";
const THEN: &str = "THEN";

/// Formulas read from a source of rules, with details of any lines skipped.
#[derive(Debug, Default)]
pub struct RuleInfo {
    /// The formula of each rule, paired with the (one-indexed) line of the rule.
    pub formulas: Vec<(usize, String)>,

    /// Lines which could not be read as a rule, paired with the reason.
    pub skipped: Vec<(usize, RuleError)>,
}

/// Reads rules, one per line, to formulas.
///
/// A line which cannot be read as a rule is noted and skipped, and has no effect on other lines.
/// An error is returned only if the source of the rules cannot be read.
pub fn read_rules(reader: impl BufRead) -> Result<RuleInfo, ErrorKind> {
    let mut info = RuleInfo::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match rule_to_formula(trimmed) {
            Ok(formula) => {
                log::trace!(target: targets::RULES, "Line {line_number}: {formula}");
                info.formulas.push((line_number, formula));
            }

            Err(e) => {
                log::warn!(target: targets::RULES, "Skipped line {line_number}: {e}");
                info.skipped.push((line_number, e));
            }
        }
    }

    Ok(info)
}

/// Translates a rule to a formula.
pub fn rule_to_formula(rule: &str) -> Result<String, RuleError> {
    let tokens = rule.split_whitespace().collect::<Vec<_>>();

    let Some(then_index) = tokens.iter().position(|token| *token == THEN) else {
        return Err(RuleError::MissingThen);
    };

    let conditions = conditions(&tokens[..then_index])?;
    let conclusion = conclusion(&tokens[then_index + 1..])?;

    Ok(format!("({conditions}) implies {conclusion}"))
}

/// An atom of a rule, checked to be an atom of a formula.
fn atom<'a>(token: &'a str) -> Result<&'a str, RuleError> {
    match token {
        AND | OR | THEN => Err(RuleError::DanglingConnective(token.to_owned())),
        NOT => Err(RuleError::DanglingNot),
        _ if valid_atom(token) => Ok(token),
        _ => Err(RuleError::InvalidAtom(token.to_owned())),
    }
}

fn conclusion(tokens: &[&str]) -> Result<String, RuleError> {
    match tokens {
        [] => Err(RuleError::MissingConclusion),

        [NOT] => Err(RuleError::DanglingNot),

        [NOT, negated, rest @ ..] => match rest.first() {
            None => Ok(format!("not {}", atom(negated)?)),
            Some(extra) => Err(RuleError::TrailingConclusion(extra.to_string())),
        },

        [positive, rest @ ..] => match rest.first() {
            None => Ok(atom(positive)?.to_owned()),
            Some(extra) => Err(RuleError::TrailingConclusion(extra.to_string())),
        },
    }
}

/// The conditions of a rule, as a conjunction of disjunctive groups.
fn conditions(tokens: &[&str]) -> Result<String, RuleError> {
    if tokens.is_empty() {
        return Err(RuleError::MissingConditions);
    }

    let mut groups: Vec<Vec<String>> = vec![Vec::default()];
    let mut disjunction = false;
    let mut expect_operand = true;

    let mut tokens = tokens.iter();
    while let Some(token) = tokens.next() {
        match (expect_operand, *token) {
            (true, NOT) => match tokens.next() {
                Some(negated) => {
                    let negated = atom(negated).map_err(|_| RuleError::DanglingNot)?;
                    push_operand(&mut groups, format!("not {negated}"));
                }
                None => return Err(RuleError::DanglingNot),
            },

            (true, operand) => push_operand(&mut groups, atom(operand)?.to_owned()),

            (false, AND) => groups.push(Vec::default()),

            (false, OR) => disjunction = true,

            (false, other) => return Err(RuleError::MissingConnective(other.to_owned())),
        }
        expect_operand = !expect_operand;
    }

    if expect_operand {
        // The last token was a connective.
        let last = groups.last().and_then(|g| g.last());
        let connective = match last {
            Some(_) => OR,
            None => AND,
        };
        return Err(RuleError::DanglingConnective(connective.to_owned()));
    }

    let conditions = match disjunction {
        true => groups
            .iter()
            .map(|group| format!("({})", group.join(" or ")))
            .collect::<Vec<_>>()
            .join(" and "),

        false => groups
            .iter()
            .map(|group| group.join(" "))
            .collect::<Vec<_>>()
            .join(" and "),
    };

    Ok(conditions)
}

fn push_operand(groups: &mut [Vec<String>], operand: String) {
    if let Some(group) = groups.last_mut() {
        group.push(operand);
    }
}

#[cfg(test)]
mod rule_tests {
    use super::*;

    #[test]
    fn conversion() {
        assert_eq!(
            rule_to_formula("S02 AND S04 THEN L02"),
            Ok("(S02 and S04) implies L02".to_owned())
        );

        assert_eq!(
            rule_to_formula("NOT S01 THEN NOT L04"),
            Ok("(not S01) implies not L04".to_owned())
        );

        assert_eq!(
            rule_to_formula("A OR B AND C OR NOT D THEN E"),
            Ok("((A or B) and (C or not D)) implies E".to_owned())
        );
    }

    #[test]
    fn malformed() {
        assert_eq!(rule_to_formula("S02 L01"), Err(RuleError::MissingThen));
        assert_eq!(rule_to_formula("S02 THEN"), Err(RuleError::MissingConclusion));
        assert_eq!(rule_to_formula("THEN L01"), Err(RuleError::MissingConditions));
        assert_eq!(
            rule_to_formula("S02 THEN L01 L02"),
            Err(RuleError::TrailingConclusion("L02".to_owned()))
        );
        assert_eq!(rule_to_formula("S02 AND NOT THEN L01"), Err(RuleError::DanglingNot));
        assert_eq!(rule_to_formula("S02 THEN NOT"), Err(RuleError::DanglingNot));
        assert_eq!(
            rule_to_formula("S02 AND THEN L01"),
            Err(RuleError::DanglingConnective("AND".to_owned()))
        );
        assert_eq!(
            rule_to_formula("S02 OR THEN L01"),
            Err(RuleError::DanglingConnective("OR".to_owned()))
        );
        assert_eq!(
            rule_to_formula("S02 AND OR S03 THEN L01"),
            Err(RuleError::DanglingConnective("OR".to_owned()))
        );
        assert_eq!(
            rule_to_formula("S02 S03 THEN L01"),
            Err(RuleError::MissingConnective("S03".to_owned()))
        );
        assert_eq!(
            rule_to_formula("S02 THEN (L01"),
            Err(RuleError::InvalidAtom("(L01".to_owned()))
        );
    }

    #[test]
    fn reading() {
        let source = "
# eligibility
S02 THEN L01
S02 AND

NOT S01 THEN L02
";
        let info = read_rules(source.as_bytes()).unwrap();

        assert_eq!(
            info.formulas,
            vec![
                (3, "(S02) implies L01".to_owned()),
                (6, "(not S01) implies L02".to_owned())
            ]
        );
        assert_eq!(info.skipped, vec![(4, RuleError::MissingThen)]);
    }
}
