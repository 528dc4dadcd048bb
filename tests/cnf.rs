use kb_entail::{
    builder::parse::parse_formula,
    generic::{minimal_pcg::MinimalPCG32, random::random_formula},
    structures::{
        clause::{CClause, Clause},
        term::Term,
        valuation::Assignment,
    },
    transform::{
        clauses::{flatten, formula_to_clauses, to_clauses},
        cnf::to_cnf,
    },
};
use rand::SeedableRng;

const ATOMS: [&str; 5] = ["A", "B", "C", "D", "E"];

fn clause_strings(clauses: &[CClause]) -> Vec<String> {
    clauses.iter().map(|clause| clause.as_string()).collect()
}

fn formulas(seed: u64, count: usize) -> Vec<Term> {
    let mut rng = MinimalPCG32::seed_from_u64(seed);
    (0..count)
        .map(|_| random_formula(&mut rng, &ATOMS).unwrap())
        .collect()
}

mod normal_form {

    use super::*;

    #[test]
    fn known_forms() {
        let expected: [(&str, &[&str]); 10] = [
            ("p implies q", &["{¬p, q}"]),
            ("p equiv q", &["{¬p, q}", "{¬q, p}"]),
            ("not (p and q)", &["{¬p, ¬q}"]),
            ("not p or q", &["{¬p, q}"]),
            ("p or (q and r)", &["{p, q}", "{p, r}"]),
            ("(p implies q) and (q implies r)", &["{¬p, q}", "{¬q, r}"]),
            ("not p or not q", &["{¬p, ¬q}"]),
            ("(p or q) and (not q or r)", &["{p, q}", "{¬q, r}"]),
            ("not p or p", &[]),
            (
                "S02 or S03 and S04 implies L02",
                &["{¬S02, L02}", "{¬S03, ¬S04, L02}"],
            ),
        ];

        for (formula, clauses) in expected {
            let found = formula_to_clauses(formula).unwrap();
            assert_eq!(clause_strings(&found), *clauses, "{formula}");
        }
    }

    #[test]
    fn equivalence() {
        for seed in 0..20 {
            for formula in formulas(seed, 50) {
                let cnf = to_cnf(formula.clone());
                assert!(cnf.is_cnf(), "{formula}");

                let clauses = to_clauses(cnf.clone());

                for assignment in Assignment::every(&ATOMS) {
                    let value = formula.evaluate(&assignment);
                    assert_eq!(value, cnf.evaluate(&assignment), "{formula} / {cnf}");
                    assert_eq!(value, assignment.satisfies(&clauses), "{formula}");
                }
            }
        }
    }

    #[test]
    fn clauses_are_clean() {
        for formula in formulas(7, 200) {
            for clause in to_clauses(to_cnf(formula)) {
                assert!(!clause.is_empty());
                assert!(!clause.is_tautology());

                let mut canonical = clause.clone();
                canonical.sort_unstable();
                canonical.dedup();
                assert_eq!(canonical.len(), clause.len());
            }
        }
    }

    #[test]
    fn flatten_is_stable() {
        for formula in formulas(11, 100) {
            let clauses = flatten(&to_cnf(formula));

            let rendered = clauses
                .iter()
                .map(|clause| format!("({})", clause.as_formula()))
                .collect::<Vec<_>>()
                .join(" and ");

            let reparsed = parse_formula(&rendered).unwrap();
            assert!(reparsed.is_cnf());
            assert_eq!(
                clause_strings(&flatten(&reparsed)),
                clause_strings(&clauses),
                "{rendered}"
            );
        }
    }
}

mod parse {

    use super::*;

    #[test]
    fn display_round_trip() {
        for formula in formulas(3, 200) {
            let text = formula.to_string();
            assert_eq!(parse_formula(&text), Ok(formula), "{text}");
        }
    }

    #[test]
    fn precedence() {
        let loose = parse_formula("A or B and C implies D equiv E").unwrap();
        let tight = parse_formula("(((A or (B and C)) implies D) equiv E)").unwrap();
        assert_eq!(loose, tight);

        let negated = parse_formula("not A and B").unwrap();
        assert_eq!(negated, Term::and(Term::not(Term::var("A")), Term::var("B")));
    }
}
