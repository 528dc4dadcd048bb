use kb_entail::{
    config::Config,
    context::Counters,
    generic::{
        minimal_pcg::MinimalPCG32,
        random::{random_clause_set, random_literal},
    },
    procedures::{solve, solve_cached, solve_with},
    reports::Report,
    structures::{clause::CClause, literal::CLiteral, valuation::Assignment},
};
use rand::{Rng, SeedableRng};

const ATOMS: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

struct Instance {
    atoms: Vec<&'static str>,
    kb: Vec<CClause>,
    query: Vec<CLiteral>,
}

/// Random instances over at most `atom_limit` atoms, with at most `clause_limit` clauses of at most three literals.
fn instances(seed: u64, count: usize, atom_limit: usize, clause_limit: usize) -> Vec<Instance> {
    let mut rng = MinimalPCG32::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let atoms = ATOMS[..rng.random_range(1..=atom_limit)].to_vec();
            let clause_count = rng.random_range(1..=clause_limit);
            let kb = random_clause_set(&mut rng, &atoms, clause_count, 3).unwrap();
            let query_size = rng.random_range(1..=2);
            let query = (0..query_size)
                .map(|_| random_literal(&mut rng, &atoms).unwrap())
                .collect();
            Instance { atoms, kb, query }
        })
        .collect()
}

/// Whether every assignment which satisfies the clauses satisfies each literal of the query.
fn semantically_entailed(instance: &Instance) -> bool {
    Assignment::every(&instance.atoms)
        .filter(|assignment| assignment.satisfies(&instance.kb))
        .all(|assignment| {
            instance
                .query
                .iter()
                .all(|literal| assignment.satisfies_literal(literal))
        })
}

fn bounded(cache: bool) -> Config {
    let mut config = Config::default();
    config.cache.value = cache;
    config.step_limit.value = 20_000;
    config
}

mod agreement {

    use super::*;

    /// Checks that a search with a cache decides each instance a search without a cache decides within the step limit, and with the same result.
    ///
    /// Returns the number of instances decided by the search without a cache.
    fn agree(instances: Vec<Instance>) -> usize {
        let uncached = bounded(false);
        let cached = bounded(true);

        let mut decided = 0;
        for instance in instances {
            let (plain, _) = solve_with(
                &instance.kb,
                &instance.query,
                &uncached,
                &mut Counters::default(),
            );
            let (quick, _) = solve_with(
                &instance.kb,
                &instance.query,
                &cached,
                &mut Counters::default(),
            );

            if plain == Report::Unknown {
                continue;
            }
            decided += 1;
            assert_ne!(quick, Report::Unknown, "{:?} / {:?}", instance.kb, instance.query);
            assert_eq!(plain, quick, "{:?} / {:?}", instance.kb, instance.query);
        }

        decided
    }

    #[test]
    fn cache_agrees() {
        assert!(agree(instances(5, 300, 6, 10)) > 250);
    }

    #[test]
    fn cache_agrees_at_scale() {
        assert!(agree(instances(17, 200, 10, 20)) > 150);
    }

    #[test]
    fn cache_decides_with_cycles() {
        let kb = [
            "¬A",
            "¬D ¬A B",
            "¬E E ¬B",
            "¬E B C",
            "C ¬C ¬E",
            "¬B D E",
            "D E A",
            "¬C ¬D ¬A",
            "C C ¬E",
        ]
        .iter()
        .map(|clause| {
            clause
                .split_whitespace()
                .map(|literal| literal.parse().unwrap())
                .collect()
        })
        .collect::<Vec<CClause>>();
        let query = ["E".parse::<CLiteral>().unwrap()];

        let (report, _) = solve_with(&kb, &query, &bounded(true), &mut Counters::default());
        assert_eq!(report, Report::NotEntailed);
        assert!(!solve_cached(&kb, &query));

        let instance = Instance {
            atoms: ATOMS[..5].to_vec(),
            kb,
            query: query.to_vec(),
        };
        assert!(!semantically_entailed(&instance));
    }

    #[test]
    fn sound() {
        let config = bounded(true);

        for instance in instances(9, 300, 6, 10) {
            let (report, proof) = solve_with(
                &instance.kb,
                &instance.query,
                &config,
                &mut Counters::default(),
            );

            if report == Report::Entailed {
                assert!(semantically_entailed(&instance));

                let proof = proof.unwrap();
                assert!(proof.verify(&instance.kb));
                assert_eq!(proof.query, instance.query);
            } else {
                assert!(proof.is_none());
            }
        }
    }

    #[test]
    fn small_instances() {
        let mut rng = MinimalPCG32::seed_from_u64(13);

        for _ in 0..200 {
            let clause_count = rng.random_range(1..=5);
            let kb = random_clause_set(&mut rng, &ATOMS[..3], clause_count, 2).unwrap();
            let query = [random_literal(&mut rng, &ATOMS[..3]).unwrap()];

            assert_eq!(solve(&kb, &query), solve_cached(&kb, &query), "{kb:?}");
        }
    }
}

mod shared {

    use super::*;

    use kb_entail::db::KnowledgeBase;

    #[test]
    fn threads_share_a_kb() {
        let (kb, failures) = KnowledgeBase::from_formulas([
            "(B and C) implies A",
            "D implies B",
            "C",
            "D",
            "X implies Y",
            "Y implies X",
        ]);
        assert!(failures.is_empty());

        let queries = [("A", true), ("B", true), ("E", false), ("X", false), ("¬E", false)];

        crossbeam::thread::scope(|scope| {
            for (query, expected) in queries {
                let kb = &kb;
                scope.spawn(move |_| {
                    let query = [query.parse::<CLiteral>().unwrap()];
                    for _ in 0..50 {
                        assert_eq!(solve(kb.clauses(), &query), expected);
                        assert_eq!(solve_cached(kb.clauses(), &query), expected);
                    }
                });
            }
        })
        .unwrap();
    }
}
