#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use kb_entail::{context::Context, reports::Report, structures::clause::Clause};

mod config_io;
mod misc;
mod parse;

use config_io::ConfigIO;
use misc::{examine_rules_report, load_rules};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli().get_matches();

    let config = match parse::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };
    let config_io = ConfigIO::from_args(&matches);

    let mut the_context = Context::from_config(config);

    for path in &config_io.files {
        match load_rules(&mut the_context, path) {
            Ok(report) => examine_rules_report(path, &report),
            Err(e) => {
                println!("c Error reading {path:?}: {e}");
                std::process::exit(1);
            }
        }
    }

    for formula in &config_io.formulas {
        if let Err(e) = the_context.add_formula(formula) {
            println!("c Error in formula '{formula}': {e}");
            std::process::exit(1);
        }
    }

    for fact in &config_io.facts {
        let added = the_context
            .literal_from_string(fact)
            .and_then(|literal| the_context.add_fact(literal));

        if let Err(e) = added {
            println!("c Error in fact '{fact}': {e}");
            std::process::exit(1);
        }
    }

    let query = match the_context.query_from_string(&config_io.query) {
        Ok(query) => query,
        Err(e) => {
            println!("c Error in query: {e}");
            std::process::exit(1);
        }
    };

    if config_io.show_kb {
        for (index, clause) in the_context.kb.iter().enumerate() {
            println!("c {index}: {}", clause.as_string());
        }
    }

    let report = the_context.entails(&query);

    if config_io.show_stats {
        println!("c {}", the_context.counters);
    }

    if config_io.show_proof {
        if let Some(proof) = the_context.proof() {
            for line in proof.to_string().lines() {
                println!("p {line}");
            }

            match proof.verify(the_context.kb.clauses()) {
                true => println!("c The derivation verifies"),
                false => println!("c The derivation does not verify"),
            }
        }
    }

    match report {
        Report::Entailed => {
            println!("s ENTAILED");
            std::process::exit(10)
        }

        Report::NotEntailed => {
            println!("s NOT ENTAILED");
            std::process::exit(20)
        }

        Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(30)
        }
    }
}
