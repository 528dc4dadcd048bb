use std::{path::PathBuf, time::Duration};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use kb_entail::config::{Config, ConfigOption, ContradictoryGoals};

pub fn cli() -> Command {
    Command::new("kb_entail")
        .about("Determines whether a knowledge base of rules entails a query")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("paths")
            .required(false)
            .num_args(0..)
            .value_parser(value_parser!(PathBuf))
            .help("Files of rules, one rule per line, such as 'S02 AND S04 THEN L02'."))

        .arg(Arg::new("formula")
            .long("formula")
            .short('f')
            .value_name("FORMULA")
            .action(ArgAction::Append)
            .help("A formula to add to the knowledge base, such as '(S02 and S04) implies L02'.")
            .long_help("A formula to add to the knowledge base, such as '(S02 and S04) implies L02'.

The connectives are 'not', 'and', 'or', 'implies', and 'equiv', binding from tightest to loosest.
May be given more than once."))

        .arg(Arg::new("fact")
            .long("fact")
            .value_name("LITERAL")
            .action(ArgAction::Append)
            .help("A literal to add to the knowledge base, such as 'S02' or '¬S04'. May be given more than once."))

        .arg(Arg::new("query")
            .long("query")
            .short('q')
            .value_name("LITERALS")
            .required(true)
            .help("The literals to prove, separated by whitespace, such as 'L01 ¬L02'."))

        .arg(Arg::new("no_cache")
            .long("no-cache")
            .action(ArgAction::SetTrue)
            .help("Search without reusing failures."))

        .arg(Arg::new("show_proof")
            .long("proof")
            .short('p')
            .action(ArgAction::SetTrue)
            .help("Display and verify a derivation of the query, if one is found."))

        .arg(Arg::new("show_kb")
            .long("show-kb")
            .action(ArgAction::SetTrue)
            .help("Display the clauses of the knowledge base before the search."))

        .arg(Arg::new("show_stats")
            .long("stats")
            .short('s')
            .action(ArgAction::SetTrue)
            .help("Display counts from the search."))

        .arg(Arg::new("step_limit")
            .long("step-limit")
            .value_name("STEPS")
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help("The greatest number of resolution steps, with 0 for no limit.
Default: 0"))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .num_args(1)
            .help("The time limit of the search, in seconds, with 0 for no limit.
Default: 0"))

        .arg(Arg::new("depth_limit")
            .long("depth-limit")
            .value_name("DEPTH")
            .value_parser(value_parser!(usize))
            .num_args(1)
            .help(format!("The greatest number of lists of goals open at once.
Default: {}", Config::default().depth_limit.value)))

        .arg(Arg::new("contradictory_goals")
            .long("contradictory-goals")
            .value_name("POLICY")
            .value_parser(parse_contradictory_goals)
            .num_args(1)
            .help("How to treat goals containing some literal and its negation.
Default: retain")
            .long_help("How to treat goals containing some literal and its negation.
Default: retain

- retain: Attempt to prove each literal of the pair.
- reject: Fail, as no consistent knowledge base entails both.
- discharge: Remove the pair, and succeed if no goal remains. This is not sound."))
}

fn parse_contradictory_goals(value: &str) -> Result<ContradictoryGoals, String> {
    value
        .parse::<ContradictoryGoals>()
        .map_err(|_| format!("'{value}' is not one of retain, reject, discharge"))
}

pub enum ConfigError {
    OutOfBounds(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::OutOfBounds(s) => write!(f, "{s}"),
        }
    }
}

/// Sets the option to the value, or returns an error if the value is out of bounds.
fn set_option<T: Clone + PartialOrd + std::fmt::Debug>(
    option: &mut ConfigOption<T>,
    value: T,
) -> Result<(), ConfigError> {
    match option.set(value.clone()) {
        true => {
            println!("c {} set to: {value:?}", option.name);
            Ok(())
        }
        false => {
            let (min, max) = option.min_max();
            Err(ConfigError::OutOfBounds(format!(
                "{} requires a value between {min:?} and {max:?}",
                option.name
            )))
        }
    }
}

/// A [Config] from the arguments, with defaults for any argument not given.
pub fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    if args.get_flag("no_cache") {
        set_option(&mut the_config.cache, false)?;
    }

    if let Ok(Some(steps)) = args.try_get_one::<usize>("step_limit") {
        set_option(&mut the_config.step_limit, *steps)?;
    };

    if let Ok(Some(secs)) = args.try_get_one::<u64>("time_limit") {
        set_option(&mut the_config.time_limit, Duration::from_secs(*secs))?;
    };

    if let Ok(Some(depth)) = args.try_get_one::<usize>("depth_limit") {
        set_option(&mut the_config.depth_limit, *depth)?;
    };

    if let Ok(Some(policy)) = args.try_get_one::<ContradictoryGoals>("contradictory_goals") {
        set_option(&mut the_config.contradictory_goals, *policy)?;
    };

    Ok(the_config)
}
