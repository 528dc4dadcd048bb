use std::path::PathBuf;

use clap::ArgMatches;

/// A collection of configuration options relevant only to the CLI.
#[derive(Clone, Default)]
pub struct ConfigIO {
    /// Files of rules.
    pub files: Vec<PathBuf>,

    /// Formulas, each added as given.
    pub formulas: Vec<String>,

    /// Literals, each added as a unit clause.
    pub facts: Vec<String>,

    /// The query, as text.
    pub query: String,

    pub show_kb: bool,
    pub show_proof: bool,
    pub show_stats: bool,
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let strings = |id: &str| -> Vec<String> {
            args.get_many::<String>(id)
                .map(|values| values.cloned().collect())
                .unwrap_or_default()
        };

        ConfigIO {
            files: args
                .get_many::<PathBuf>("paths")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
            formulas: strings("formula"),
            facts: strings("fact"),
            query: args.get_one::<String>("query").cloned().unwrap_or_default(),
            show_kb: args.get_flag("show_kb"),
            show_proof: args.get_flag("show_proof"),
            show_stats: args.get_flag("show_stats"),
        }
    }
}
