/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the [targets] below.
So, for example, `RUST_LOG=resolution=trace` (with a logger such as env_logger installed) shows each step of a search.

Note, no log implementation is provided by the library.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder::parse) formulas and literals.
    pub const PARSE: &str = "parse";

    /// Logs related to [normalisation](crate::transform::cnf).
    pub const CNF: &str = "cnf";

    /// Logs related to the [knowledge base](crate::db).
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [rule ingestion](crate::builder::rules).
    pub const RULES: &str = "rules";

    /// Logs related to [resolution](crate::procedures::resolution).
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the memo cache of a search.
    pub const CACHE: &str = "cache";
}
