/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and each configurable value is a [ConfigOption] with a name and bounds.
A search reads the configuration of the context it is made in, and the configuration is not changed by a search.

```rust
# use kb_entail::config::{Config, ContradictoryGoals};
let mut config = Config::default();

assert!(config.cache.value);
assert_eq!(config.contradictory_goals.value, ContradictoryGoals::Retain);

assert!(config.step_limit.set(10_000));
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod contradictory_goals;
pub use contradictory_goals::ContradictoryGoals;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Reuse the result of a (definitive) failure to prove a list of goals within a search.
    pub cache: ConfigOption<bool>,

    /// How to treat a list of goals containing some literal and its negation.
    pub contradictory_goals: ConfigOption<ContradictoryGoals>,

    /// The greatest number of lists of goals to be open at once, i.e. the depth of the search.
    pub depth_limit: ConfigOption<usize>,

    /// Keep the derivation found by a successful search.
    pub record_proof: ConfigOption<bool>,

    /// The greatest number of resolution steps in a search, with zero for no limit.
    pub step_limit: ConfigOption<usize>,

    /// The time limit for a search, with zero for no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cache: ConfigOption {
                name: "cache",
                min: false,
                max: true,
                value: true,
            },

            contradictory_goals: ConfigOption {
                name: "contradictory_goals",
                min: ContradictoryGoals::MIN,
                max: ContradictoryGoals::MAX,
                value: ContradictoryGoals::Retain,
            },

            depth_limit: ConfigOption {
                name: "depth_limit",
                min: 1,
                max: usize::MAX,
                value: 100_000,
            },

            record_proof: ConfigOption {
                name: "record_proof",
                min: false,
                max: true,
                value: true,
            },

            step_limit: ConfigOption {
                name: "step_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}
