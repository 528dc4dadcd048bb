use std::str::FromStr;

/// Variant treatments of a list of goals containing some literal and its negation.
///
/// Proving both a literal and its negation requires the knowledge base to be inconsistent.
/// Still, some applications expect a complementary pair to be discharged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContradictoryGoals {
    /// Keep both literals of each complementary pair as goals, and so attempt to prove each.
    Retain = 0,

    /// Fail on any list of goals with a complementary pair.
    ///
    /// Sound when the knowledge base is consistent, and quicker than [Retain](ContradictoryGoals::Retain).
    Reject,

    /// Remove both literals of each complementary pair from a list of goals, and succeed if no goal remains.
    ///
    /// This is not sound.
    /// For example, resolving `x` against the clause `{x, ¬p}` with the goals `x ¬p` leaves the goals `p ¬p`, which are discharged, though the clause entails neither `x` nor `¬p`.
    Discharge,
}

impl std::fmt::Display for ContradictoryGoals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Retain => write!(f, "retain"),
            Self::Reject => write!(f, "reject"),
            Self::Discharge => write!(f, "discharge"),
        }
    }
}

impl ContradictoryGoals {
    /// The minimum ContradictoryGoals type.
    pub const MIN: ContradictoryGoals = ContradictoryGoals::Retain;

    /// The maximum ContradictoryGoals type.
    pub const MAX: ContradictoryGoals = ContradictoryGoals::Discharge;
}

impl FromStr for ContradictoryGoals {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retain" => Ok(Self::Retain),

            "reject" => Ok(Self::Reject),

            "discharge" => Ok(Self::Discharge),

            _unknown_string => Err(()),
        }
    }
}
