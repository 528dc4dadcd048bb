/*!
Reports for the context.
*/

use crate::context::ContextState;

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The query is entailed by the knowledge base.
    Entailed,

    /// The query is not entailed by the knowledge base, or at least no derivation of the query was found.
    NotEntailed,

    /// Whether the query is entailed is unknown, e.g. as some limit was reached.
    Unknown,
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Searching => Self::Unknown,
            ContextState::Finished(report) => *report,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::NotEntailed => write!(f, "Not entailed"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Report {
    /// Whether the report is that the query is entailed.
    pub fn entailed(&self) -> bool {
        matches!(self, Self::Entailed)
    }
}
