use serde::Serialize;
use strum_macros::{EnumIter, IntoStaticStr};

/// Where a (driver, constructor) edge came from. The static string is the
/// element class the graph view styles the edge with.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    #[strum(serialize = "real-edge")]
    Real,
    #[strum(serialize = "hypothetical-edge")]
    Hypothetical
}

impl EdgeKind {
    pub fn class(self) -> &'static str {
        self.into()
    }

    /// Prefix used for the edge element id
    pub fn id_prefix(self) -> &'static str {
        match self {
            EdgeKind::Real => "edge",
            EdgeKind::Hypothetical => "hypothetical"
        }
    }
}
