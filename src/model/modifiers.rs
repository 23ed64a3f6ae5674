// Modifier keywords and modifier sets
//
// A modifier set records two things per keyword: whether it is written in
// the source (explicit) and whether it holds at all (effective). Implicit
// modifiers, such as `public abstract` on interface methods, are effective
// without being explicit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Modifier keywords in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    PackageLocal,
    Static,
    Abstract,
    Final,
    Native,
    Synchronized,
    Strictfp,
    Transient,
    Volatile,
}

impl Modifier {
    /// Every modifier, in the order signatures render them
    pub const ALL: [Modifier; 12] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::PackageLocal,
        Modifier::Static,
        Modifier::Abstract,
        Modifier::Final,
        Modifier::Native,
        Modifier::Synchronized,
        Modifier::Strictfp,
        Modifier::Transient,
        Modifier::Volatile,
    ];

    /// Source keyword. Package-local has none, so its model name is used.
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::PackageLocal => "packageLocal",
            Modifier::Static => "static",
            Modifier::Abstract => "abstract",
            Modifier::Final => "final",
            Modifier::Native => "native",
            Modifier::Synchronized => "synchronized",
            Modifier::Strictfp => "strictfp",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
        }
    }

    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Protected | Modifier::Private | Modifier::PackageLocal
        )
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Modifiers attached to a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSet {
    /// Keywords physically present in the source
    #[serde(default)]
    explicit: BTreeSet<Modifier>,
    /// Keywords that hold without being written (language defaults)
    #[serde(default)]
    implicit: BTreeSet<Modifier>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set containing only explicit modifiers
    pub fn explicit(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            explicit: modifiers.into_iter().collect(),
            implicit: BTreeSet::new(),
        }
    }

    /// Add modifiers that hold without being written
    pub fn with_implicit(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.implicit.extend(modifiers);
        self
    }

    pub fn has_explicit(&self, modifier: Modifier) -> bool {
        self.explicit.contains(&modifier)
    }

    /// Whether the modifier holds, written or not.
    ///
    /// Package-local is effective whenever no other visibility is.
    pub fn has_effective(&self, modifier: Modifier) -> bool {
        if self.explicit.contains(&modifier) || self.implicit.contains(&modifier) {
            return true;
        }
        modifier == Modifier::PackageLocal
            && ![Modifier::Public, Modifier::Protected, Modifier::Private]
                .into_iter()
                .any(|m| self.explicit.contains(&m) || self.implicit.contains(&m))
    }

    /// Explicit-only or effective lookup
    pub fn has(&self, modifier: Modifier, include_implicit: bool) -> bool {
        if include_implicit {
            self.has_effective(modifier)
        } else {
            self.has_explicit(modifier)
        }
    }

    /// The effective visibility keyword
    pub fn visibility(&self) -> Modifier {
        [Modifier::Public, Modifier::Protected, Modifier::Private]
            .into_iter()
            .find(|m| self.has_effective(*m))
            .unwrap_or(Modifier::PackageLocal)
    }

    /// Number of visibility keywords listed (explicit or implicit)
    pub(crate) fn listed_visibility_count(&self) -> usize {
        self.explicit
            .union(&self.implicit)
            .filter(|m| m.is_visibility())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.explicit.is_empty() && self.implicit.is_empty()
    }
}
