// Human-readable phrases used inside signatures
//
// Everything else a signature contains is source syntax. These phrases are
// the only parts a host may want to translate.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Lookup for the localized phrases a signature may contain
pub trait Messages: Send + Sync {
    /// Display name for an anonymous class, wrapping its formatted base type
    fn anonymous_class_derived(&self, base: &str) -> String;

    /// Token shown in place of the default visibility on local classes
    fn local_class_preposition(&self) -> &str;

    /// Token for the default (package-local) visibility
    fn package_local_presentation(&self) -> &str;
}

/// Phrase table; `{0}` in `anonymous_class_derived` is replaced by the base type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageBundle {
    pub anonymous_class_derived: String,
    pub local_class_preposition: String,
    pub package_local: String,
}

impl Default for MessageBundle {
    fn default() -> Self {
        Self {
            anonymous_class_derived: "anonymous class derived from {0}".to_string(),
            local_class_preposition: "local".to_string(),
            package_local: "package-private".to_string(),
        }
    }
}

impl Messages for MessageBundle {
    fn anonymous_class_derived(&self, base: &str) -> String {
        self.anonymous_class_derived.replace("{0}", base)
    }

    fn local_class_preposition(&self) -> &str {
        &self.local_class_preposition
    }

    fn package_local_presentation(&self) -> &str {
        &self.package_local
    }
}

static ENGLISH: LazyLock<MessageBundle> = LazyLock::new(MessageBundle::default);

/// The built-in English phrases
pub fn english() -> &'static MessageBundle {
    &ENGLISH
}
