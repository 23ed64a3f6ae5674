// Codesig - Signature rendering for resolved code models
//!
//! Codesig renders variables, methods and classes of an already-resolved code
//! model as display strings for hovers, completion lists, structure views and
//! generated documentation, and builds stable external names for them.
//!
//! ```rust,ignore
//! use codesig::{CodeModel, FormatOptions, SignatureFormatter, Substitution};
//!
//! let model = CodeModel::from_json(&json)?;
//! let formatter = SignatureFormatter::new(&model);
//! let text = formatter.format_method(
//!     method_id,
//!     &Substitution::empty(),
//!     FormatOptions::SHOW_NAME | FormatOptions::SHOW_PARAMETERS,
//!     FormatOptions::SHOW_TYPE,
//! )?;
//! ```

pub mod config;
pub mod format;
pub mod messages;
pub mod model;


// Re-export common types
pub use config::{FormatterConfig, Preset};
pub use format::{FormatError, FormatOptions, SignatureFormatter, DEFAULT_MAX_PARAMS};
pub use messages::{MessageBundle, Messages};
pub use model::{
    CodeModel, Element, ElementId, ElementKind, Modifier, ModifierSet, ModelError, Substitution,
    TypeRef,
};
