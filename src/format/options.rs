// Rendering options
//
// One named switch per rendering directive. Options compose additively with
// `|`; a switch that has nothing to act on is simply ignored. The numeric
// encoding is kept for callers that store options as integers.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;
use thiserror::Error;

/// Parameters rendered before the list is cut with `, ...`
pub const DEFAULT_MAX_PARAMS: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseOptionsError {
    #[error("Unknown option flag: {0}")]
    UnknownFlag(String),

    #[error("Invalid option bits: {0}")]
    InvalidBits(String),
}

macro_rules! format_options {
    ($( $(#[$doc:meta])* $field:ident => $constant:ident = $bit:literal, )+) => {
        /// Rendering directives for every signature assembler
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(default)]
        pub struct FormatOptions {
            $( $(#[$doc])* pub $field: bool, )+
        }

        impl FormatOptions {
            /// No directive set
            pub const NONE: FormatOptions = FormatOptions { $( $field: false, )+ };

            $(
                $(#[$doc])*
                pub const $constant: FormatOptions = FormatOptions { $field: true, ..FormatOptions::NONE };
            )+

            /// Flag names with their numeric encoding
            pub const FLAGS: &'static [(&'static str, u32)] = &[ $( (stringify!($constant), $bit), )+ ];

            /// Decode an integer mask. Unknown bits are ignored.
            pub const fn from_bits(bits: u32) -> Self {
                FormatOptions { $( $field: bits & $bit != 0, )+ }
            }

            pub const fn bits(&self) -> u32 {
                let mut bits = 0;
                $( if self.$field { bits |= $bit; } )+
                bits
            }
        }
    };
}

format_options! {
    /// Include the element name
    show_name => SHOW_NAME = 0x0001,
    /// Include the variable type or method return type
    show_type => SHOW_TYPE = 0x0002,
    /// Place the type after the name (`name:Type`)
    type_after => TYPE_AFTER = 0x0004,
    show_modifiers => SHOW_MODIFIERS = 0x0008,
    /// Place modifiers after the name
    modifiers_after => MODIFIERS_AFTER = 0x0010,
    /// Show modifiers that are only implied
    show_redundant_modifiers => SHOW_REDUNDANT_MODIFIERS = 0x0020,
    /// Show the default visibility even when nothing declares it
    show_package_local => SHOW_PACKAGE_LOCAL = 0x0040,
    /// Include the first line of a variable initializer
    show_initializer => SHOW_INITIALIZER = 0x0080,
    show_parameters => SHOW_PARAMETERS = 0x0100,
    show_throws => SHOW_THROWS = 0x0200,
    show_extends_implements => SHOW_EXTENDS_IMPLEMENTS = 0x0400,
    /// Qualified class names for classes and member qualifiers
    show_fq_name => SHOW_FQ_NAME = 0x0800,
    /// Prefix members with `Owner.`
    show_containing_class => SHOW_CONTAINING_CLASS = 0x1000,
    /// Canonical text for types and references
    show_fq_class_names => SHOW_FQ_CLASS_NAMES = 0x2000,
    /// Drop modifiers that do not belong in API docs
    javadoc_modifiers_only => JAVADOC_MODIFIERS_ONLY = 0x4000,
    show_anonymous_class_verbose => SHOW_ANONYMOUS_CLASS_VERBOSE = 0x8000,
    /// Erase generic arguments before rendering types
    show_raw_type => SHOW_RAW_TYPE = 0x10000,
}

impl FormatOptions {
    pub const fn union(self, other: FormatOptions) -> FormatOptions {
        FormatOptions::from_bits(self.bits() | other.bits())
    }

    /// Whether every directive of `other` is set here
    pub const fn contains(&self, other: FormatOptions) -> bool {
        self.bits() & other.bits() == other.bits()
    }

    pub fn modifiers_before(&self) -> bool {
        self.show_modifiers && !self.modifiers_after
    }

    pub fn modifiers_after(&self) -> bool {
        self.show_modifiers && self.modifiers_after
    }

    pub fn type_before(&self) -> bool {
        self.show_type && !self.type_after
    }

    pub fn type_after(&self) -> bool {
        self.show_type && self.type_after
    }
}

impl BitOr for FormatOptions {
    type Output = FormatOptions;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for FormatOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

/// Parses `0x1103`, `4355`, or `SHOW_NAME|show_type,show_parameters`
impl FromStr for FormatOptions {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(FormatOptions::NONE);
        }
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16)
                .map(FormatOptions::from_bits)
                .map_err(|_| ParseOptionsError::InvalidBits(s.to_string()));
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            return s
                .parse::<u32>()
                .map(FormatOptions::from_bits)
                .map_err(|_| ParseOptionsError::InvalidBits(s.to_string()));
        }

        let mut bits = 0;
        for name in s.split(['|', ',']).map(str::trim).filter(|n| !n.is_empty()) {
            let (_, bit) = FormatOptions::FLAGS
                .iter()
                .find(|(flag, _)| flag.eq_ignore_ascii_case(name))
                .ok_or_else(|| ParseOptionsError::UnknownFlag(name.to_string()))?;
            bits |= bit;
        }
        Ok(FormatOptions::from_bits(bits))
    }
}
