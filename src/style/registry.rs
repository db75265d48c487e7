//! Style registry: closed variant and size enums with Tailwind class tables.
//!
//! Lookups are total: every variant and size resolves to a non-empty class
//! string, and parsing an unknown key falls back to the documented default
//! instead of failing. The class strings themselves are opaque values as far
//! as this crate is concerned.

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// Visual style variant for buttons and button-like controls.
///
/// Unknown keys parse as [`Variant::Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Alternative,
    Dark,
    Light,
    Green,
    Red,
    Yellow,
    Purple,
}

impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::Alternative,
        Self::Dark,
        Self::Light,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Purple,
    ];

    /// The Tailwind class string for this variant. Total; never empty.
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 focus:outline-none dark:focus:ring-blue-800",
            Self::Alternative => "text-gray-900 focus:outline-none bg-white border border-gray-200 hover:bg-gray-100 hover:text-blue-700 focus:z-10 focus:ring-4 focus:ring-gray-100 dark:focus:ring-gray-700 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700",
            Self::Dark => "text-white bg-gray-800 hover:bg-gray-900 focus:outline-none focus:ring-4 focus:ring-gray-300 dark:bg-gray-800 dark:hover:bg-gray-700 dark:focus:ring-gray-700 dark:border-gray-700",
            Self::Light => "text-gray-900 bg-white border border-gray-300 focus:outline-none hover:bg-gray-100 focus:ring-4 focus:ring-gray-100 dark:bg-gray-800 dark:text-white dark:border-gray-600 dark:hover:bg-gray-700 dark:hover:border-gray-600 dark:focus:ring-gray-700",
            Self::Green => "focus:outline-none text-white bg-green-700 hover:bg-green-800 focus:ring-4 focus:ring-green-300 dark:bg-green-600 dark:hover:bg-green-700 dark:focus:ring-green-800",
            Self::Red => "focus:outline-none text-white bg-red-700 hover:bg-red-800 focus:ring-4 focus:ring-red-300 dark:bg-red-600 dark:hover:bg-red-700 dark:focus:ring-red-900",
            Self::Yellow => "focus:outline-none text-white bg-yellow-400 hover:bg-yellow-500 focus:ring-4 focus:ring-yellow-300 dark:focus:ring-yellow-900",
            Self::Purple => "focus:outline-none text-white bg-purple-700 hover:bg-purple-800 focus:ring-4 focus:ring-purple-300 dark:bg-purple-600 dark:hover:bg-purple-700 dark:focus:ring-purple-900",
        }
    }

    /// The lowercase key for this variant.
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Alternative => "alternative",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }

    /// Parse a variant key. Unknown keys fall back to [`Variant::Default`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "alternative" => Self::Alternative,
            "dark" => Self::Dark,
            "light" => Self::Light,
            "green" => Self::Green,
            "red" => Self::Red,
            "yellow" => Self::Yellow,
            "purple" => Self::Purple,
            _ => Self::Default,
        }
    }
}

// Deserialization keeps the permissive lookup contract: unknown keys become
// the default variant rather than an error.
impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key))
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Size of a button or button-like control.
///
/// Unknown keys parse as [`Size::Base`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Xs,
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Base, Self::Lg, Self::Xl];

    /// The Tailwind class string for this size. Total; never empty.
    pub fn class(self) -> &'static str {
        match self {
            Self::Xs => "px-3 py-2 text-xs",
            Self::Sm => "px-3 py-2 text-sm",
            Self::Base => "px-5 py-2.5 text-sm",
            Self::Lg => "px-5 py-3 text-base",
            Self::Xl => "px-6 py-3.5 text-base",
        }
    }

    /// The lowercase key for this size.
    pub fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Parse a size key. Unknown keys fall back to [`Size::Base`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "xs" => Self::Xs,
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            _ => Self::Base,
        }
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::from_key(&key))
    }
}
