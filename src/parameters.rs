//! Search parameters and pagination for the card and set endpoints.
//!
//! Every parameter contributes one `name=value` entry to the query string.
//! Keys are not validated here; unknown or repeated keys are forwarded to
//! the API as-is.

use std::fmt;

use crate::config;

// ---------------------------------------------------------------------------
// SearchParameter
// ---------------------------------------------------------------------------

/// A single filter that can be sent to one of the search endpoints.
pub trait SearchParameter {
    /// Path of the endpoint this kind of parameter filters (e.g. `/v1/cards`).
    const ENDPOINT: &'static str;

    /// The query key, e.g. `"name"` or `"colors"`.
    fn name(&self) -> &str;

    /// The query value in its string form.
    fn value(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Card parameters
// ---------------------------------------------------------------------------

/// Keys accepted by the `/v1/cards` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardQueryParameterType {
    Name,
    Cmc,
    Colors,
    ColorIdentity,
    Type,
    Supertypes,
    Types,
    Subtypes,
    Rarity,
    Set,
    SetName,
    Text,
    Flavor,
    Artist,
    Number,
    Power,
    Toughness,
    Loyalty,
    Layout,
    Multiverseid,
    GameFormat,
    Legality,
    Language,
    Contains,
    OrderBy,
    Random,
    Id,
}

impl CardQueryParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cmc => "cmc",
            Self::Colors => "colors",
            Self::ColorIdentity => "colorIdentity",
            Self::Type => "type",
            Self::Supertypes => "supertypes",
            Self::Types => "types",
            Self::Subtypes => "subtypes",
            Self::Rarity => "rarity",
            Self::Set => "set",
            Self::SetName => "setName",
            Self::Text => "text",
            Self::Flavor => "flavor",
            Self::Artist => "artist",
            Self::Number => "number",
            Self::Power => "power",
            Self::Toughness => "toughness",
            Self::Loyalty => "loyalty",
            Self::Layout => "layout",
            Self::Multiverseid => "multiverseid",
            Self::GameFormat => "gameFormat",
            Self::Legality => "legality",
            Self::Language => "language",
            Self::Contains => "contains",
            Self::OrderBy => "orderBy",
            Self::Random => "random",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for CardQueryParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter for card searches.
///
/// ```rust
/// use mtg_sdk::{CardQueryParameterType, CardSearchParameter, SearchParameter};
///
/// let p = CardSearchParameter::new(CardQueryParameterType::Colors, "red|white");
/// assert_eq!(p.name(), "colors");
/// assert_eq!(p.value(), "red|white");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSearchParameter {
    name: String,
    value: String,
}

impl CardSearchParameter {
    pub fn new(kind: CardQueryParameterType, value: impl Into<String>) -> Self {
        Self {
            name: kind.as_str().to_string(),
            value: value.into(),
        }
    }

    /// A parameter with a key that has no [`CardQueryParameterType`] variant.
    ///
    /// The name is passed through unchecked. An empty name still produces a
    /// pair, encoded as `=value`, which the API ignores.
    pub fn custom(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl SearchParameter for CardSearchParameter {
    const ENDPOINT: &'static str = config::CARDS_PATH;

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }
}

// ---------------------------------------------------------------------------
// Set parameters
// ---------------------------------------------------------------------------

/// Keys accepted by the `/v1/sets` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetQueryParameterType {
    Name,
    Block,
}

impl SetQueryParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for SetQueryParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter for set searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSearchParameter {
    name: String,
    value: String,
}

impl SetSearchParameter {
    pub fn new(kind: SetQueryParameterType, value: impl Into<String>) -> Self {
        Self {
            name: kind.as_str().to_string(),
            value: value.into(),
        }
    }

    /// A parameter with a key that has no [`SetQueryParameterType`] variant.
    ///
    /// The name is passed through unchecked. An empty name still produces a
    /// pair, encoded as `=value`, which the API ignores.
    pub fn custom(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl SearchParameter for SetSearchParameter {
    const ENDPOINT: &'static str = config::SETS_PATH;

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }
}

// ---------------------------------------------------------------------------
// SearchConfiguration
// ---------------------------------------------------------------------------

/// Pagination controls sent with every search.
///
/// Values are forwarded verbatim; the API decides what to do with a zero
/// page size or a page past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchConfiguration {
    /// Number of records per page (`pageSize`).
    pub page_size: u32,
    /// 1-based page index (`page`).
    pub page: u32,
}

impl SearchConfiguration {
    /// `pageSize=100`, `page=1`.
    pub const DEFAULT: SearchConfiguration = SearchConfiguration {
        page_size: config::DEFAULT_PAGE_SIZE,
        page: config::DEFAULT_PAGE,
    };

    pub fn new(page_size: u32, page: u32) -> Self {
        Self { page_size, page }
    }
}

impl Default for SearchConfiguration {
    fn default() -> Self {
        Self::DEFAULT
    }
}
