use serde::Serialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Card — one printing returned by the cards endpoint
// ---------------------------------------------------------------------------

/// A card record.
///
/// Every attribute is optional: the parser sets one only when the API sent
/// it under the expected key with the expected JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: Option<String>,
    /// All face names of a multi-faced card.
    pub names: Option<Vec<String>>,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    pub colors: Option<Vec<String>>,
    pub color_identity: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub type_line: Option<String>,
    pub supertypes: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    pub subtypes: Option<Vec<String>>,
    pub rarity: Option<String>,
    pub set: Option<String>,
    pub set_name: Option<String>,
    pub text: Option<String>,
    pub artist: Option<String>,
    pub number: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub layout: Option<String>,
    pub multiverseid: Option<i64>,
    pub image_url: Option<String>,
    pub rulings: Option<Vec<Ruling>>,
    pub foreign_names: Option<Vec<ForeignName>>,
    pub printings: Option<Vec<String>>,
    pub original_text: Option<String>,
    pub original_type: Option<String>,
    pub id: Option<String>,
    pub loyalty: Option<String>,
    pub game_format: Option<String>,
    pub release_date: Option<String>,
    /// Format name to legality (`"Legal"`, `"Banned"`, `"Restricted"`).
    pub legalities: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Ruling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ruling {
    pub date: Option<String>,
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// ForeignName — localized printing data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignName {
    pub name: Option<String>,
    pub language: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub type_line: Option<String>,
    pub flavor: Option<String>,
    pub image_url: Option<String>,
    pub multiverseid: Option<i64>,
}
