//! Conversion of API responses into [`Card`] and [`CardSet`] records.
//!
//! Parsing is tolerant per field: a missing or mistyped attribute leaves
//! that attribute unset and never drops the record it belongs to. A
//! response without the expected top-level array parses to an empty list.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::config;
use crate::json::{self, JsonResults};
use crate::models::{Card, CardSet, ForeignName, Ruling};

/// Top-level and per-card JSON keys used by the cards endpoint.
pub mod card_keys {
    pub const CARDS: &str = "cards";
    pub const NAME: &str = "name";
    pub const NAMES: &str = "names";
    pub const MANA_COST: &str = "manaCost";
    pub const CMC: &str = "cmc";
    pub const COLORS: &str = "colors";
    pub const COLOR_IDENTITY: &str = "colorIdentity";
    pub const TYPE: &str = "type";
    pub const SUPERTYPES: &str = "supertypes";
    pub const TYPES: &str = "types";
    pub const SUBTYPES: &str = "subtypes";
    pub const RARITY: &str = "rarity";
    pub const SET: &str = "set";
    pub const SET_NAME: &str = "setName";
    pub const TEXT: &str = "text";
    pub const ARTIST: &str = "artist";
    pub const NUMBER: &str = "number";
    pub const POWER: &str = "power";
    pub const TOUGHNESS: &str = "toughness";
    pub const LAYOUT: &str = "layout";
    pub const MULTIVERSEID: &str = "multiverseid";
    pub const IMAGE_URL: &str = "imageUrl";
    pub const RULINGS: &str = "rulings";
    pub const FOREIGN_NAMES: &str = "foreignNames";
    pub const PRINTINGS: &str = "printings";
    pub const ORIGINAL_TEXT: &str = "originalText";
    pub const ORIGINAL_TYPE: &str = "originalType";
    pub const ID: &str = "id";
    pub const LOYALTY: &str = "loyalty";
    pub const LEGALITIES: &str = "legalities";
    pub const LEGALITIES_FORMAT: &str = "format";
    pub const LEGALITIES_LEGALITY: &str = "legality";
    pub const GAME_FORMAT: &str = "gameFormat";
    pub const RELEASE_DATE: &str = "releaseDate";
}

/// Top-level and per-set JSON keys used by the sets endpoint.
pub mod set_keys {
    pub const SETS: &str = "sets";
    pub const NAME: &str = "name";
    pub const CODE: &str = "code";
    pub const BLOCK: &str = "block";
    pub const TYPE: &str = "type";
    pub const BORDER: &str = "border";
    pub const RELEASE_DATE: &str = "releaseDate";
    pub const MAGIC_CARDS_INFO_CODE: &str = "magicCardsInfoCode";
    pub const BOOSTER: &str = "booster";
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

/// Parse the `cards` array of a response.
pub fn parse_cards(response: &JsonResults) -> Vec<Card> {
    let Some(objects) = json::get_object_vec(response, card_keys::CARDS) else {
        if config::logging_enabled() {
            tracing::warn!("parse_cards: unexpected json, returning empty array");
        }
        return Vec::new();
    };

    let cards: Vec<Card> = objects.into_iter().map(parse_card).collect();

    if config::logging_enabled() {
        tracing::debug!(count = cards.len(), "cards retrieved");
    }
    cards
}

/// Parse a single card object.
pub fn parse_card(c: &Map<String, Value>) -> Card {
    use card_keys::*;

    Card {
        name: json::get_str(c, NAME),
        names: json::get_str_vec(c, NAMES),
        mana_cost: json::get_str(c, MANA_COST),
        cmc: json::get_f64(c, CMC),
        colors: json::get_str_vec(c, COLORS),
        color_identity: json::get_str_vec(c, COLOR_IDENTITY),
        type_line: json::get_str(c, TYPE),
        supertypes: json::get_str_vec(c, SUPERTYPES),
        types: json::get_str_vec(c, TYPES),
        subtypes: json::get_str_vec(c, SUBTYPES),
        rarity: json::get_str(c, RARITY),
        set: json::get_str(c, SET),
        set_name: json::get_str(c, SET_NAME),
        text: json::get_str(c, TEXT),
        artist: json::get_str(c, ARTIST),
        number: json::get_str(c, NUMBER),
        power: json::get_str(c, POWER),
        toughness: json::get_str(c, TOUGHNESS),
        layout: json::get_str(c, LAYOUT),
        multiverseid: json::get_i64(c, MULTIVERSEID),
        image_url: json::get_str(c, IMAGE_URL),
        rulings: json::get_object_vec(c, RULINGS)
            .map(|rs| rs.into_iter().map(parse_ruling).collect()),
        foreign_names: json::get_object_vec(c, FOREIGN_NAMES)
            .map(|fs| fs.into_iter().map(parse_foreign_name).collect()),
        printings: json::get_str_vec(c, PRINTINGS),
        original_text: json::get_str(c, ORIGINAL_TEXT),
        original_type: json::get_str(c, ORIGINAL_TYPE),
        id: json::get_str(c, ID),
        loyalty: json::get_str(c, LOYALTY),
        game_format: json::get_str(c, GAME_FORMAT),
        release_date: json::get_str(c, RELEASE_DATE),
        legalities: parse_legalities(c.get(LEGALITIES)),
    }
}

fn parse_ruling(r: &Map<String, Value>) -> Ruling {
    Ruling {
        date: json::get_str(r, "date"),
        text: json::get_str(r, "text"),
    }
}

fn parse_foreign_name(f: &Map<String, Value>) -> ForeignName {
    ForeignName {
        name: json::get_str(f, "name"),
        language: json::get_str(f, "language"),
        text: json::get_str(f, "text"),
        type_line: json::get_str(f, "type"),
        flavor: json::get_str(f, "flavor"),
        image_url: json::get_str(f, "imageUrl"),
        multiverseid: json::get_i64(f, "multiverseid"),
    }
}

/// Fold `[{format, legality}, ...]` into a map. Later entries for the same
/// format overwrite earlier ones; entries missing either string are skipped.
fn parse_legalities(value: Option<&Value>) -> HashMap<String, String> {
    let mut legalities = HashMap::new();
    let Some(pairs) = value.and_then(Value::as_array) else {
        return legalities;
    };

    for pair in pairs.iter().filter_map(Value::as_object) {
        let format = json::get_str(pair, card_keys::LEGALITIES_FORMAT);
        let legality = json::get_str(pair, card_keys::LEGALITIES_LEGALITY);
        if let (Some(format), Some(legality)) = (format, legality) {
            legalities.insert(format, legality);
        }
    }
    legalities
}

// ---------------------------------------------------------------------------
// Sets
// ---------------------------------------------------------------------------

/// Parse the `sets` array of a response.
pub fn parse_sets(response: &JsonResults) -> Vec<CardSet> {
    let Some(objects) = json::get_object_vec(response, set_keys::SETS) else {
        if config::logging_enabled() {
            tracing::warn!("parse_sets: unexpected json, returning empty array");
        }
        return Vec::new();
    };

    let sets: Vec<CardSet> = objects.into_iter().map(parse_set).collect();

    if config::logging_enabled() {
        tracing::debug!(count = sets.len(), "sets retrieved");
    }
    sets
}

/// Parse a single set object.
pub fn parse_set(s: &Map<String, Value>) -> CardSet {
    use set_keys::*;

    CardSet {
        name: json::get_str(s, NAME),
        code: json::get_str(s, CODE),
        block: json::get_str(s, BLOCK),
        type_field: json::get_str(s, TYPE),
        border: json::get_str(s, BORDER),
        release_date: json::get_str(s, RELEASE_DATE),
        magic_cards_info_code: json::get_str(s, MAGIC_CARDS_INFO_CODE),
        booster: s.get(BOOSTER).and_then(parse_booster),
    }
}

/// Slots may be a bare token (`"common"`) or a list of alternatives
/// (`["rare", "mythic rare"]`). Any other slot shape rejects the sheet.
fn parse_booster(value: &Value) -> Option<Vec<Vec<String>>> {
    value
        .as_array()?
        .iter()
        .map(|slot| match slot {
            Value::String(token) => Some(vec![token.clone()]),
            other => json::str_vec(other),
        })
        .collect()
}
