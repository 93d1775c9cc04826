use serde::Serialize;

// ---------------------------------------------------------------------------
// CardSet — summary info returned by the sets endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub name: Option<String>,
    pub code: Option<String>,
    pub block: Option<String>,
    #[serde(rename = "type")]
    pub type_field: Option<String>,
    pub border: Option<String>,
    pub release_date: Option<String>,
    pub magic_cards_info_code: Option<String>,
    /// Booster slot sheet. Each inner list holds the rarity or kind tokens
    /// a slot may contain; tokens are kept exactly as the API sent them.
    pub booster: Option<Vec<Vec<String>>>,
}
