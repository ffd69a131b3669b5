use rust_decimal::Decimal;
use serde::Deserialize;

/// An ordered collection of fee definitions plus provenance metadata.
///
/// The metadata fields (`id`, `name`, `effective_date`, `status`) are
/// carried for traceability only; evaluation never reads them.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ruleset {
    pub id: String,
    pub name: String,
    pub effective_date: String,
    pub status: String,
    pub fees: Vec<FeeDefinition>,
}

/// One named component of the total network fee.
///
/// Rate components absent from the config default to zero; a
/// definition with all-zero rates is legal and contributes nothing.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeeDefinition {
    pub key: String,
    pub name: String,
    pub description: String,
    pub rules: Vec<MatchCriteria>,
    #[serde(default)]
    pub pct_rate: Decimal,
    #[serde(default)]
    pub auth_rate: Decimal,
    #[serde(default)]
    pub tx_rate: Decimal,
}

/// One candidate match rule within a fee definition.
///
/// Every field is optional: `None` is a wildcard that any transaction
/// satisfies. Amount bounds are inclusive.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct MatchCriteria {
    pub min_tx_amount: Option<Decimal>,
    pub max_tx_amount: Option<Decimal>,
    pub card_type: Option<String>,
    pub card_entry_mode: Option<String>,
    pub debit: Option<bool>,
    pub prepaid: Option<bool>,
    pub international: Option<bool>,
    pub opt_blue: Option<bool>,
    pub refund: Option<bool>,
    pub avs: Option<bool>,
    pub cvc: Option<bool>,
}
