use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub order_amount: Decimal,
    pub card_type: String,
    pub card_entry_mode: String,
    pub debit: bool,
    pub prepaid: bool,
    pub international: bool,
    pub opt_blue: bool,
    #[serde(default)]
    pub refund: bool,
    #[serde(default)]
    pub avs: bool,
    #[serde(default)]
    pub cvc: bool,
    #[serde(skip, default)]
    pub nw_fee: Decimal,
}
