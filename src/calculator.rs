use crate::ruleset::FeeDefinition;
use crate::transaction::Transaction;
use rust_decimal::Decimal;

/// Number of authorizations the network bills for a given entry mode.
///
/// Tokenized and pre-authed captures settle as three authorization
/// messages, incremental pre-auths as two, everything else as one.
/// Unrecognized modes fall through to one; that is never an error.
pub fn auth_multiplier(card_entry_mode: &str) -> u32 {
    match card_entry_mode {
        "TOKENIZED" | "PRE_AUTHED" => 3,
        "INCREMENTAL_PRE_AUTHED" => 2,
        _ => 1,
    }
}

/// Computes one fee definition's contribution for a transaction.
///
/// Pure: returns the increment without touching the transaction's
/// accumulator. The engine performs the accumulation.
pub fn contribution(tx: &Transaction, fee: &FeeDefinition) -> Decimal {
    let auths = Decimal::from(auth_multiplier(&tx.card_entry_mode));
    fee.pct_rate * tx.order_amount + fee.tx_rate + fee.auth_rate * auths
}

/// Rounds a fee to display precision: 4 decimal places, half-to-even.
///
/// Display only; computed totals are never fed back through this.
pub fn format_fee(value: Decimal) -> Decimal {
    // round_dp is banker's rounding; rescale pads short scales to 4dp
    // so 0.25 renders as 0.2500.
    let mut rounded = value.round_dp(4);
    rounded.rescale(4);
    rounded
}
