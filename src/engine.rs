use crate::calculator;
use crate::matcher;
use crate::ruleset::Ruleset;
use crate::transaction::Transaction;
use rust_decimal::Decimal;

/// Evaluates every configured fee definition against one transaction.
///
/// `FeeEngine` holds the ruleset immutably and may be shared read-only
/// across callers; each `assess` call assumes exclusive ownership of
/// its transaction.
pub struct FeeEngine {
    ruleset: Ruleset,
}

impl FeeEngine {
    pub fn new(ruleset: Ruleset) -> Self {
        Self { ruleset }
    }

    /// Runs one evaluation pass over all fee definitions in config
    /// order, adds the matched contributions onto the transaction's
    /// fee accumulator, and returns this pass's total.
    ///
    /// Within a single definition only the first matching criteria
    /// entry triggers its rates; across definitions contributions are
    /// purely additive. A definition with no matching criteria
    /// contributes zero.
    pub fn assess(&self, tx: &mut Transaction) -> Decimal {
        let mut pass_total = Decimal::ZERO;

        for fee in &self.ruleset.fees {
            if matcher::matches(tx, &fee.rules) {
                let amount = calculator::contribution(tx, fee);
                tracing::debug!(key = %fee.key, %amount, "fee definition applied");
                pass_total += amount;
            } else {
                tracing::trace!(key = %fee.key, "fee definition did not match");
            }
        }

        tx.nw_fee += pass_total;
        pass_total
    }
}
