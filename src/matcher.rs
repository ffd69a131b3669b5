use crate::ruleset::MatchCriteria;
use crate::transaction::Transaction;
use rust_decimal::Decimal;

/// Returns true on the first criteria entry (in list order) that the
/// transaction fully satisfies. An empty list never matches.
pub fn matches(tx: &Transaction, criteria: &[MatchCriteria]) -> bool {
    criteria.iter().any(|c| c.is_satisfied_by(tx))
}

impl MatchCriteria {
    /// Every present field must agree with the transaction; absent
    /// fields impose no constraint.
    pub fn is_satisfied_by(&self, tx: &Transaction) -> bool {
        eq_opt(&tx.avs, self.avs.as_ref())
            && eq_opt(&tx.cvc, self.cvc.as_ref())
            && eq_opt(&tx.debit, self.debit.as_ref())
            && eq_opt(&tx.refund, self.refund.as_ref())
            && eq_opt(&tx.opt_blue, self.opt_blue.as_ref())
            && eq_opt(&tx.international, self.international.as_ref())
            && eq_opt(&tx.prepaid, self.prepaid.as_ref())
            && eq_opt(tx.card_entry_mode.as_str(), self.card_entry_mode.as_deref())
            && eq_opt(tx.card_type.as_str(), self.card_type.as_deref())
            && ge_opt(tx.order_amount, self.min_tx_amount)
            && le_opt(tx.order_amount, self.max_tx_amount)
    }
}

fn eq_opt<T: PartialEq + ?Sized>(actual: &T, wanted: Option<&T>) -> bool {
    wanted.is_none_or(|w| w == actual)
}

fn ge_opt(actual: Decimal, min: Option<Decimal>) -> bool {
    min.is_none_or(|m| actual >= m)
}

fn le_opt(actual: Decimal, max: Option<Decimal>) -> bool {
    max.is_none_or(|m| actual <= m)
}
