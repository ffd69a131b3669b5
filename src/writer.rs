use crate::calculator::format_fee;
use crate::error::Result;
use crate::transaction::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct FeeRecord<'a> {
    card_type: &'a str,
    card_entry_mode: &'a str,
    order_amount: Decimal,
    nw_fee: Decimal,
}

/// Writes one CSV row per assessed transaction, with the fee rendered
/// at display precision (4 decimal places, half-to-even).
pub struct FeeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> FeeWriter<W> {
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_assessment(&mut self, tx: &Transaction) -> Result<()> {
        self.writer.serialize(FeeRecord {
            card_type: &tx.card_type,
            card_entry_mode: &tx.card_entry_mode,
            order_amount: tx.order_amount,
            nw_fee: format_fee(tx.nw_fee),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
