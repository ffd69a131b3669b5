use crate::error::FeeError;
use crate::transaction::Transaction;
use std::io::Read;

pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn transactions(self) -> impl Iterator<Item = Result<Transaction, FeeError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FeeError::from))
    }
}
