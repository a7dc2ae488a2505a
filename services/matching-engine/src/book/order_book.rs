//! Fixed-size order book
//!
//! One `InstrumentBook` per instrument slot `0..N`. The slot count is fixed
//! at construction; submissions outside it are rejected.

use rust_decimal::Decimal;
use types::errors::OrderError;
use types::ids::InstrumentId;
use types::order::{Order, Side};

use super::instrument_book::InstrumentBook;

/// Validate a raw submission against a book of `limit` instruments
///
/// Checks instrument range, then quantity, then price. Returns the slot
/// index and the order ready to enqueue.
pub fn validate_submission(
    instrument: InstrumentId,
    limit: usize,
    quantity: i64,
    price: Decimal,
) -> Result<(usize, Order), OrderError> {
    let index = instrument.checked_index(limit)?;
    let order = Order::try_new(quantity, price)?;
    Ok((index, order))
}

/// All instrument books of the venue
#[derive(Debug, Clone)]
pub struct OrderBook {
    instruments: Vec<InstrumentBook>,
}

impl OrderBook {
    /// Create a book with `instrument_count` empty slots
    pub fn new(instrument_count: usize) -> Self {
        Self {
            instruments: vec![InstrumentBook::new(); instrument_count],
        }
    }

    /// Append a new order to the tail of its side's queue
    ///
    /// Nothing is modified when validation fails.
    pub fn submit(
        &mut self,
        side: Side,
        instrument: InstrumentId,
        quantity: i64,
        price: Decimal,
    ) -> Result<(), OrderError> {
        let limit = self.instruments.len();
        let (index, order) = validate_submission(instrument, limit, quantity, price)?;
        self.instruments[index].insert(side, order);
        Ok(())
    }

    pub fn instrument(&self, instrument: InstrumentId) -> Result<&InstrumentBook, OrderError> {
        let index = instrument.checked_index(self.instruments.len())?;
        Ok(&self.instruments[index])
    }

    /// Iterate instruments in increasing index order
    pub fn iter(&self) -> impl Iterator<Item = (InstrumentId, &InstrumentBook)> {
        self.instruments
            .iter()
            .enumerate()
            .map(|(index, book)| (InstrumentId::new(index), book))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (InstrumentId, &mut InstrumentBook)> {
        self.instruments
            .iter_mut()
            .enumerate()
            .map(|(index, book)| (InstrumentId::new(index), book))
    }

    /// Number of instrument slots
    pub fn instrument_count(&self) -> usize {
        self.instruments.len()
    }

    /// Total open orders across all instruments
    pub fn open_order_count(&self) -> usize {
        self.instruments.iter().map(InstrumentBook::order_count).sum()
    }
}
