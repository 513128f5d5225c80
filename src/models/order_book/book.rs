
use rand::Rng;

use super::types::{Level, Order, OrderType, Side, Trade};
use crate::model_params::OrderBookParams;
use crate::models::utils::clamp;

/// Initial level sizes are drawn from `BASE + U * SPREAD`.
const INITIAL_SIZE: (f64, f64) = (40.0, 120.0);
/// Replacement levels appended after a level is exhausted.
const REFILL_SIZE: (f64, f64) = (60.0, 120.0);
/// Background aggressor size `BASE + U * SPREAD`.
const FLOW_SIZE: (f64, f64) = (8.0, 22.0);
/// Per-tick size drift is `(U - DRIFT_BIAS) * DRIFT_SCALE`.
const DRIFT_BIAS: f64 = 0.45;
const DRIFT_SCALE: f64 = 18.0;
/// A background trade fires when a uniform draw exceeds this value.
const TRADE_THRESHOLD: f64 = 0.55;

fn draw_size<R: Rng + ?Sized>(rng: &mut R, (base, spread): (f64, f64)) -> f64 {
    base + rng.gen::<f64>() * spread
}

/// Eight-level toy book with a short trades tape.
#[derive(Debug, Clone)]
pub struct OrderBook {
    params: OrderBookParams,
    /// Descending by price
    bids: Vec<Level>,
    /// Ascending by price
    asks: Vec<Level>,
    /// Newest first
    trades: Vec<Trade>,
    next_trade_id: u64,
}

impl OrderBook {
    /// Seed a symmetric book around `params.initial_mid`.
    pub fn new<R: Rng + ?Sized>(params: OrderBookParams, rng: &mut R) -> Self {
        let mid = params.initial_mid;
        let tick = params.tick;
        let bids = (0..params.levels)
            .map(|i| Level {
                price: mid - tick * (i + 1) as f64,
                size: draw_size(rng, INITIAL_SIZE),
            })
            .collect();
        let asks = (0..params.levels)
            .map(|i| Level {
                price: mid + tick * (i + 1) as f64,
                size: draw_size(rng, INITIAL_SIZE),
            })
            .collect();

        Self {
            params,
            bids,
            asks,
            trades: Vec::new(),
            next_trade_id: 0,
        }
    }

    pub fn params(&self) -> &OrderBookParams {
        &self.params
    }

    pub fn bids(&self) -> &[Level] {
        &self.bids
    }

    pub fn asks(&self) -> &[Level] {
        &self.asks
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Best bid price, 0 when there are no bids.
    pub fn best_bid(&self) -> f64 {
        self.bids.first().map_or(0.0, |l| l.price)
    }

    /// Best ask price, 0 when there are no asks.
    pub fn best_ask(&self) -> f64 {
        self.asks.first().map_or(0.0, |l| l.price)
    }

    pub fn mid(&self) -> f64 {
        (self.best_bid() + self.best_ask()) / 2.0
    }

    pub fn spread(&self) -> f64 {
        self.best_ask() - self.best_bid()
    }

    /// Largest level size on either side, never below 1 so it can scale depth bars.
    pub fn max_depth(&self) -> f64 {
        self.bids
            .iter()
            .chain(&self.asks)
            .map(|l| l.size)
            .fold(1.0, f64::max)
    }

    /// Advance the background flow by one animation frame.
    ///
    /// Every level size drifts (clamped to the configured band); then, with
    /// probability 0.45, a random aggressor hits the opposite top of book.
    /// Returns the printed trade, if any.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Trade> {
        let (lo, hi) = (self.params.min_level_size, self.params.max_level_size);
        for level in self.bids.iter_mut().chain(self.asks.iter_mut()) {
            let drift = (rng.gen::<f64>() - DRIFT_BIAS) * DRIFT_SCALE;
            level.size = clamp(level.size + drift, lo, hi);
        }

        if rng.gen::<f64>() <= TRADE_THRESHOLD {
            return None;
        }
        let side = if rng.gen::<f64>() > 0.5 {
            Side::Buy
        } else {
            Side::Sell
        };
        let size = draw_size(rng, FLOW_SIZE);
        self.aggress(side, size, rng)
    }

    /// Submit a user order. Size is clamped to `[1, max_order_size]`.
    ///
    /// * Market orders consume the opposite top of book and print at its price.
    /// * Crossing limit orders print at the opposite best price; the book is left unchanged.
    /// * Other limit orders rest in the book, which is re-sorted and truncated to `levels`.
    ///
    /// Returns the printed trade, if any. Orders against an empty opposite side and
    /// limit orders with a non-finite price are ignored.
    pub fn submit<R: Rng + ?Sized>(&mut self, order: Order, rng: &mut R) -> Option<Trade> {
        let size = clamp(order.size, 1.0, self.params.max_order_size);

        match order.order_type {
            OrderType::Market => self.aggress(order.side, size, rng),
            OrderType::Limit => {
                if !order.price.is_finite() {
                    tracing::warn!(price = order.price, "ignoring limit order with invalid price");
                    return None;
                }
                let crosses = match order.side {
                    Side::Buy => !self.asks.is_empty() && order.price >= self.best_ask(),
                    Side::Sell => !self.bids.is_empty() && order.price <= self.best_bid(),
                };
                if crosses {
                    let price = match order.side {
                        Side::Buy => self.best_ask(),
                        Side::Sell => self.best_bid(),
                    };
                    return Some(self.record_trade(price, size, order.side));
                }
                self.rest(order.side, order.price, size);
                None
            }
        }
    }

    /// Hit the top of the side opposite to `side` and print the trade.
    fn aggress<R: Rng + ?Sized>(&mut self, side: Side, size: f64, rng: &mut R) -> Option<Trade> {
        let price = match side {
            Side::Buy => self.asks.first()?.price,
            Side::Sell => self.bids.first()?.price,
        };
        self.consume_top(side.opposite(), size, rng);
        Some(self.record_trade(price, size, side))
    }

    /// Reduce the top level of `book_side`; an exhausted level is replaced one
    /// tick beyond the far end of that side.
    fn consume_top<R: Rng + ?Sized>(&mut self, book_side: Side, size: f64, rng: &mut R) {
        let tick = self.params.tick;
        let threshold = self.params.refill_threshold;
        let (levels, step) = match book_side {
            Side::Buy => (&mut self.bids, -tick),
            Side::Sell => (&mut self.asks, tick),
        };
        let Some(top) = levels.first_mut() else {
            return;
        };
        top.size -= size;
        if top.size > threshold {
            return;
        }

        let removed = levels.remove(0);
        let last = levels.last().map_or(removed.price, |l| l.price);
        levels.push(Level {
            price: last + step,
            size: draw_size(rng, REFILL_SIZE),
        });
    }

    fn rest(&mut self, side: Side, price: f64, size: f64) {
        let max_levels = self.params.levels;
        match side {
            Side::Buy => {
                self.bids.push(Level { price, size });
                self.bids.sort_by(|a, b| b.price.total_cmp(&a.price));
                self.bids.truncate(max_levels);
            }
            Side::Sell => {
                self.asks.push(Level { price, size });
                self.asks.sort_by(|a, b| a.price.total_cmp(&b.price));
                self.asks.truncate(max_levels);
            }
        }
    }

    fn record_trade(&mut self, price: f64, size: f64, side: Side) -> Trade {
        let trade = Trade {
            id: self.next_trade_id,
            price,
            size,
            side,
        };
        self.next_trade_id += 1;
        self.trades.insert(0, trade);
        self.trades.truncate(self.params.max_trades);
        tracing::debug!(id = trade.id, price, size, side = ?side, "trade printed");
        trade
    }
}
