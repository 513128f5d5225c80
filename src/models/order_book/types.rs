use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Market,
    /// Limit orders carry their price on [`Order::price`].
    Limit,
}

/// Resting liquidity at one price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub price: f64,
    pub size: f64,
}

/// A user-submitted order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub side: Side,
    pub order_type: OrderType,
    /// Ignored for market orders.
    pub price: f64,
    pub size: f64,
}

impl Order {
    pub fn market(side: Side, size: f64) -> Self {
        Self {
            side,
            order_type: OrderType::Market,
            price: 0.0,
            size,
        }
    }

    pub fn limit(side: Side, price: f64, size: f64) -> Self {
        Self {
            side,
            order_type: OrderType::Limit,
            price,
            size,
        }
    }
}

/// A printed trade; `side` is the aggressor's side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Monotonically increasing within one book.
    pub id: u64,
    pub price: f64,
    pub size: f64,
    pub side: Side,
}
