use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side as submitted by the client.
///
/// Short-sale variants rest on the offer side of the book and match exactly
/// like a regular `Sell`; `SellShortExempt` additionally requires an
/// exemption reason on the placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
    SellShort,
    SellShortExempt,
}

impl Side {
    /// Book side this order rests on.
    pub fn book_side(&self) -> BookSide {
        match self {
            Side::Buy => BookSide::Bid,
            Side::Sell | Side::SellShort | Side::SellShortExempt => BookSide::Offer,
        }
    }

    /// Book side this order takes liquidity from.
    pub fn opposite_book_side(&self) -> BookSide {
        self.book_side().opposite()
    }

    pub fn is_selling(&self) -> bool {
        matches!(self, Side::Sell | Side::SellShort | Side::SellShortExempt)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
            Side::SellShort => write!(f, "SellShort"),
            Side::SellShortExempt => write!(f, "SellShortExempt"),
        }
    }
}

/// One of the two sides of an order book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BookSide {
    Bid,
    Offer,
}

impl BookSide {
    pub fn opposite(&self) -> BookSide {
        match self {
            BookSide::Bid => BookSide::Offer,
            BookSide::Offer => BookSide::Bid,
        }
    }
}

impl fmt::Display for BookSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookSide::Bid => write!(f, "Bid"),
            BookSide::Offer => write!(f, "Offer"),
        }
    }
}
