use kereta_shared::{CategoryPrices, PassengerCategory, PassengerCounts};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceLine {
    pub category: PassengerCategory,
    pub unit_price: i64,
    pub count: u32,
    pub subtotal: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub lines: Vec<PriceLine>,
    pub total: i64,
}

/// Pure price computation: per-category subtotal and grand total from unit
/// prices and passenger counts. Currency formatting is a display concern
/// and lives elsewhere.
pub struct PriceCalculator;

impl PriceCalculator {
    pub fn compute(prices: &CategoryPrices, counts: &PassengerCounts) -> PriceBreakdown {
        let categories = [
            PassengerCategory::Adult,
            PassengerCategory::Elderly,
            PassengerCategory::Child,
        ];

        let lines: Vec<PriceLine> = categories
            .into_iter()
            .map(|category| {
                let unit_price = prices.for_category(category);
                let count = counts.for_category(category);
                PriceLine {
                    category,
                    unit_price,
                    count,
                    subtotal: unit_price * count as i64,
                }
            })
            .collect();

        let total = lines.iter().map(|l| l.subtotal).sum();
        PriceBreakdown { lines, total }
    }
}
