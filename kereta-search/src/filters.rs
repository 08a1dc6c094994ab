use kereta_shared::Schedule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Time-of-day bucket for departure filtering. The hour is read at face
/// value from the timestamp text, with no timezone conversion; collaborator
/// timestamps are assumed to already be in the display timezone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayPart {
    Pagi,
    Siang,
    Malam,
}

impl DayPart {
    pub fn from_hour(hour: u32) -> Option<DayPart> {
        match hour {
            0..=11 => Some(DayPart::Pagi),
            12..=17 => Some(DayPart::Siang),
            18..=23 => Some(DayPart::Malam),
            _ => None,
        }
    }
}

/// Secondary filters applied to a route+date candidate set. Empty sets and
/// unset bounds mean "no restriction".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub classes: HashSet<String>,
    pub day_parts: HashSet<DayPart>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
}

impl SearchFilters {
    pub fn matches(&self, schedule: &Schedule) -> bool {
        if !self.classes.is_empty() {
            let class = schedule.carriage_class.to_lowercase();
            if !self.classes.iter().any(|c| c.to_lowercase() == class) {
                return false;
            }
        }

        if !self.day_parts.is_empty() {
            let part = schedule.departure_hour().and_then(DayPart::from_hour);
            match part {
                Some(part) if self.day_parts.contains(&part) => {}
                _ => return false,
            }
        }

        // Price bounds are inclusive and apply to the adult unit price.
        if let Some(min) = self.price_min {
            if schedule.prices.adult < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if schedule.prices.adult > max {
                return false;
            }
        }

        true
    }
}
