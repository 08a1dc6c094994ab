use crate::filters::SearchFilters;
use chrono::NaiveDate;
use kereta_shared::Schedule;
use serde::{Deserialize, Serialize};

/// Route and travel-date criteria entered on the search form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

/// Filters and orders the schedule candidate set fetched from the inventory
/// service. Pure over its inputs; holds no state.
pub struct ScheduleSearchEngine;

impl ScheduleSearchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Route and date matching: case-insensitive substring containment on
    /// origin/destination, exact equality on the departure date token.
    ///
    /// The result is sorted by ascending lexicographic comparison of the
    /// raw departure string, which orders correctly because the format is
    /// fixed-width, zero-padded and ISO-ordered.
    pub fn search(&self, schedules: Vec<Schedule>, query: &ScheduleQuery) -> Vec<Schedule> {
        let origin = query.origin.to_lowercase();
        let destination = query.destination.to_lowercase();
        let date = query.date.format("%Y-%m-%d").to_string();

        let mut matched: Vec<Schedule> = schedules
            .into_iter()
            .filter(|s| {
                s.origin.to_lowercase().contains(&origin)
                    && s.destination.to_lowercase().contains(&destination)
                    && s.departure_date_token() == date
            })
            .collect();

        matched.sort_by(|a, b| a.departure_at.cmp(&b.departure_at));

        tracing::debug!(
            "Schedule search {} -> {} on {}: {} match(es)",
            query.origin,
            query.destination,
            date,
            matched.len()
        );
        matched
    }

    /// Applies secondary filters to a route+date candidate set. An empty
    /// result is a valid terminal state, not an error.
    pub fn apply_filters(&self, candidates: Vec<Schedule>, filters: &SearchFilters) -> Vec<Schedule> {
        candidates.into_iter().filter(|s| filters.matches(s)).collect()
    }
}

impl Default for ScheduleSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::DayPart;
    use kereta_shared::{CategoryPrices, ScheduleStatus};
    use uuid::Uuid;

    fn schedule(origin: &str, destination: &str, departure: &str, adult_price: i64) -> Schedule {
        Schedule {
            id: Uuid::new_v4(),
            train_name: "Argo Parahyangan".to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            carriage_class: "ekonomi".to_string(),
            departure_at: departure.to_string(),
            arrival_at: departure.to_string(),
            prices: CategoryPrices { adult: adult_price, elderly: adult_price / 2, child: adult_price / 2 },
            total_seats: 80,
            available_seats: 80,
            sold_seats: 0,
            status: ScheduleStatus::Active,
        }
    }

    fn query(origin: &str, destination: &str, date: &str) -> ScheduleQuery {
        ScheduleQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date: date.parse().unwrap(),
        }
    }

    #[test]
    fn test_route_match_is_case_insensitive_substring() {
        let engine = ScheduleSearchEngine::new();
        let schedules = vec![
            schedule("Jakarta Gambir", "Bandung", "2025-03-14T08:00:00", 150_000),
            schedule("Surabaya Gubeng", "Malang", "2025-03-14T08:00:00", 90_000),
        ];

        let results = engine.search(schedules, &query("jakarta", "BAND", "2025-03-14"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].origin, "Jakarta Gambir");
    }

    #[test]
    fn test_date_match_normalizes_space_separated_form() {
        let engine = ScheduleSearchEngine::new();
        let schedules = vec![
            schedule("Jakarta", "Bandung", "2025-03-14 09:30:00", 150_000),
            schedule("Jakarta", "Bandung", "2025-03-15T09:30:00", 150_000),
        ];

        let results = engine.search(schedules, &query("jakarta", "bandung", "2025-03-14"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].departure_at, "2025-03-14 09:30:00");
    }

    #[test]
    fn test_sort_ascending_on_raw_departure_string() {
        let engine = ScheduleSearchEngine::new();
        let schedules = vec![
            schedule("Jakarta", "Bandung", "2025-03-14T19:00:00", 150_000),
            schedule("Jakarta", "Bandung", "2025-03-14T06:15:00", 150_000),
            schedule("Jakarta", "Bandung", "2025-03-14T12:45:00", 150_000),
        ];

        let results = engine.search(schedules, &query("jakarta", "bandung", "2025-03-14"));
        let departures: Vec<&str> = results.iter().map(|s| s.departure_at.as_str()).collect();
        assert_eq!(
            departures,
            vec!["2025-03-14T06:15:00", "2025-03-14T12:45:00", "2025-03-14T19:00:00"]
        );
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let engine = ScheduleSearchEngine::new();
        let schedules = vec![schedule("Jakarta", "Bandung", "2025-03-14T08:00:00", 150_000)];
        let results = engine.search(schedules, &query("yogyakarta", "solo", "2025-03-14"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_day_part_filter() {
        let engine = ScheduleSearchEngine::new();
        let candidates = vec![
            schedule("Jakarta", "Bandung", "2025-03-14T11:59:00", 150_000),
            schedule("Jakarta", "Bandung", "2025-03-14T12:00:00", 150_000),
            schedule("Jakarta", "Bandung", "2025-03-14T23:00:00", 150_000),
        ];

        let mut filters = SearchFilters::default();
        filters.day_parts.insert(DayPart::Siang);

        let results = engine.apply_filters(candidates, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].departure_at, "2025-03-14T12:00:00");
    }

    #[test]
    fn test_price_bounds_are_inclusive_on_adult_price() {
        let engine = ScheduleSearchEngine::new();
        let candidates = vec![
            schedule("Jakarta", "Bandung", "2025-03-14T08:00:00", 100_000),
            schedule("Jakarta", "Bandung", "2025-03-14T09:00:00", 150_000),
            schedule("Jakarta", "Bandung", "2025-03-14T10:00:00", 200_000),
        ];

        let filters = SearchFilters {
            price_min: Some(100_000),
            price_max: Some(150_000),
            ..SearchFilters::default()
        };

        let results = engine.apply_filters(candidates, &filters);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_class_filter_membership() {
        let engine = ScheduleSearchEngine::new();
        let mut premium = schedule("Jakarta", "Bandung", "2025-03-14T08:00:00", 350_000);
        premium.carriage_class = "eksekutif".to_string();
        let candidates = vec![
            premium,
            schedule("Jakarta", "Bandung", "2025-03-14T09:00:00", 150_000),
        ];

        let mut filters = SearchFilters::default();
        filters.classes.insert("Eksekutif".to_string());

        let results = engine.apply_filters(candidates, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].carriage_class, "eksekutif");
    }
}
