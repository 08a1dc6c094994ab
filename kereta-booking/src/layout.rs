use kereta_shared::Seat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column letters for one carriage, split into the groups left and right of
/// the aisle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnPlan {
    pub left: Vec<char>,
    pub right: Vec<char>,
}

impl ColumnPlan {
    /// Classification depends only on the carriage class, never on seat
    /// data. Premium tiers seat 2+2; anything else, including an unknown
    /// class, gets the standard 3+3 plan.
    pub fn for_class(class: &str) -> ColumnPlan {
        match class.to_lowercase().as_str() {
            "eksekutif" | "bisnis" => ColumnPlan {
                left: vec!['A', 'B'],
                right: vec!['C', 'D'],
            },
            _ => ColumnPlan {
                left: vec!['A', 'B', 'C'],
                right: vec!['D', 'E', 'F'],
            },
        }
    }

    pub fn columns(&self) -> Vec<char> {
        self.left.iter().chain(self.right.iter()).copied().collect()
    }
}

/// Seats of one physical row, already split around the aisle and sorted by
/// column ascending on each side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatRow {
    pub row: i32,
    pub left: Vec<Seat>,
    pub right: Vec<Seat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMap {
    pub plan: ColumnPlan,
    pub rows: Vec<SeatRow>,
}

/// Deterministic carriage layout derivation for rendering.
pub struct SeatLayoutGenerator;

impl SeatLayoutGenerator {
    /// Groups seats by row (ascending) and splits each row into the left
    /// and right column group of the class's plan. An empty seat list
    /// yields zero rows; no placeholders are invented.
    pub fn generate(class: &str, seats: &[Seat]) -> SeatMap {
        let plan = ColumnPlan::for_class(class);

        let mut by_row: BTreeMap<i32, Vec<Seat>> = BTreeMap::new();
        for seat in seats {
            by_row.entry(seat.row).or_default().push(seat.clone());
        }

        let rows = by_row
            .into_iter()
            .map(|(row, mut row_seats)| {
                row_seats.sort_by_key(|s| s.column);
                let (left, right): (Vec<Seat>, Vec<Seat>) = row_seats
                    .into_iter()
                    .partition(|s| plan.left.contains(&s.column));
                SeatRow { row, left, right }
            })
            .collect();

        SeatMap { plan, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kereta_shared::SeatStatus;
    use uuid::Uuid;

    fn seat(row: i32, column: char) -> Seat {
        Seat {
            id: Uuid::new_v4(),
            row,
            column,
            status: SeatStatus::Available,
        }
    }

    #[test]
    fn test_eksekutif_plan_is_four_columns_two_by_two() {
        let plan = ColumnPlan::for_class("eksekutif");
        assert_eq!(plan.left, vec!['A', 'B']);
        assert_eq!(plan.right, vec!['C', 'D']);
        assert_eq!(plan.columns().len(), 4);
    }

    #[test]
    fn test_ekonomi_plan_is_six_columns_three_by_three() {
        let plan = ColumnPlan::for_class("ekonomi");
        assert_eq!(plan.left, vec!['A', 'B', 'C']);
        assert_eq!(plan.right, vec!['D', 'E', 'F']);
    }

    #[test]
    fn test_unknown_class_defaults_to_standard_plan() {
        assert_eq!(ColumnPlan::for_class("panoramic"), ColumnPlan::for_class("ekonomi"));
        assert_eq!(ColumnPlan::for_class(""), ColumnPlan::for_class("ekonomi"));
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(ColumnPlan::for_class("Eksekutif").columns().len(), 4);
        assert_eq!(ColumnPlan::for_class("BISNIS").columns().len(), 4);
    }

    #[test]
    fn test_rows_ascending_sides_sorted() {
        let seats = vec![
            seat(2, 'D'),
            seat(1, 'B'),
            seat(1, 'A'),
            seat(2, 'C'),
            seat(1, 'C'),
        ];
        let map = SeatLayoutGenerator::generate("eksekutif", &seats);

        assert_eq!(map.rows.len(), 2);
        assert_eq!(map.rows[0].row, 1);
        let left: Vec<char> = map.rows[0].left.iter().map(|s| s.column).collect();
        assert_eq!(left, vec!['A', 'B']);
        let right: Vec<char> = map.rows[0].right.iter().map(|s| s.column).collect();
        assert_eq!(right, vec!['C']);
        assert_eq!(map.rows[1].row, 2);
    }

    #[test]
    fn test_empty_seat_list_renders_zero_rows() {
        let map = SeatLayoutGenerator::generate("ekonomi", &[]);
        assert!(map.rows.is_empty());
    }
}
