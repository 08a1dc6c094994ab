use kereta_shared::{CarriageSeats, Seat, SeatStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A seat the traveler has picked, with the display label preserved from
/// the inventory snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedSeat {
    pub seat_id: Uuid,
    pub label: String,
}

/// What a toggle did. The selection cap is not an error: views use the
/// outcome to disable affordances instead of silently swallowing the tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Seat was booked at fetch time, or is not part of the snapshot.
    SeatUnavailable,
    /// Selection already holds one seat per passenger.
    SelectionFull,
}

/// Stateful seat picking against a fetched inventory snapshot.
///
/// The snapshot is authoritative only at fetch time; a seat may be taken by
/// another buyer before submission. That race is not re-validated here: the
/// ledger is the final arbiter and rejects colliding bookings.
pub struct SeatSelectionController {
    required_count: usize,
    selected: Vec<SelectedSeat>,
    snapshot: HashMap<Uuid, Seat>,
}

impl SeatSelectionController {
    pub fn new(required_count: usize, carriages: &[CarriageSeats]) -> Self {
        let snapshot = carriages
            .iter()
            .flat_map(|c| c.seats.iter().cloned())
            .map(|s| (s.id, s))
            .collect();
        Self {
            required_count,
            selected: Vec::new(),
            snapshot,
        }
    }

    pub fn required_count(&self) -> usize {
        self.required_count
    }

    /// Selection order is preserved; it maps one-to-one onto the passenger
    /// list at submission time.
    pub fn selected(&self) -> &[SelectedSeat] {
        &self.selected
    }

    pub fn selected_ids(&self) -> Vec<Uuid> {
        self.selected.iter().map(|s| s.seat_id).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.selected.len() == self.required_count
    }

    pub fn toggle(&mut self, seat_id: Uuid) -> ToggleOutcome {
        if let Some(pos) = self.selected.iter().position(|s| s.seat_id == seat_id) {
            self.selected.remove(pos);
            return ToggleOutcome::Removed;
        }

        let seat = match self.snapshot.get(&seat_id) {
            Some(seat) if seat.status != SeatStatus::Booked => seat,
            _ => return ToggleOutcome::SeatUnavailable,
        };

        if self.selected.len() >= self.required_count {
            return ToggleOutcome::SelectionFull;
        }

        self.selected.push(SelectedSeat {
            seat_id,
            label: seat.label(),
        });
        ToggleOutcome::Added
    }

    /// Restores a previously made selection, resolving each id against the
    /// current snapshot. Idempotent: re-invoking with the same ids yields
    /// the same selected set.
    pub fn hydrate(&mut self, preselected: &[Uuid]) {
        for &seat_id in preselected {
            if self.selected.iter().any(|s| s.seat_id == seat_id) {
                continue;
            }
            if self.selected.len() >= self.required_count {
                break;
            }
            if let Some(seat) = self.snapshot.get(&seat_id) {
                if seat.status != SeatStatus::Booked {
                    self.selected.push(SelectedSeat {
                        seat_id,
                        label: seat.label(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carriage(seats: Vec<Seat>) -> Vec<CarriageSeats> {
        vec![CarriageSeats { class: "ekonomi".to_string(), seats }]
    }

    fn seat(row: i32, column: char, status: SeatStatus) -> Seat {
        Seat { id: Uuid::new_v4(), row, column, status }
    }

    #[test]
    fn test_toggle_add_remove() {
        let s1 = seat(1, 'A', SeatStatus::Available);
        let id = s1.id;
        let mut ctrl = SeatSelectionController::new(2, &carriage(vec![s1]));

        assert_eq!(ctrl.toggle(id), ToggleOutcome::Added);
        assert_eq!(ctrl.selected()[0].label, "1A");
        assert_eq!(ctrl.toggle(id), ToggleOutcome::Removed);
        assert!(ctrl.selected().is_empty());
    }

    #[test]
    fn test_booked_seat_is_never_added() {
        let s1 = seat(1, 'A', SeatStatus::Booked);
        let id = s1.id;
        let mut ctrl = SeatSelectionController::new(2, &carriage(vec![s1]));

        assert_eq!(ctrl.toggle(id), ToggleOutcome::SeatUnavailable);
        assert!(ctrl.selected().is_empty());
    }

    #[test]
    fn test_unknown_seat_is_a_noop() {
        let mut ctrl = SeatSelectionController::new(2, &carriage(vec![]));
        assert_eq!(ctrl.toggle(Uuid::new_v4()), ToggleOutcome::SeatUnavailable);
    }

    #[test]
    fn test_selection_never_exceeds_required_count() {
        let seats: Vec<Seat> = ('A'..='D')
            .map(|c| seat(1, c, SeatStatus::Available))
            .collect();
        let ids: Vec<Uuid> = seats.iter().map(|s| s.id).collect();
        let mut ctrl = SeatSelectionController::new(2, &carriage(seats));

        assert_eq!(ctrl.toggle(ids[0]), ToggleOutcome::Added);
        assert_eq!(ctrl.toggle(ids[1]), ToggleOutcome::Added);
        assert!(ctrl.is_complete());
        assert_eq!(ctrl.toggle(ids[2]), ToggleOutcome::SelectionFull);
        assert_eq!(ctrl.selected().len(), 2);

        // Removing re-opens a slot.
        assert_eq!(ctrl.toggle(ids[0]), ToggleOutcome::Removed);
        assert!(!ctrl.is_complete());
        assert_eq!(ctrl.toggle(ids[3]), ToggleOutcome::Added);
        assert!(ctrl.is_complete());
    }

    #[test]
    fn test_hydrate_is_idempotent() {
        let s1 = seat(3, 'B', SeatStatus::Available);
        let s2 = seat(3, 'C', SeatStatus::Available);
        let ids = vec![s1.id, s2.id];
        let mut ctrl = SeatSelectionController::new(2, &carriage(vec![s1, s2]));

        ctrl.hydrate(&ids);
        let first = ctrl.selected().to_vec();
        ctrl.hydrate(&ids);
        assert_eq!(ctrl.selected(), first.as_slice());
        assert_eq!(ctrl.selected()[0].label, "3B");
    }

    #[test]
    fn test_hydrate_skips_booked_and_unknown() {
        let s1 = seat(1, 'A', SeatStatus::Available);
        let s2 = seat(1, 'B', SeatStatus::Booked);
        let known = s1.id;
        let booked = s2.id;
        let mut ctrl = SeatSelectionController::new(3, &carriage(vec![s1, s2]));

        ctrl.hydrate(&[known, booked, Uuid::new_v4()]);
        assert_eq!(ctrl.selected_ids(), vec![known]);
    }
}
