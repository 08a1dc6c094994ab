use kereta_shared::PassengerCounts;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The traveler's purchase intent, fixed at search time.
///
/// Constructed once and threaded explicitly through seat selection and
/// submission, rather than being re-derived from page parameters at each
/// step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingIntent {
    schedule_id: Uuid,
    counts: PassengerCounts,
}

impl BookingIntent {
    pub fn new(schedule_id: Uuid, counts: PassengerCounts) -> Self {
        Self { schedule_id, counts }
    }

    pub fn schedule_id(&self) -> Uuid {
        self.schedule_id
    }

    pub fn counts(&self) -> PassengerCounts {
        self.counts
    }

    /// One seat per passenger, across all categories.
    pub fn required_seats(&self) -> usize {
        self.counts.total() as usize
    }
}
