use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Broadcast to dependent views (booking lists, statistics) so they refetch
/// after a workflow changes ledger state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub schedule_id: Uuid,
    pub ticket_code: String,
    pub confirmed_at: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingCancelledEvent {
    pub booking_id: Uuid,
    pub cancelled_at: i64,
}
