use crate::session::ProfilePayload;
use crate::ClientResult;
use async_trait::async_trait;
use kereta_shared::{
    BookingStatus, CarriageSeats, Masked, PassengerCategory, Receipt, Schedule,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request payload for `create-booking`. Assembled once by the submission
/// workflow after all local preconditions pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPayload {
    pub buyer_id: Uuid,
    pub schedule_id: Uuid,
    pub payment_method: String,
    pub passengers: Vec<PassengerPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerPayload {
    pub nik: Masked<String>,
    pub name: String,
    pub category: PassengerCategory,
    pub seat_id: Uuid,
}

/// Response of `create-booking`: the ticket code plus the ledger's echo of
/// the priced breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub ticket_code: String,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationAck {
    pub status: BookingStatus,
}

/// The remote inventory/ledger service this subsystem is a client of.
///
/// The service owns seat inventory, booking storage, and conflict
/// resolution; it is the single source of truth. The exact wire format is
/// its concern; implementations adapt whatever transport is in use.
#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn schedule_detail(&self, schedule_id: Uuid) -> ClientResult<Schedule>;

    async fn available_seats(&self, schedule_id: Uuid) -> ClientResult<Vec<CarriageSeats>>;

    /// All schedules currently in `ACTIVE` status.
    async fn active_schedules(&self) -> ClientResult<Vec<Schedule>>;

    async fn create_booking(&self, payload: &BookingPayload) -> ClientResult<BookingConfirmation>;

    async fn receipt(&self, ticket_code: &str) -> ClientResult<Receipt>;

    async fn cancel_booking(&self, booking_id: Uuid) -> ClientResult<CancellationAck>;

    async fn current_profile(&self) -> ClientResult<ProfilePayload>;
}
