use chrono::Utc;
use kereta_core::collaborator::InventoryService;
use kereta_core::deadline::with_deadline;
use kereta_core::{ClientError, ClientResult};
use kereta_shared::events::BookingCancelledEvent;
use kereta_shared::{Booking, BookingStatus};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::info;

/// Reflects a cancellation into the ledger and the local booking mirror.
///
/// Only reflects status: the occupied seats are released by the ledger and
/// become observable on the next seat/schedule fetch.
pub struct CancellationWorkflow {
    inventory: Arc<dyn InventoryService>,
    request_timeout: Duration,
    events: broadcast::Sender<BookingCancelledEvent>,
}

impl CancellationWorkflow {
    pub fn new(inventory: Arc<dyn InventoryService>, request_timeout: Duration) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            inventory,
            request_timeout,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BookingCancelledEvent> {
        self.events.subscribe()
    }

    /// Cancels the booking. Bookings that are not `Pending` or `Booked`
    /// are rejected client-side without calling the ledger.
    pub async fn cancel(&self, booking: &mut Booking) -> ClientResult<()> {
        match booking.status {
            BookingStatus::Pending | BookingStatus::Booked => {}
            ref status => {
                return Err(ClientError::State(format!(
                    "booking {} cannot be cancelled from {:?} status",
                    booking.id, status
                )));
            }
        }

        with_deadline(self.request_timeout, self.inventory.cancel_booking(booking.id)).await?;

        booking.mark_cancelled();
        info!("Booking cancelled: {}", booking.id);
        let _ = self.events.send(BookingCancelledEvent {
            booking_id: booking.id,
            cancelled_at: Utc::now().timestamp(),
        });

        Ok(())
    }
}
