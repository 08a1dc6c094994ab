use crate::intent::BookingIntent;
use chrono::Utc;
use kereta_core::collaborator::{BookingPayload, InventoryService, PassengerPayload};
use kereta_core::deadline::with_deadline;
use kereta_core::session::Session;
use kereta_core::ClientError;
use kereta_shared::events::BookingConfirmedEvent;
use kereta_shared::{BookedPassenger, Booking, BookingStatus, Passenger, Receipt};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::info;
use uuid::Uuid;

const NIK_LENGTH: usize = 16;
const MIN_NAME_LENGTH: usize = 3;

/// Discriminated result handed back to presentation code.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Ledger accepted the booking; the receipt was fetched with the
    /// returned ticket code and the local mirror reflects it.
    Booked { booking: Booking, receipt: Receipt },
    /// A local precondition failed. No network call was made.
    Invalid(Vec<String>),
    /// The ledger rejected the request or the call never completed. No
    /// partial booking state is retained; re-invocation starts from
    /// scratch.
    Failed(ClientError),
}

/// Orchestrates validation, submission and receipt retrieval.
///
/// Steps are strictly sequential: the receipt fetch depends on the ticket
/// code returned by booking creation. Nothing is retried automatically;
/// seat collisions are detected only by the ledger rejecting the request.
pub struct BookingSubmissionWorkflow {
    inventory: Arc<dyn InventoryService>,
    request_timeout: Duration,
    payment_method: String,
    events: broadcast::Sender<BookingConfirmedEvent>,
}

impl BookingSubmissionWorkflow {
    pub fn new(
        inventory: Arc<dyn InventoryService>,
        request_timeout: Duration,
        payment_method: String,
    ) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            inventory,
            request_timeout,
            payment_method,
            events,
        }
    }

    /// Dependent views (booking lists, statistics) subscribe here to learn
    /// about confirmed bookings.
    pub fn subscribe(&self) -> broadcast::Receiver<BookingConfirmedEvent> {
        self.events.subscribe()
    }

    /// All local precondition failures, empty when submission may proceed.
    pub fn validate(
        &self,
        session: &Session,
        intent: &BookingIntent,
        passengers: &[Passenger],
    ) -> Vec<String> {
        let mut reasons = Vec::new();

        if session.buyer_id().is_none() {
            reasons.push("signed-in profile is not a passenger account".to_string());
        }

        if passengers.len() != intent.required_seats() {
            reasons.push(format!(
                "passenger list has {} entries but {} seats are required",
                passengers.len(),
                intent.required_seats()
            ));
        }

        let mut seen_seats = HashSet::new();
        for (idx, passenger) in passengers.iter().enumerate() {
            let who = format!("passenger {}", idx + 1);

            if passenger.nik.len() != NIK_LENGTH
                || !passenger.nik.chars().all(|c| c.is_ascii_digit())
            {
                reasons.push(format!("{}: NIK must be exactly 16 digits", who));
            }
            if passenger.name.trim().chars().count() < MIN_NAME_LENGTH {
                reasons.push(format!("{}: name must be at least 3 characters", who));
            }
            match passenger.seat_id {
                None => reasons.push(format!("{}: no seat assigned", who)),
                Some(seat_id) => {
                    if !seen_seats.insert(seat_id) {
                        reasons.push(format!("{}: seat already assigned to another passenger", who));
                    }
                }
            }
        }

        reasons
    }

    pub fn can_submit(
        &self,
        session: &Session,
        intent: &BookingIntent,
        passengers: &[Passenger],
    ) -> bool {
        self.validate(session, intent, passengers).is_empty()
    }

    pub async fn submit(
        &self,
        session: &Session,
        intent: &BookingIntent,
        passengers: &[Passenger],
    ) -> SubmissionOutcome {
        let reasons = self.validate(session, intent, passengers);
        if !reasons.is_empty() {
            return SubmissionOutcome::Invalid(reasons);
        }

        // validate() guarantees a passenger profile and assigned seats.
        let buyer_id = match session.buyer_id() {
            Some(id) => id,
            None => return SubmissionOutcome::Invalid(vec![
                "signed-in profile is not a passenger account".to_string(),
            ]),
        };

        let payload = self.assemble_payload(buyer_id, intent, passengers);

        let confirmation = match with_deadline(
            self.request_timeout,
            self.inventory.create_booking(&payload),
        )
        .await
        {
            Ok(confirmation) => confirmation,
            Err(err) => return SubmissionOutcome::Failed(err),
        };

        let receipt = match with_deadline(
            self.request_timeout,
            self.inventory.receipt(&confirmation.ticket_code),
        )
        .await
        {
            Ok(receipt) => receipt,
            Err(err) => return SubmissionOutcome::Failed(err),
        };

        // The receipt must price every passenger; a short line list would
        // silently drop passengers from the local mirror.
        if receipt.lines.len() != passengers.len() {
            return SubmissionOutcome::Failed(ClientError::Collaborator(format!(
                "receipt has {} line(s) for {} passenger(s)",
                receipt.lines.len(),
                passengers.len()
            )));
        }

        let booking = self.mirror_booking(intent, passengers, &receipt);

        info!(
            "Booking confirmed: {} (ticket {})",
            booking.id, booking.ticket_code
        );
        let _ = self.events.send(BookingConfirmedEvent {
            booking_id: booking.id,
            schedule_id: intent.schedule_id(),
            ticket_code: booking.ticket_code.clone(),
            confirmed_at: Utc::now().timestamp(),
        });

        SubmissionOutcome::Booked { booking, receipt }
    }

    fn assemble_payload(
        &self,
        buyer_id: Uuid,
        intent: &BookingIntent,
        passengers: &[Passenger],
    ) -> BookingPayload {
        BookingPayload {
            buyer_id,
            schedule_id: intent.schedule_id(),
            payment_method: self.payment_method.clone(),
            passengers: passengers
                .iter()
                .map(|p| PassengerPayload {
                    nik: p.nik.clone(),
                    name: p.name.trim().to_string(),
                    category: p.category,
                    // Checked non-null by validate().
                    seat_id: p.seat_id.unwrap_or_default(),
                })
                .collect(),
        }
    }

    /// Local mirror of the ledger's booking, built from the receipt so the
    /// "my bookings" view and the cancellation workflow have something to
    /// work with. Receipt lines are in passenger order; submit() has
    /// already checked one line per passenger.
    fn mirror_booking(
        &self,
        intent: &BookingIntent,
        passengers: &[Passenger],
        receipt: &Receipt,
    ) -> Booking {
        let now = Utc::now();
        let booked: Vec<BookedPassenger> = passengers
            .iter()
            .zip(receipt.lines.iter())
            .map(|(p, line)| BookedPassenger {
                nik: p.nik.clone(),
                name: p.name.trim().to_string(),
                category: p.category,
                seat_id: p.seat_id.unwrap_or_default(),
                seat_label: line.seat_label.clone(),
                price: line.price,
            })
            .collect();

        Booking {
            id: receipt.booking_id,
            ticket_code: receipt.ticket_code.clone(),
            schedule_id: intent.schedule_id(),
            passengers: booked,
            total_price: receipt.total,
            status: BookingStatus::Booked,
            payment_method: self.payment_method.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}
