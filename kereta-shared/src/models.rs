use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Schedule lifecycle as reported by the inventory service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    Active,
    Completed,
    Cancelled,
    Maintenance,
}

/// Unit prices per passenger category, in rupiah.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPrices {
    pub adult: i64,
    pub elderly: i64,
    pub child: i64,
}

impl CategoryPrices {
    pub fn for_category(&self, category: PassengerCategory) -> i64 {
        match category {
            PassengerCategory::Adult => self.adult,
            PassengerCategory::Elderly => self.elderly,
            PassengerCategory::Child => self.child,
        }
    }
}

/// A scheduled train run. Owned by the inventory service; read-only here.
///
/// Departure/arrival timestamps are kept as the raw strings the service
/// returns. Search semantics (date-token matching, face-value hour
/// bucketing, lexicographic ordering) are defined on that raw text, so
/// parsing them into `DateTime` would change behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub train_name: String,
    pub origin: String,
    pub destination: String,
    pub carriage_class: String,
    pub departure_at: String,
    pub arrival_at: String,
    pub prices: CategoryPrices,
    pub total_seats: i32,
    pub available_seats: i32,
    pub sold_seats: i32,
    pub status: ScheduleStatus,
}

impl Schedule {
    /// Leading date token of the departure timestamp, normalizing both
    /// `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD HH:MM:SS` forms.
    pub fn departure_date_token(&self) -> &str {
        date_token(&self.departure_at)
    }

    /// Hour token of the departure timestamp, taken at face value with no
    /// timezone conversion.
    pub fn departure_hour(&self) -> Option<u32> {
        hour_token(&self.departure_at)
    }
}

pub(crate) fn date_token(timestamp: &str) -> &str {
    timestamp
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(timestamp)
}

pub(crate) fn hour_token(timestamp: &str) -> Option<u32> {
    let time = timestamp.split(|c| c == 'T' || c == ' ').nth(1)?;
    let hour = time.split(':').next()?;
    hour.parse().ok()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Available,
    Booked,
}

/// A single seat inside a carriage. Status is authoritative only at fetch
/// time; another buyer may take the seat before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: Uuid,
    pub row: i32,
    pub column: char,
    pub status: SeatStatus,
}

impl Seat {
    /// Display label, e.g. `12A`.
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carriage {
    pub id: Uuid,
    pub class: String,
    pub capacity: i32,
}

/// One carriage's seat inventory as returned by `get-available-seats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarriageSeats {
    pub class: String,
    pub seats: Vec<Seat>,
}

/// Passenger category; determines the unit price applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerCategory {
    Adult,
    Elderly,
    Child,
}

/// Passenger counts fixed at search time, one per category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerCounts {
    pub adult: u32,
    pub elderly: u32,
    pub child: u32,
}

impl PassengerCounts {
    pub fn total(&self) -> u32 {
        self.adult + self.elderly + self.child
    }

    pub fn for_category(&self, category: PassengerCategory) -> u32 {
        match category {
            PassengerCategory::Adult => self.adult,
            PassengerCategory::Elderly => self.elderly,
            PassengerCategory::Child => self.child,
        }
    }
}

/// A traveling passenger as captured on the booking form. The seat id stays
/// `None` until a seat has been picked for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub nik: crate::pii::Masked<String>,
    pub name: String,
    pub category: PassengerCategory,
    pub seat_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Booked,
    Cancelled,
    Completed,
}

/// A passenger inside a confirmed booking, with the seat and price the
/// ledger resolved for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedPassenger {
    pub nik: crate::pii::Masked<String>,
    pub name: String,
    pub category: PassengerCategory,
    pub seat_id: Uuid,
    pub seat_label: String,
    pub price: i64,
}

/// A purchase as mirrored client-side. Created only by the submission
/// workflow; the `Completed` transition is ledger-driven and informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub ticket_code: String,
    pub schedule_id: Uuid,
    pub passengers: Vec<BookedPassenger>,
    pub total_price: i64,
    pub status: BookingStatus,
    pub payment_method: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Reflect a cancellation confirmed by the ledger.
    pub fn mark_cancelled(&mut self) {
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub name: String,
    pub address: String,
    pub tax_id: String,
}

/// One leg of the booked trip as printed on the receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripLeg {
    pub train_name: String,
    pub origin: String,
    pub destination: String,
    pub departure_at: String,
    pub arrival_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub passenger_name: String,
    pub category: PassengerCategory,
    pub seat_label: String,
    pub price: i64,
}

/// Normalized receipt returned by `get-receipt` after a successful booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub ticket_code: String,
    pub booking_id: Uuid,
    pub company: CompanyIdentity,
    pub legs: Vec<TripLeg>,
    pub lines: Vec<ReceiptLine>,
    pub total: i64,
    pub payment_method: String,
    pub tax_disclaimer: String,
    pub issued_at: DateTime<Utc>,
}
