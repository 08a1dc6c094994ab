pub mod events;
pub mod models;
pub mod pii;

pub use models::{
    Booking, BookingStatus, BookedPassenger, Carriage, CarriageSeats, CategoryPrices,
    CompanyIdentity, Passenger, PassengerCategory, PassengerCounts, Receipt, ReceiptLine,
    Schedule, ScheduleStatus, Seat, SeatStatus, TripLeg,
};
pub use pii::Masked;
