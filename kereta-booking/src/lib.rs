pub mod cancel;
pub mod intent;
pub mod layout;
pub mod pricing;
pub mod selection;
pub mod submit;

pub use cancel::CancellationWorkflow;
pub use intent::BookingIntent;
pub use layout::{ColumnPlan, SeatLayoutGenerator, SeatMap, SeatRow};
pub use pricing::{PriceBreakdown, PriceCalculator, PriceLine};
pub use selection::{SeatSelectionController, SelectedSeat, ToggleOutcome};
pub use submit::{BookingSubmissionWorkflow, SubmissionOutcome};
