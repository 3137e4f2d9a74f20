pub mod compare;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod normalize;
pub mod schedule;
pub mod state;
pub mod summary;
pub mod types;

// re-export key types
pub use compare::{compare_with_baseline, PrepaymentImpact};
pub use decimal::{Money, Rate};
pub use errors::{Result, ScheduleError};
pub use export::{to_csv_string, write_csv};
pub use schedule::{generate, InstallmentRow, Schedule};
pub use state::FormState;
pub use summary::{summarize, SummaryTotals};
pub use types::{AmortizationSystem, LoanParameters, Prepayments, VatBase};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
