pub mod annuity;
pub mod calendar;
pub mod config;
pub mod decimal;
pub mod display;
pub mod errors;
pub mod schedule;
pub mod tax;

// re-export key types
pub use annuity::{effective_cost_rate, emi_amount};
pub use config::{LoanConfig, LoanVariant};
pub use decimal::{Money, Rate};
pub use display::format_inr;
pub use errors::{EngineError, Result};
pub use schedule::{compute_schedule, CalculationResult, InstallmentRow, ScheduleTotals};
pub use tax::TaxPolicy;

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
