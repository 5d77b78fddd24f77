mod error;
mod newton_cotes;
mod romberg;

pub use error::IntegrationError;
pub use newton_cotes::{simpson_one_third, simpson_three_eighths, trapezoid};
pub use romberg::{MAX_ROMBERG_ROWS, RombergTable, romberg};
