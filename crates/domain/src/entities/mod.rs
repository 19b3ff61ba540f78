//! Domain entities - The weather lookup data model

mod location;
mod weather;

pub use location::Location;
pub use weather::{Condition, Current, Forecast, Weather};
