mod command;
mod query;

pub use self::command::{DynFlightCommandService, FlightCommandServiceTrait};
pub use self::query::{DynFlightQueryService, FlightQueryServiceTrait};
