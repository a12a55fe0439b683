mod command;
mod query;

pub use self::command::{DynFlightCommandRepository, FlightCommandRepositoryTrait};
pub use self::query::{DynFlightQueryRepository, FlightQueryRepositoryTrait};
