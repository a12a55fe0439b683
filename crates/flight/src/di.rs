use crate::{
    abstract_trait::flight::{
        repository::{DynFlightCommandRepository, DynFlightQueryRepository},
        service::{DynFlightCommandService, DynFlightQueryService},
    },
    repository::{command::FlightCommandRepository, query::FlightQueryRepository},
    service::{command::FlightCommandService, query::FlightQueryService},
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub flight_query: DynFlightQueryService,
    pub flight_command: DynFlightCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("flight_query", &"FlightQueryService")
            .field("flight_command", &"FlightCommandService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps { pool } = deps;

        let flight_query_repo =
            Arc::new(FlightQueryRepository::new(pool.clone())) as DynFlightQueryRepository;
        let flight_command_repo =
            Arc::new(FlightCommandRepository::new(pool.clone())) as DynFlightCommandRepository;

        let flight_query =
            Arc::new(FlightQueryService::new(flight_query_repo.clone())) as DynFlightQueryService;

        let flight_command = Arc::new(FlightCommandService::new(
            flight_query_repo,
            flight_command_repo,
        )) as DynFlightCommandService;

        Self {
            flight_query,
            flight_command,
        }
    }
}
