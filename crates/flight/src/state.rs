use crate::di::{DependenciesInject, DependenciesInjectDeps};
use shared::config::ConnectionPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let deps = DependenciesInjectDeps { pool };

        let di_container = DependenciesInject::new(deps);

        Self { di_container }
    }
}
