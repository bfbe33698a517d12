pub mod admins;
pub mod catalog;
pub mod common;
pub mod contracts;
pub mod costumers;
pub mod goals;
pub mod pos;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::AuthService;
use crate::services::{
    admins::AdminService, catalog::CatalogService, contracts::ContractService,
    costumers::CostumerService, goals::GoalService, pos::PosService,
};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates the business logic used by HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub admins: Arc<AdminService>,
    pub catalog: Arc<CatalogService>,
    pub pos: Arc<PosService>,
    pub costumers: Arc<CostumerService>,
    pub contracts: Arc<ContractService>,
    pub goals: Arc<GoalService>,
}

impl AppServices {
    pub fn new(db: Arc<DatabaseConnection>, auth: Arc<AuthService>) -> Self {
        Self {
            admins: Arc::new(AdminService::new(db.clone(), auth)),
            catalog: Arc::new(CatalogService::new(db.clone())),
            pos: Arc::new(PosService::new(db.clone())),
            costumers: Arc::new(CostumerService::new(db.clone())),
            contracts: Arc::new(ContractService::new(db.clone())),
            goals: Arc::new(GoalService::new(db)),
        }
    }
}
