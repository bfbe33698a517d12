use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::entities::marketing_goal::{self, GoalStatus};
use crate::errors::ServiceError;

/// Service for the marketing-goal lead queue.
#[derive(Clone)]
pub struct GoalService {
    db: Arc<DatabaseConnection>,
}

impl GoalService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// List all goals ordered by trading name.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<marketing_goal::Model>, ServiceError> {
        Ok(marketing_goal::Entity::find()
            .order_by_asc(marketing_goal::Column::TradingName)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, goal_id: i32) -> Result<marketing_goal::Model, ServiceError> {
        marketing_goal::Entity::find_by_id(goal_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Marketing goal {} not found", goal_id)))
    }

    /// Create a goal. The status defaults to Waiting when not supplied.
    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        input: GoalInput,
        created_by: i32,
    ) -> Result<marketing_goal::Model, ServiceError> {
        let goal = marketing_goal::ActiveModel {
            trading_name: Set(input.trading_name),
            legal_name: Set(input.legal_name),
            business_field: Set(input.business_field),
            phone: Set(input.phone),
            email: Set(input.email),
            note: Set(input.note),
            status: Set(input.status.unwrap_or(GoalStatus::Waiting)),
            created_by: Set(Some(created_by)),
            last_updated_by: Set(None),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let goal = goal.insert(&*self.db).await?;
        info!("Marketing goal created: {} ({})", goal.trading_name, goal.id);
        Ok(goal)
    }

    /// Replace a goal's fields and stamp the acting admin as last updater.
    /// Any status may follow any other.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        goal_id: i32,
        input: GoalInput,
        updated_by: i32,
    ) -> Result<marketing_goal::Model, ServiceError> {
        let goal = self.get(goal_id).await?;
        let current_status = goal.status;

        let mut goal: marketing_goal::ActiveModel = goal.into();
        goal.trading_name = Set(input.trading_name);
        goal.legal_name = Set(input.legal_name);
        goal.business_field = Set(input.business_field);
        goal.phone = Set(input.phone);
        goal.email = Set(input.email);
        goal.note = Set(input.note);
        goal.status = Set(input.status.unwrap_or(current_status));
        goal.last_updated_by = Set(Some(updated_by));

        Ok(goal.update(&*self.db).await?)
    }
}

/// Goal payload for create and full update.
#[derive(Debug, Deserialize, Validate)]
pub struct GoalInput {
    #[validate(length(min = 1, max = 255))]
    pub trading_name: String,
    pub legal_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub business_field: String,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub note: Option<String>,
    pub status: Option<GoalStatus>,
}
