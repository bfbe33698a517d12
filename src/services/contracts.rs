use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::entities::contract::{self, Acquirer};
use crate::entities::{
    contract_pos, contract_service, costumer, mid_revenue, paper_roll, payment, pos,
    virtual_service,
};
use crate::errors::ServiceError;

/// Service for contracts and the records hanging off them: POS and service
/// attachments, paper-roll orders, scheduled payments and MID revenue.
#[derive(Clone)]
pub struct ContractService {
    db: Arc<DatabaseConnection>,
}

impl ContractService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// List all contracts with the merchant's names denormalized in.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ContractSummary>, ServiceError> {
        let rows = contract::Entity::find()
            .find_also_related(costumer::Entity)
            .order_by_asc(contract::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(contract, costumer)| {
                let (trading_name, legal_name) = costumer
                    .map(|c| (c.trading_name, c.legal_name))
                    .unwrap_or_default();
                ContractSummary {
                    contract,
                    trading_name,
                    legal_name,
                }
            })
            .collect())
    }

    /// Create a contract for an existing costumer. Totals start at zero and
    /// follow the attachments.
    #[instrument(skip(self, input))]
    pub async fn create(
        &self,
        input: ContractData,
        created_by: i32,
    ) -> Result<contract::Model, ServiceError> {
        costumer::Entity::find_by_id(input.costumer_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Costumer {} not found", input.costumer_id))
            })?;

        let contract = contract::ActiveModel {
            costumer_id: Set(input.costumer_id),
            face_to_face_sales: Set(input.face_to_face_sales),
            atv: Set(input.atv),
            annual_card_turnover: Set(input.annual_card_turnover),
            annual_total_turnover: Set(input.annual_total_turnover),
            interchange: Set(input.interchange),
            authorization_fee: Set(input.authorization_fee),
            pci_dss: Set(input.pci_dss),
            acquirer: Set(input.acquirer),
            mid: Set(input.mid),
            amex_mid: Set(input.amex_mid),
            ecommerce_mid: Set(input.ecommerce_mid),
            tid: Set(input.tid),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            pci_due_date: Set(input.pci_due_date),
            live_date: Set(input.live_date),
            total_cost: Set(Decimal::ZERO),
            total_price: Set(Decimal::ZERO),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let contract = contract.insert(&*self.db).await?;
        info!(
            "Contract created: {} for costumer {}",
            contract.id, contract.costumer_id
        );
        Ok(contract)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, contract_id: i32) -> Result<contract::Model, ServiceError> {
        contract::Entity::find_by_id(contract_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Contract {} not found", contract_id)))
    }

    /// Contract detail with the full merchant record and both attachment
    /// lists embedded.
    #[instrument(skip(self))]
    pub async fn get_detail(&self, contract_id: i32) -> Result<ContractDetail, ServiceError> {
        let contract = self.get(contract_id).await?;

        let costumer = costumer::Entity::find_by_id(contract.costumer_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Costumer {} not found", contract.costumer_id))
            })?;

        let poses = contract_pos::Entity::find()
            .filter(contract_pos::Column::ContractId.eq(contract_id))
            .all(&*self.db)
            .await?;
        let services = contract_service::Entity::find()
            .filter(contract_service::Column::ContractId.eq(contract_id))
            .all(&*self.db)
            .await?;

        Ok(ContractDetail {
            contract,
            costumer,
            poses,
            services,
        })
    }

    /// Partial update of a contract's own fields.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        contract_id: i32,
        patch: ContractPatch,
    ) -> Result<contract::Model, ServiceError> {
        let contract = self.get(contract_id).await?;

        if let Some(costumer_id) = patch.costumer_id {
            costumer::Entity::find_by_id(costumer_id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| {
                    ServiceError::NotFound(format!("Costumer {} not found", costumer_id))
                })?;
        }

        let mut contract: contract::ActiveModel = contract.into();
        if let Some(v) = patch.costumer_id {
            contract.costumer_id = Set(v);
        }
        if let Some(v) = patch.face_to_face_sales {
            contract.face_to_face_sales = Set(v);
        }
        if let Some(v) = patch.atv {
            contract.atv = Set(v);
        }
        if let Some(v) = patch.annual_card_turnover {
            contract.annual_card_turnover = Set(v);
        }
        if let Some(v) = patch.annual_total_turnover {
            contract.annual_total_turnover = Set(v);
        }
        if let Some(v) = patch.interchange {
            contract.interchange = Set(v);
        }
        if let Some(v) = patch.authorization_fee {
            contract.authorization_fee = Set(v);
        }
        if let Some(v) = patch.pci_dss {
            contract.pci_dss = Set(v);
        }
        if let Some(v) = patch.acquirer {
            contract.acquirer = Set(v);
        }
        if let Some(v) = patch.mid {
            contract.mid = Set(Some(v));
        }
        if let Some(v) = patch.amex_mid {
            contract.amex_mid = Set(Some(v));
        }
        if let Some(v) = patch.ecommerce_mid {
            contract.ecommerce_mid = Set(Some(v));
        }
        if let Some(v) = patch.tid {
            contract.tid = Set(Some(v));
        }
        if let Some(v) = patch.start_date {
            contract.start_date = Set(v);
        }
        if let Some(v) = patch.end_date {
            contract.end_date = Set(v);
        }
        if let Some(v) = patch.pci_due_date {
            contract.pci_due_date = Set(Some(v));
        }
        if let Some(v) = patch.live_date {
            contract.live_date = Set(Some(v));
        }

        Ok(contract.update(&*self.db).await?)
    }

    /// Attach a POS unit to a contract, snapshotting price and costs, and
    /// refresh the contract totals in the same transaction.
    #[instrument(skip(self, input))]
    pub async fn attach_pos(
        &self,
        contract_id: i32,
        input: AttachPosInput,
        created_by: i32,
    ) -> Result<contract_pos::Model, ServiceError> {
        self.get(contract_id).await?;
        pos::Entity::find_by_id(input.pos_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("POS {} not found", input.pos_id)))?;

        let txn = self.db.begin().await?;

        let attachment = contract_pos::ActiveModel {
            contract_id: Set(contract_id),
            pos_id: Set(input.pos_id),
            price: Set(input.price),
            hardware_cost: Set(input.hardware_cost),
            software_cost: Set(input.software_cost),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let attachment = attachment.insert(&txn).await?;

        refresh_totals(&txn, contract_id).await?;
        txn.commit().await?;

        info!("POS {} attached to contract {}", input.pos_id, contract_id);
        Ok(attachment)
    }

    #[instrument(skip(self))]
    pub async fn list_pos_attachments(
        &self,
        contract_id: i32,
    ) -> Result<Vec<contract_pos::Model>, ServiceError> {
        self.get(contract_id).await?;
        Ok(contract_pos::Entity::find()
            .filter(contract_pos::Column::ContractId.eq(contract_id))
            .all(&*self.db)
            .await?)
    }

    /// Attach a virtual service to a contract, snapshotting price and cost.
    #[instrument(skip(self, input))]
    pub async fn attach_service(
        &self,
        contract_id: i32,
        input: AttachServiceInput,
        created_by: i32,
    ) -> Result<contract_service::Model, ServiceError> {
        self.get(contract_id).await?;
        virtual_service::Entity::find_by_id(input.service_id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Virtual service {} not found", input.service_id))
            })?;

        let txn = self.db.begin().await?;

        let attachment = contract_service::ActiveModel {
            contract_id: Set(contract_id),
            service_id: Set(input.service_id),
            price: Set(input.price),
            cost: Set(input.cost),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let attachment = attachment.insert(&txn).await?;

        refresh_totals(&txn, contract_id).await?;
        txn.commit().await?;

        Ok(attachment)
    }

    #[instrument(skip(self))]
    pub async fn list_service_attachments(
        &self,
        contract_id: i32,
    ) -> Result<Vec<contract_service::Model>, ServiceError> {
        self.get(contract_id).await?;
        Ok(contract_service::Entity::find()
            .filter(contract_service::Column::ContractId.eq(contract_id))
            .all(&*self.db)
            .await?)
    }

    /// Record a paper-roll order. Paper rolls belong to the merchant, so the
    /// contract in the path is only used to resolve the costumer.
    #[instrument(skip(self, input))]
    pub async fn create_paper_roll(
        &self,
        contract_id: i32,
        input: PaperRollInput,
        created_by: i32,
    ) -> Result<paper_roll::Model, ServiceError> {
        let contract = self.get(contract_id).await?;

        let roll = paper_roll::ActiveModel {
            costumer_id: Set(contract.costumer_id),
            amount: Set(input.amount),
            cost: Set(input.cost),
            price: Set(input.price),
            direct_debit_cost: Set(input.direct_debit_cost),
            ordered_date: Set(input.ordered_date),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(roll.insert(&*self.db).await?)
    }

    /// Paper-roll orders of the contract's costumer, newest first.
    #[instrument(skip(self))]
    pub async fn list_paper_rolls(
        &self,
        contract_id: i32,
    ) -> Result<Vec<paper_roll::Model>, ServiceError> {
        let contract = self.get(contract_id).await?;

        Ok(paper_roll::Entity::find()
            .filter(paper_roll::Column::CostumerId.eq(contract.costumer_id))
            .order_by_desc(paper_roll::Column::OrderedDate)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create_payment(
        &self,
        contract_id: i32,
        input: PaymentInput,
        created_by: i32,
    ) -> Result<payment::Model, ServiceError> {
        self.get(contract_id).await?;

        let payment = payment::ActiveModel {
            contract_id: Set(contract_id),
            date: Set(input.date),
            direct_debit_cost: Set(input.direct_debit_cost),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(payment.insert(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_payments(
        &self,
        contract_id: i32,
    ) -> Result<Vec<payment::Model>, ServiceError> {
        self.get(contract_id).await?;
        Ok(payment::Entity::find()
            .filter(payment::Column::ContractId.eq(contract_id))
            .order_by_desc(payment::Column::Date)
            .all(&*self.db)
            .await?)
    }

    #[instrument(skip(self, input))]
    pub async fn create_mid_revenue(
        &self,
        contract_id: i32,
        input: MidRevenueInput,
        created_by: i32,
    ) -> Result<mid_revenue::Model, ServiceError> {
        self.get(contract_id).await?;

        let revenue = mid_revenue::ActiveModel {
            contract_id: Set(contract_id),
            income: Set(input.income),
            profit: Set(input.profit),
            date: Set(input.date),
            created_by: Set(Some(created_by)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(revenue.insert(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_mid_revenues(
        &self,
        contract_id: i32,
    ) -> Result<Vec<mid_revenue::Model>, ServiceError> {
        self.get(contract_id).await?;
        Ok(mid_revenue::Entity::find()
            .filter(mid_revenue::Column::ContractId.eq(contract_id))
            .order_by_desc(mid_revenue::Column::Date)
            .all(&*self.db)
            .await?)
    }
}

/// Recompute a contract's totals from its attachment snapshots.
async fn refresh_totals<C: ConnectionTrait>(db: &C, contract_id: i32) -> Result<(), ServiceError> {
    let poses = contract_pos::Entity::find()
        .filter(contract_pos::Column::ContractId.eq(contract_id))
        .all(db)
        .await?;
    let services = contract_service::Entity::find()
        .filter(contract_service::Column::ContractId.eq(contract_id))
        .all(db)
        .await?;

    let (total_cost, total_price) = attachment_totals(&poses, &services);

    let contract = contract::Entity::find_by_id(contract_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Contract {} not found", contract_id)))?;
    let mut contract: contract::ActiveModel = contract.into();
    contract.total_cost = Set(total_cost);
    contract.total_price = Set(total_price);
    contract.update(db).await?;

    Ok(())
}

/// Sum snapshot costs and prices over both attachment kinds.
fn attachment_totals(
    poses: &[contract_pos::Model],
    services: &[contract_service::Model],
) -> (Decimal, Decimal) {
    let mut total_cost = Decimal::ZERO;
    let mut total_price = Decimal::ZERO;

    for p in poses {
        total_cost += p.hardware_cost + p.software_cost;
        total_price += p.price;
    }
    for s in services {
        total_cost += s.cost;
        total_price += s.price;
    }

    (total_cost, total_price)
}

/// Contract create payload.
#[derive(Debug, Deserialize, Validate)]
pub struct ContractData {
    #[serde(rename = "costumer")]
    pub costumer_id: i32,
    #[validate(range(min = 0, max = 100))]
    pub face_to_face_sales: i32,
    pub atv: Decimal,
    pub annual_card_turnover: Decimal,
    pub annual_total_turnover: Decimal,
    pub interchange: f64,
    pub authorization_fee: f64,
    pub pci_dss: f64,
    pub acquirer: Acquirer,
    pub mid: Option<String>,
    pub amex_mid: Option<String>,
    pub ecommerce_mid: Option<String>,
    pub tid: Option<String>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub pci_due_date: Option<chrono::NaiveDate>,
    pub live_date: Option<chrono::NaiveDate>,
}

/// Contract partial-update payload.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContractPatch {
    #[serde(rename = "costumer")]
    pub costumer_id: Option<i32>,
    #[validate(range(min = 0, max = 100))]
    pub face_to_face_sales: Option<i32>,
    pub atv: Option<Decimal>,
    pub annual_card_turnover: Option<Decimal>,
    pub annual_total_turnover: Option<Decimal>,
    pub interchange: Option<f64>,
    pub authorization_fee: Option<f64>,
    pub pci_dss: Option<f64>,
    pub acquirer: Option<Acquirer>,
    pub mid: Option<String>,
    pub amex_mid: Option<String>,
    pub ecommerce_mid: Option<String>,
    pub tid: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub pci_due_date: Option<chrono::NaiveDate>,
    pub live_date: Option<chrono::NaiveDate>,
}

/// List row: the contract plus the merchant's names.
#[derive(Debug, Serialize)]
pub struct ContractSummary {
    #[serde(flatten)]
    pub contract: contract::Model,
    pub trading_name: String,
    pub legal_name: String,
}

/// Retrieve view: the contract with its merchant and attachments embedded.
#[derive(Debug, Serialize)]
pub struct ContractDetail {
    #[serde(flatten)]
    pub contract: contract::Model,
    pub costumer: costumer::Model,
    pub poses: Vec<contract_pos::Model>,
    pub services: Vec<contract_service::Model>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AttachPosInput {
    #[serde(rename = "pos")]
    pub pos_id: i32,
    pub price: Decimal,
    pub hardware_cost: Decimal,
    pub software_cost: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AttachServiceInput {
    #[serde(rename = "service")]
    pub service_id: i32,
    pub price: Decimal,
    pub cost: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PaperRollInput {
    #[validate(range(min = 1))]
    pub amount: i32,
    pub cost: Decimal,
    pub price: Decimal,
    pub direct_debit_cost: Decimal,
    pub ordered_date: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PaymentInput {
    pub date: chrono::DateTime<chrono::Utc>,
    pub direct_debit_cost: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MidRevenueInput {
    pub income: Decimal,
    pub profit: Decimal,
    pub date: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pos_row(price: Decimal, hardware: Decimal, software: Decimal) -> contract_pos::Model {
        contract_pos::Model {
            id: 1,
            contract_id: 1,
            pos_id: 1,
            price,
            hardware_cost: hardware,
            software_cost: software,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    fn service_row(price: Decimal, cost: Decimal) -> contract_service::Model {
        contract_service::Model {
            id: 1,
            contract_id: 1,
            service_id: 1,
            price,
            cost,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn totals_sum_costs_and_prices_over_both_attachment_kinds() {
        let poses = vec![pos_row(dec!(50.00), dec!(25.00), dec!(25.00))];
        let services = vec![service_row(dec!(12.00), dec!(10.00))];

        let (cost, price) = attachment_totals(&poses, &services);
        assert_eq!(cost, dec!(60.00));
        assert_eq!(price, dec!(62.00));
    }

    #[test]
    fn totals_are_zero_without_attachments() {
        let (cost, price) = attachment_totals(&[], &[]);
        assert_eq!(cost, Decimal::ZERO);
        assert_eq!(price, Decimal::ZERO);
    }
}
