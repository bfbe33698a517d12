//! Database entities, one module per table.

pub mod admin;
pub mod contract;
pub mod contract_pos;
pub mod contract_service;
pub mod costumer;
pub mod country;
pub mod marketing_goal;
pub mod mid_revenue;
pub mod paper_roll;
pub mod payment;
pub mod pos;
pub mod pos_company;
pub mod pos_model;
pub mod virtual_service;
