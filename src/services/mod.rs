//! Business-logic services used by the HTTP handlers. Each service owns a
//! handle to the connection pool and exposes the operations for one slice of
//! the domain.

pub mod admins;
pub mod catalog;
pub mod contracts;
pub mod costumers;
pub mod goals;
pub mod pos;
