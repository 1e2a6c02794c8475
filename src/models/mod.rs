//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema PostgreSQL.

pub mod added_vehicle;
pub mod catalog;
pub mod user;

pub use added_vehicle::*;
pub use catalog::*;
pub use user::*;
