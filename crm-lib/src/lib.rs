//! CRM front-end core
//!
//! A record table engine (search, sort, pagination, row actions) plus the
//! pieces that feed it: a login stub, role-gated navigation, an in-memory
//! record directory, client forms and typed settings.

pub mod auth;
pub mod directory;
pub mod error;
pub mod forms;
pub mod model;
pub mod nav;
pub mod settings;
pub mod table;
