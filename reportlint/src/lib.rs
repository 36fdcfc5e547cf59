//! Front end of reportlint. The command line interface, file discovery and
//! report rendering live here so the integration tests and the `xtask` crate
//! can reach them. The validation rules themselves are in
//! `reportlint-roles`.
pub mod cli;
pub mod error;
pub mod utils;
