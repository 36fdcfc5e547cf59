//! One validator per role.
//!
//! Every module exposes `validate(text) -> ValidationResult`. Roles built on
//! the shared checks also expose their [`RuleSet`](crate::rules::RuleSet) as
//! `RULES`.
pub mod adr;
pub mod architect;
pub mod code_review;
pub mod design_system;
pub mod implementation_plan;
pub mod metrics;
pub mod performance;
pub mod product_manager;
pub mod quality;
pub mod retrospective;
pub mod reviewer_feedback;
pub mod security;
pub mod sre;
pub mod technical_writer;
pub mod terraform;
pub mod ux_research;
