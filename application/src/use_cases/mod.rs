//! Use cases operating on the research catalog

pub mod plan_investigation;

pub use plan_investigation::{InvestigationPlan, PlanInvestigationUseCase};
