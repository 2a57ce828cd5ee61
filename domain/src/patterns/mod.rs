//! Investigation pattern tables: corruption schemes and due diligence
//! checklists

pub mod corruption;
pub mod due_diligence;
