pub mod budget_service;
pub mod export_service;
pub mod ledger_service;
pub mod mood_service;
