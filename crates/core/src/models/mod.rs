pub mod chart;
pub mod export;
pub mod ledger;
pub mod mood;
pub mod notice;
pub mod profile;
pub mod session;
pub mod settings;
pub mod transaction;
pub mod view;
