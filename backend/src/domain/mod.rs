//! Domain layer: models, commands and services.

pub mod checklist_service;
pub mod commands;
pub mod export_service;
pub mod mappers;
pub mod models;
pub mod period;
pub mod summary_service;
pub mod transaction_service;
pub mod trend_service;
pub mod worksheets;

pub use checklist_service::ChecklistService;
pub use export_service::ExportService;
pub use period::AggregationPeriod;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
pub use trend_service::TrendService;
