//! Reports module - period, payable, and dashboard aggregation.

mod reports_model;
mod reports_service;


pub use reports_model::{
    DashboardConfig, PayableEntry, PayableSummary, PeriodSummary, WidgetKind, WidgetValue,
    DEFAULT_DASHBOARD_WIDGETS,
};
pub use reports_service::ReportsService;
