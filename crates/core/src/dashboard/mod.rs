//! Dashboard module - the coordinating context that owns all dashboard state.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;


pub use dashboard_model::RefreshReport;
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
