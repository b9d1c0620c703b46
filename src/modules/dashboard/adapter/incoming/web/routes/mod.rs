mod get_dashboard_stats;

pub use get_dashboard_stats::get_dashboard_stats_handler;
