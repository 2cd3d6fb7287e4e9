pub mod cash_flow_chart;
pub mod financial_model;
pub mod headcount_chart;
pub mod model_types;
pub mod parameters_yaml;
pub mod revenue_chart;
pub mod tier_metrics;
