pub mod app_error;
pub mod demo_chart;
pub mod email_templates;
pub mod use_cases;
pub mod validators;
