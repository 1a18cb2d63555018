pub mod alert_mock;
pub mod fetch_mock;
