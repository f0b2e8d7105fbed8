pub mod dom;
pub mod fetch_mock;
