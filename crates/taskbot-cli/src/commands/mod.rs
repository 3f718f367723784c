pub mod add;
pub mod check;
pub mod dispatch;
pub mod list;
pub mod planner;
pub mod remove;
pub mod serve;
pub mod summary;
pub mod timeline;
pub mod toggle_manual;
pub mod update;
