pub mod app;
pub mod consts;
mod ui;
