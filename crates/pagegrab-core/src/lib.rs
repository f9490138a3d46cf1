pub mod config;
pub mod logging;

pub mod archive;
pub mod archiver;
pub mod collector;
pub mod fetch;
pub mod page;
pub mod run;
pub mod settle;
pub mod url_model;
