//! Discord front end of the Kosen verify bot

pub mod commands;
pub mod context;
pub mod dto;
pub mod handlers;
pub mod i18n;
pub mod logging;
pub mod responses;
pub mod welcome;
