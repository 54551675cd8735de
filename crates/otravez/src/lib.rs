//! OtraVez - a chat bot for FRC team and event information.
//!
//! Commands are answered from The Blue Alliance, Statbotics and wttr.in.

pub mod bot;
pub mod commands;
pub mod config;
pub mod error;

pub use bot::Bot;
