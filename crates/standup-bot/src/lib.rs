//! Daily standup update bot.
//!
//! Listens to a chat gateway, matches messages against a table of
//! regex-triggered commands and answers in the room the message came
//! from. Teams post one update per person and day, query them back per
//! user, per room and per calendar window, and clear them again.

pub mod commands;
pub mod config;
pub mod dates;
pub mod error;
pub mod render;
