//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and in-memory state so route handlers
//! can stay focused on protocol translation and auth plumbing.

pub mod accounts;
pub mod chat;
pub mod recommend;
pub mod session;
pub mod sweeper;
