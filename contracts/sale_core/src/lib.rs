//! Shared coordination core for the bonus token sales.
//!
//! Both sale controllers store their state through this crate and run every
//! contribution through [`purchase::buy_tokens`], supplying only the rules that
//! differ between them via [`purchase::SaleRules`].
#![no_std]

pub mod admin;
pub mod bonus;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod purchase;
pub mod storage;
pub mod types;
pub mod vault;
pub mod whitelist;

pub use errors::SaleError;
pub use types::*;
