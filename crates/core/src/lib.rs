//! Atelier Core - catalog, content tables and page logic.
//!
//! This crate provides everything the storefront pages compute:
//! - `catalog` - Static products, categories and the collection pipeline
//! - `faq` - FAQ entries and their category/search filter
//! - `orders` - Mock orders for order tracking
//! - `forms` - Contact and password reset validation and steps
//! - `carousel` - Hot deals and carousel index arithmetic
//! - `reveal` - Shutter and section reveal timings
//! - `company` - Team, milestones, values and shipping options
//!
//! # Architecture
//!
//! The core crate contains only types, static tables and pure functions -
//! no I/O, no timers, no HTTP. The storefront binary owns all of that.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod catalog;
pub mod company;
pub mod faq;
pub mod forms;
pub mod orders;
pub mod reveal;
pub mod types;

pub use types::*;
