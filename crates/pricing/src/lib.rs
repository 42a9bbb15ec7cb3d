//! `offersync-pricing` — pure computation of marketplace target values.
//!
//! Both computers are side-effect free: no I/O, no clock reads, no logging.
//! Callers pass the facts (and `now`) in and decide what to do with gaps; the
//! computation itself is the single place where the price formula and the
//! availability rules live.

pub mod eligibility;
pub mod price;
pub mod stock;

pub use eligibility::EligibilityGap;
pub use price::{DEFAULT_COMMISSION_PERCENT, PriceComputer};
pub use stock::{StockComputer, StockDecision};
