//! Agora Core Domain
//!
//! Pure domain types for the Agora marketplace simulation.
//! This crate contains no randomness, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod policy;
pub mod roster;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    Acquaintance, Agent, AgentId, AgentSnapshot, Interaction, MarketSnapshot, Receipt, SaleKind,
    StepReport, Transfer,
};
pub use error::{ConfigError, ConfigResult};
pub use policy::{MarketPolicy, PartnerSelection, PriceAdaptation, PurchaseScoring};
pub use roster::RosterEntry;
pub use values::{Cash, Price, PriceTable, Product, Step, Stock, Units};
