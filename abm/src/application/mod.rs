//! Application layer: Use cases and orchestration
//!
//! Contains:
//! - **matching**: Pairs free agents once per step
//! - **negotiation**: Decides and settles what each pair trades
//! - **simulation**: The marketplace step loop, its configuration and metrics

pub mod matching;
pub mod negotiation;
pub mod simulation;
