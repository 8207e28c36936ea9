mod agent;
mod interaction;
mod snapshot;

pub use agent::{Acquaintance, Agent, AgentId, Receipt};
pub use interaction::{Interaction, SaleKind, Transfer};
pub use snapshot::{AgentSnapshot, MarketSnapshot, StepReport};
