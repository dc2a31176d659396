pub mod feed;
pub mod provider;
pub mod types;

pub use feed::{MarketConfig, MarketFeed, ProviderEndpoint, ResolvedAsset, FALLBACK_SOURCE};
pub use provider::ProviderKind;
pub use types::MarketQuote;
