pub mod candle;
pub mod snapshot;
pub mod timeframe;

pub use candle::{closes, Candle};
pub use snapshot::AssetSnapshot;
pub use timeframe::Timeframe;
