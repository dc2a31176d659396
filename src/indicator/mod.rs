pub mod bollinger;
pub mod ema;
pub mod pattern;
pub mod rsi;
pub mod set;
pub mod sma;
pub mod window;

pub use pattern::{detect_patterns, ChartPattern, PatternConfig, PatternKind};
pub use rsi::RsiZone;
pub use set::{
    compute_indicators, compute_indicators_with, IndicatorParams, IndicatorSet, IndicatorSummary,
};
