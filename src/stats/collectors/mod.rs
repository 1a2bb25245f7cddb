mod performance;
mod wins;

pub use performance::PerformanceCollector;
pub use wins::WinCollector;
