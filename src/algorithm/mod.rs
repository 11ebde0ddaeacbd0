/// Greedy tile-to-color assignment
pub mod assignment;
/// Pipeline orchestration and configuration
pub mod executor;
/// Palette matching policy
pub mod matching;
