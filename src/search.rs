pub mod enumerator;
pub mod path_finder;
pub mod searchconfig;
pub mod state;

pub use enumerator::Enumerator;
pub use path_finder::PathFinder;
pub use searchconfig::SearchConfig;
pub use state::PathState;
