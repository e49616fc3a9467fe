//! Built-in router implementations

mod key;
mod topic;

pub use key::KeyRouter;
pub use topic::TopicRouter;
