pub mod build;
pub mod classify;
pub mod extract;
pub mod normalize;
pub mod options;
pub mod re;
pub mod rule;
pub mod vocabulary;

pub use build::*;
pub use classify::*;
pub use extract::*;
pub use normalize::*;
pub use options::*;
pub use rule::*;
pub use vocabulary::*;
