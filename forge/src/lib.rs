pub mod artwork;
pub mod compose;
pub mod config;
pub mod name;
pub mod narrative;
pub mod pipeline;
pub mod prompt;
pub mod statics;
pub mod tier;

pub use artwork::*;
pub use compose::*;
pub use config::*;
pub use name::*;
pub use narrative::*;
pub use pipeline::*;
pub use prompt::*;
pub use statics::*;
pub use tier::*;
