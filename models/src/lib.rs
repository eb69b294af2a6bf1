pub mod archetype;
pub mod descriptor;
pub mod element;
pub mod numbers;
pub mod rarity;

pub use archetype::*;
pub use descriptor::*;
pub use element::*;
pub use numbers::*;
pub use rarity::*;
