/// Parsing and sampling of tabletop dice expressions like `3d6 + 1`.
pub mod dice;
/// The xoshiro/xoroshiro family of pseudo-random generators.
pub mod engine;
/// Seed expansion for turning one or two small seeds into full generator state.
pub mod seed;

pub use dice::*;
pub use engine::*;
pub use seed::*;

/// Re-exports all the things you'll need.
pub mod prelude {
    pub use crate::dice::*;
    pub use crate::engine::*;
    pub use crate::seed::*;
}
