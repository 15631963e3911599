pub mod cipher;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod language;
pub mod normalize;
pub mod optimizer;
pub mod scorer;

pub use self::engine::{Engine, Solution, SolveOptions};
pub use self::error::{CfResult, CipherError};
// cmd and reports belong to the binary (src/main.rs).
