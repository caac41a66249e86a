pub mod chain;

pub use chain::{Chain, ChainError};
