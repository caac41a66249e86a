pub mod chain;
pub mod query;
pub mod response;
pub mod vault;

pub use chain::*;
pub use query::*;
pub use response::*;
pub use vault::*;
