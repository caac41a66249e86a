pub mod chains;
pub mod compare;
pub mod smart_lending;
pub mod vaults;

pub use chains::list_chains;
pub use compare::compare_vaults;
pub use smart_lending::list_smart_lending_tokens;
pub use vaults::{get_vault_breakdown, list_chain_vaults};
