pub mod breakdown;
pub mod calc;
pub mod classify;
pub mod comparison;
pub mod normalize;
pub mod options;
pub mod summary;
pub mod value;

pub use breakdown::{BorrowRateBreakdown, extract_borrow_rate_breakdown};
pub use calc::{Benefit, benefit_difference, interest_cost, period_rate, total_borrow_apr, total_borrow_cost};
pub use classify::{is_smart_loose, is_smart_strict};
pub use comparison::{CostComparison, CostInputs, VaultCost, compare};
pub use normalize::{normalize_rate, normalize_rate_f64, normalize_rate_str};
pub use options::{format_fixed2, normal_options, smart_options, vault_label};
pub use summary::VaultSummary;
