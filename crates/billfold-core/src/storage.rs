use billfold_domain::Bill;

use crate::CoreError;

/// Abstraction over persistence backends for the bill collection.
///
/// The store writes through this port after every successful mutation, always
/// with the complete current collection. A crash between compute and persist
/// leaves the previous snapshot intact.
pub trait BillStorage: Send + Sync {
    /// Returns the previously persisted bills, or `None` on first run.
    fn load(&self) -> Result<Option<Vec<Bill>>, CoreError>;

    /// Durably persists the full current collection.
    fn save(&self, bills: &[Bill]) -> Result<(), CoreError>;
}
