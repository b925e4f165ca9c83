use crate::error::Result;

/// Abstract interface for raw slot I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// `EntryStore` handles the "what" (validation, ordering, consistency).
pub trait StorageBackend {
    /// Read a slot. Returns `Ok(None)` when the slot has never been written.
    /// Returns `Err` only on actual I/O errors.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the slot's value.
    /// MUST be atomic: either the whole value lands or the old one stays.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
