/// Defines the contract for the persistent key-value store the history is
/// mirrored to.
///
/// Values are opaque strings; callers own their serialization.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Deletes `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}
