/// Options for setting a key-value pair on a bidirectional map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SetOptions {
    /// Set the pair even if the value is already bound to another key.
    ///
    /// This can remove other entries from the map. Defaults to `false`.
    pub force: bool,
}

impl SetOptions {
    /// Options that permit evicting conflicting entries
    #[must_use]
    pub const fn forced() -> Self {
        Self { force: true }
    }
}
