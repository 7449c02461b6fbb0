use typed_builder::TypedBuilder;

/// Validity window applied when a submission does not carry one.
pub const DEFAULT_VALIDITY_MINUTES: u32 = 30;

/// How user-supplied custom codes are admitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomCodePolicy {
    /// Accept the code as given, without format or uniqueness checks.
    /// Duplicates are stored, and resolution returns the first entry holding the code.
    #[default]
    Verbatim,
    /// Validate the format and reject codes that are already held,
    /// the same way generated codes are kept unique.
    Checked,
}

/// Whether resolution looks at the validity window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Expired entries still resolve.
    #[default]
    Lenient,
    /// Expired entries fail with `ResolveError::Expired` and record no access.
    Strict,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct RegistrySettings {
    #[builder(default = DEFAULT_VALIDITY_MINUTES)]
    pub default_validity_minutes: u32,
    #[builder(default)]
    pub custom_codes: CustomCodePolicy,
    #[builder(default)]
    pub expiry: ExpiryPolicy,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self::builder().build()
    }
}
