//! Iteration count presets for salted hashing

/// Number of key-derivation iterations to perform
///
/// # Security Considerations
///
/// - For password hashing: use at least `Standard`
/// - For long-lived credentials: prefer `Recommended` or higher
/// - `Fast` is only meant for tests and development
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashPasses {
    /// 100 iterations
    ///
    /// Only use for non-sensitive data or development
    Fast,

    /// 1,000 iterations
    Moderate,

    /// 5,000 iterations, the default for newly built salted hashes
    #[default]
    Standard,

    /// 10,000 iterations
    Recommended,

    /// 100,000 iterations
    Strong,

    /// 1,000,000 iterations
    ///
    /// May cause noticeable delays
    Maximum,
}

impl HashPasses {
    /// Get the number of iterations
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match self {
            Self::Fast => 100,
            Self::Moderate => 1_000,
            Self::Standard => 5_000,
            Self::Recommended => 10_000,
            Self::Strong => 100_000,
            Self::Maximum => 1_000_000,
        }
    }

    /// Check if this is suitable for password hashing
    #[must_use]
    pub fn is_password_safe(&self) -> bool {
        self.iterations() >= Self::Standard.iterations()
    }
}

impl From<HashPasses> for u32 {
    fn from(passes: HashPasses) -> Self {
        passes.iterations()
    }
}
