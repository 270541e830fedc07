//! Engine configuration.

/// Two doors whose distances to an egress differ by at most this much
/// are both offered to the rider.
pub const DEFAULT_TIE_THRESHOLD: f64 = 0.25;

/// Platform types where each direction boards from its own platform.
pub const DEFAULT_SIDE_PLATFORM_TYPES: [&str; 2] = ["side", "gap island"];

/// Tunable constants of the mapping engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Maximum distance difference (platform-axis units) for a two-door tie.
    pub tie_threshold: f64,

    /// Lower-cased platform type names treated as side platforms.
    pub side_platform_types: Vec<String>,
}

impl EngineConfig {
    /// Create a configuration with the given parameters.
    pub fn new(tie_threshold: f64, side_platform_types: Vec<String>) -> Self {
        Self {
            tie_threshold,
            side_platform_types: side_platform_types
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .collect(),
        }
    }

    /// Whether a station's platform type has separate platforms per direction.
    ///
    /// ```
    /// use exit_guide::engine::EngineConfig;
    ///
    /// let config = EngineConfig::default();
    /// assert!(config.is_side_platform(" Gap Island "));
    /// assert!(!config.is_side_platform("island"));
    /// ```
    pub fn is_side_platform(&self, platform_type: &str) -> bool {
        let platform_type = platform_type.trim().to_lowercase();
        self.side_platform_types.iter().any(|t| *t == platform_type)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tie_threshold: DEFAULT_TIE_THRESHOLD,
            side_platform_types: DEFAULT_SIDE_PLATFORM_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        }
    }
}
