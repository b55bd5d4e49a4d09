//! Shared constants: model IDs, API endpoints, and runtime defaults.

/// Model ID constants for the Gemini API
pub mod models {
    pub mod google {
        pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
        pub const GEMINI_2_5_FLASH_LITE: &str = "gemini-2.5-flash-lite";
        pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";

        pub const DEFAULT_MODEL: &str = GEMINI_2_5_FLASH;

        pub const SUPPORTED_MODELS: &[&str] =
            &[GEMINI_2_5_FLASH, GEMINI_2_5_FLASH_LITE, GEMINI_2_5_PRO];
    }
}

/// Service endpoints
pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
}

/// Runtime defaults for the binary and library
pub mod defaults {
    use super::models;

    pub const DEFAULT_MODEL: &str = models::google::DEFAULT_MODEL;

    /// Environment variable consulted for the API key.
    pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

    /// Secondary variable tried when the primary one is unset.
    pub const FALLBACK_API_KEY_ENV: &str = "GOOGLE_API_KEY";

    /// Pause between revealed report lines, in milliseconds.
    pub const DEFAULT_REVEAL_DELAY_MS: u64 = 20;
}
