//! General engine configuration.

use serde::{Deserialize, Serialize};

/// Term shown on the student dashboard when none is requested.
const fn default_term_id() -> u32 {
    1
}

/// Default page size for roster and search listings.
const fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Academic term used for courses, attendance-by-course, and LMS activity.
    #[serde(default = "default_term_id")]
    pub term_id: u32,

    /// Page size used when a listing request does not carry one.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            term_id: default_term_id(),
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.term_id, 1);
        assert_eq!(config.page_size, 10);
    }
}
