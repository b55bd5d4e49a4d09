//! Built-in demo scenarios, runnable without typing anything.

/// A preset scenario with a stable lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoScenario {
    pub key: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const DEMO_SCENARIOS: &[DemoScenario] = &[
    DemoScenario {
        key: "startup",
        title: "🚀 Startup Failure",
        text: "Month 1: Strong signups after launch\n\
               Month 2: Low conversion to paid plans\n\
               Month 4: Added multiple new features\n\
               Month 8: Burn rate exceeded revenue, startup shut down",
    },
    DemoScenario {
        key: "pricing",
        title: "📉 Business Decision",
        text: "After increasing delivery fees, user retention dropped.\n\
               Marketing spend increased to compensate, but margins worsened.\n\
               Team responded by adding loyalty features.",
    },
];

/// Look up a demo by key, case-insensitively.
pub fn find_demo(key: &str) -> Option<&'static DemoScenario> {
    DEMO_SCENARIOS.iter().find(|demo| demo.key.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find_demo("startup"), find_demo("STARTUP"));
        assert!(find_demo("startup").is_some());
    }

    #[test]
    fn unknown_keys_find_nothing() {
        assert!(find_demo("outage").is_none());
        assert!(find_demo("").is_none());
    }

    #[test]
    fn demo_texts_are_multi_line_scenarios() {
        for demo in DEMO_SCENARIOS {
            assert!(demo.text.lines().count() >= 3, "{} is too short", demo.key);
            assert!(!demo.text.ends_with('\n'));
        }
    }
}
