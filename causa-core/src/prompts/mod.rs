//! The fixed analysis prompt.

/// Markdown section headings the model is instructed to return, in order.
pub const REPORT_SECTIONS: &[&str] = &[
    "📅 Timeline",
    "🎯 Root Causes",
    "🔗 Causal Chain",
    "🧠 Hidden Assumptions",
    "🔄 Counterfactuals",
    "✅ Key Takeaways",
];

const ANALYSIS_TEMPLATE: &str = r#"You are a senior product strategist and causal reasoning expert.

Analyze the scenario and produce a HIGH-SIGNAL report.

Rules:
- Bullet points only
- Max 5 bullets per section
- Clear cause → effect language

Return EXACTLY in this format:

## 📅 Timeline
- ...

## 🎯 Root Causes
- ...

## 🔗 Causal Chain
- A → B → C

## 🧠 Hidden Assumptions
- ...

## 🔄 Counterfactuals
- ...

## ✅ Key Takeaways
- ...

Scenario:
"#;

/// Build the full analysis prompt for one scenario.
///
/// Plain substitution into the fixed template; the scenario text is not
/// validated or escaped.
pub fn build_prompt(scenario: &str) -> String {
    format!("{ANALYSIS_TEMPLATE}{scenario}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_scenario_verbatim() {
        let prompt = build_prompt("Month 1: launch\nMonth 2: churn spike");
        assert!(prompt.ends_with("Scenario:\nMonth 1: launch\nMonth 2: churn spike\n"));
    }

    #[test]
    fn prompt_requests_every_report_section() {
        let prompt = build_prompt("a scenario");
        for section in REPORT_SECTIONS {
            assert!(prompt.contains(&format!("## {section}")), "missing section {section}");
        }
    }

    #[test]
    fn prompt_pins_the_report_rules() {
        let prompt = build_prompt("a scenario");
        assert!(prompt.starts_with("You are a senior product strategist"));
        assert!(prompt.contains("Bullet points only"));
        assert!(prompt.contains("Max 5 bullets per section"));
        assert!(prompt.contains("Return EXACTLY in this format:"));
    }

    #[test]
    fn whitespace_in_the_scenario_is_preserved() {
        let prompt = build_prompt("  leading and trailing  ");
        assert!(prompt.contains("Scenario:\n  leading and trailing  \n"));
    }
}
