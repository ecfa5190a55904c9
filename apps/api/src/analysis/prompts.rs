// All LLM prompt constants for the Analysis module.

/// System prompt: the critical-thinking coach persona.
pub const ANALYSIS_SYSTEM: &str = "You are an expert critical thinker and debate coach. \
Your job is to pressure-test arguments by:
1. Creating the strongest possible counterargument (steelman, not strawman)
2. Identifying hidden weak points and vulnerabilities in the reasoning
3. Spotting common misconceptions or factual errors
4. Suggesting ways to reinforce and strengthen the position
5. Anticipating specific criticisms opponents might raise

Be intellectually honest, balanced, and thorough. Avoid bias and focus on logical analysis.";

/// Analysis prompt template. Replace `{argument}` before sending.
/// The argument is embedded verbatim; it is not sanitized against prompt injection.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Please analyze this argument comprehensively:

"{argument}"

Provide your analysis in the following JSON format:
{
  "steelmanCounter": "The strongest possible counterargument (2-3 paragraphs)...",
  "weakPoints": ["Weak point 1", "Weak point 2", "Weak point 3"],
  "misconceptions": ["Misconception 1", "Misconception 2", "Misconception 3"],
  "reinforcements": ["Reinforcement strategy 1", "Reinforcement strategy 2", "Reinforcement strategy 3"],
  "opposingResponses": ["Opposition response 1", "Opposition response 2", "Opposition response 3"]
}

Provide at least 3 items for each array field."#;

/// The instruction pair sent to the generation service for one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt {
    pub system: &'static str,
    pub user: String,
}

pub fn build_prompt(argument: &str) -> AnalysisPrompt {
    AnalysisPrompt {
        system: ANALYSIS_SYSTEM,
        user: ANALYSIS_PROMPT_TEMPLATE.replace("{argument}", argument),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT_KEYS: [&str; 5] = [
        "steelmanCounter",
        "weakPoints",
        "misconceptions",
        "reinforcements",
        "opposingResponses",
    ];

    /// Top-level keys of the JSON schema block embedded in the prompt.
    fn schema_keys(prompt: &str) -> Vec<String> {
        let start = prompt.find('{').unwrap();
        let end = prompt.rfind('}').unwrap();
        let schema: serde_json::Value = serde_json::from_str(&prompt[start..=end]).unwrap();
        schema.as_object().unwrap().keys().cloned().collect()
    }

    #[test]
    fn test_prompt_embeds_argument_verbatim() {
        let argument = "Remote work improves productivity.";
        let prompt = build_prompt(argument);
        assert!(prompt.user.contains("\"Remote work improves productivity.\""));
        assert!(!prompt.user.contains("{argument}"));
    }

    #[test]
    fn test_prompt_keeps_special_characters_untouched() {
        let argument = "Taxes \"should\" rise {by 5%}\nbecause: reasons";
        let prompt = build_prompt(argument);
        assert!(prompt.user.contains(argument));
    }

    #[test]
    fn test_schema_names_exactly_the_five_output_keys() {
        let prompt = build_prompt("Cats are better than dogs.");
        let mut keys = schema_keys(&prompt.user);
        keys.sort();
        let mut expected: Vec<String> = OUTPUT_KEYS.iter().map(|k| k.to_string()).collect();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_prompt_requests_at_least_three_items() {
        let prompt = build_prompt("x");
        assert!(prompt.user.contains("at least 3 items"));
    }

    #[test]
    fn test_system_prompt_asks_for_steelman() {
        let prompt = build_prompt("x");
        assert_eq!(prompt.system, ANALYSIS_SYSTEM);
        assert!(prompt.system.contains("steelman, not strawman"));
    }
}
