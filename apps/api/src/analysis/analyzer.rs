//! Argument analysis: orchestrates one analysis end to end.
//!
//! Flow: build_prompt → generation call → parse_analysis. Strictly sequential;
//! the generation call is the only suspension point.

use std::fmt;

use tracing::{debug, info, warn};

use crate::analysis::models::AnalysisResult;
use crate::analysis::parser::parse_analysis;
use crate::analysis::prompts::build_prompt;
use crate::errors::AppError;
use crate::llm_client::GenerationService;

/// Observable stages of one analysis request. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    Validating,
    CallingModel,
    Done,
    Failed,
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisStage::Validating => "validating",
            AnalysisStage::CallingModel => "calling-model",
            AnalysisStage::Done => "done",
            AnalysisStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Runs the analysis pipeline for an already validated argument.
pub async fn analyze_argument(
    llm: &dyn GenerationService,
    argument: &str,
) -> Result<AnalysisResult, AppError> {
    let prompt = build_prompt(argument);

    debug!(
        stage = %AnalysisStage::CallingModel,
        argument_chars = argument.chars().count(),
        "Requesting analysis from generation service"
    );

    let outcome = match llm.generate(prompt.system, &prompt.user).await {
        Ok(raw) => parse_analysis(argument, &raw).map_err(AppError::from),
        Err(e) => Err(AppError::from(e)),
    };

    match &outcome {
        Ok(result) => info!(
            stage = %AnalysisStage::Done,
            weak_points = result.weak_points.len(),
            misconceptions = result.misconceptions.len(),
            reinforcements = result.reinforcements.len(),
            opposing_responses = result.opposing_responses.len(),
            "Analysis complete"
        ),
        Err(_) => warn!(stage = %AnalysisStage::Failed, "Analysis failed"),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the instructions it receives and replies with a canned completion.
    struct RecordingGenerator {
        reply: &'static str,
        seen: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl GenerationService for RecordingGenerator {
        async fn generate(&self, system: &str, user: &str) -> Result<String, LlmError> {
            self.seen
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));
            Ok(self.reply.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl GenerationService for FailingGenerator {
        async fn generate(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 500,
                message: "upstream exploded".to_string(),
            })
        }
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(AnalysisStage::Validating.to_string(), "validating");
        assert_eq!(AnalysisStage::CallingModel.to_string(), "calling-model");
        assert_eq!(AnalysisStage::Done.to_string(), "done");
        assert_eq!(AnalysisStage::Failed.to_string(), "failed");
    }

    #[tokio::test]
    async fn test_sends_built_prompt_once_and_parses_reply() {
        let generator = RecordingGenerator {
            reply: r#"{"steelmanCounter": "X", "weakPoints": ["a"]}"#,
            seen: Mutex::new(Vec::new()),
        };

        let result = analyze_argument(&generator, "Cities should ban cars.")
            .await
            .unwrap();

        assert_eq!(result.original_argument, "Cities should ban cars.");
        assert_eq!(result.steelman_counter, "X");
        assert_eq!(result.weak_points, vec!["a".to_string()]);

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let expected = build_prompt("Cities should ban cars.");
        assert_eq!(seen[0].0, expected.system);
        assert_eq!(seen[0].1, expected.user);
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_llm_error() {
        let err = analyze_argument(&FailingGenerator, "arg").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_unparseable_reply_maps_to_parse_error() {
        let generator = RecordingGenerator {
            reply: "not json",
            seen: Mutex::new(Vec::new()),
        };
        let err = analyze_argument(&generator, "arg").await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }
}
