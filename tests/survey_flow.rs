//! Integration tests for the survey conversation flow.
//!
//! These tests drive the application handlers end-to-end:
//! 1. A session is created against the active catalog
//! 2. Utterances are classified and applied one turn at a time
//! 3. The last answer finalizes the session into a result sink
//!
//! Uses in-memory adapters and scripted model replies, plus the file-backed
//! catalog and result sink in a temporary directory.

use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use survey_chat::adapters::ai::{MockAIProvider, MockError};
use survey_chat::adapters::catalog::{FileCatalogSource, InMemoryCatalogSource};
use survey_chat::adapters::classifier::LlmTextClassifier;
use survey_chat::adapters::composer::StaticAcknowledgementComposer;
use survey_chat::adapters::registry::{InMemorySessionRegistry, RegistryConfig};
use survey_chat::adapters::results::{InMemoryResultSink, JsonFileResultSink};
use survey_chat::application::handlers::survey::{
    ReloadCatalogHandler, ResultFinalizer, StartSessionCommand, StartSessionHandler,
    SubmitUtteranceCommand, SubmitUtteranceHandler,
};
use survey_chat::application::ActiveCatalog;
use survey_chat::domain::catalog::{AnswerOption, Cardinality, OptionCode, Question};
use survey_chat::domain::foundation::SessionId;
use survey_chat::domain::survey::{ClassificationOutcome, SurveyError, SurveyResult, TurnKind};
use survey_chat::ports::{CatalogSource, ResultSink, SessionRegistry, TextClassifier};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn car_survey() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "Do you own a car?",
            Cardinality::Single,
            vec![AnswerOption::new("A1", "yes"), AnswerOption::new("A2", "no")],
        ),
        Question::new(
            2,
            "Which do you use?",
            Cardinality::Multi,
            vec![AnswerOption::new("B1", "bus"), AnswerOption::new("B2", "bike")],
        ),
    ]
}

/// Picks the first option of whatever question it is asked about.
struct FirstOptionClassifier {
    delay: Duration,
}

#[async_trait]
impl TextClassifier for FirstOptionClassifier {
    async fn classify(
        &self,
        _session_id: SessionId,
        _utterance: &str,
        question: &Question,
    ) -> ClassificationOutcome {
        tokio::time::sleep(self.delay).await;
        ClassificationOutcome::Matched(vec![question.options[0].code.clone()])
    }
}

struct Service {
    start: StartSessionHandler,
    submit: Arc<SubmitUtteranceHandler>,
    reload: ReloadCatalogHandler,
    registry: Arc<InMemorySessionRegistry>,
}

async fn service(
    source: Arc<dyn CatalogSource>,
    classifier: Arc<dyn TextClassifier>,
    sink: Arc<dyn ResultSink>,
    registry_config: RegistryConfig,
) -> Service {
    let catalog = Arc::new(ActiveCatalog::load(source).await.unwrap());
    let registry = Arc::new(InMemorySessionRegistry::new(registry_config));

    Service {
        start: StartSessionHandler::new(registry.clone(), catalog.clone()),
        submit: Arc::new(SubmitUtteranceHandler::new(
            registry.clone(),
            classifier,
            Arc::new(StaticAcknowledgementComposer::default()),
            Arc::new(ResultFinalizer::new(sink)),
        )),
        reload: ReloadCatalogHandler::new(catalog),
        registry,
    }
}

fn llm_classifier(provider: MockAIProvider) -> Arc<dyn TextClassifier> {
    Arc::new(LlmTextClassifier::new(
        Arc::new(provider),
        Duration::from_secs(5),
    ))
}

fn say(session_id: SessionId, utterance: &str) -> SubmitUtteranceCommand {
    SubmitUtteranceCommand {
        session_id,
        utterance: utterance.to_string(),
    }
}

// =============================================================================
// Conversation Scenarios
// =============================================================================

#[tokio::test]
async fn walks_scenario_from_welcome_to_single_finalization() {
    let provider = MockAIProvider::new()
        .with_response("A1")
        .with_response("UNCLEAR")
        .with_response("B2");
    let sink = InMemoryResultSink::new();
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        llm_classifier(provider.clone()),
        Arc::new(sink.clone()),
        RegistryConfig::default(),
    )
    .await;

    let welcome = svc.start.handle(StartSessionCommand::default()).await.unwrap();
    let id = welcome.session_id;
    assert_eq!(welcome.kind, TurnKind::Welcome);
    assert_eq!(welcome.current_question.unwrap().prompt, "Do you own a car?");

    let turn = svc.submit.handle(say(id, "yeah sure")).await.unwrap();
    assert_eq!(turn.kind, TurnKind::NextQuestion);
    assert_eq!(turn.current_question.unwrap().prompt, "Which do you use?");

    let turn = svc.submit.handle(say(id, "mumble")).await.unwrap();
    assert_eq!(turn.kind, TurnKind::Reprompt);
    assert_eq!(turn.current_question.unwrap().prompt, "Which do you use?");
    {
        let handle = svc.registry.get(&id).await.unwrap();
        let session = handle.lock().await;
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.answers().len(), 1);
    }

    let turn = svc.submit.handle(say(id, "the second one")).await.unwrap();
    assert_eq!(turn.kind, TurnKind::Completed);
    assert!(turn.completed);
    assert_eq!(turn.results_saved, Some(true));

    let results = sink.results().await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].session_id, id);
    assert_eq!(results[0].answers.len(), 2);
    assert_eq!(results[0].answers[0].matched_codes, vec![OptionCode::from("A1")]);
    assert_eq!(results[0].answers[0].raw_utterance, "yeah sure");
    assert_eq!(results[0].answers[1].matched_codes, vec![OptionCode::from("B2")]);
    assert_eq!(provider.call_count(), 3);
}

#[tokio::test]
async fn completed_session_rejects_further_utterances_without_changes() {
    let sink = InMemoryResultSink::new();
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        llm_classifier(MockAIProvider::new().with_response("A2").with_response("B1")),
        Arc::new(sink.clone()),
        RegistryConfig::default(),
    )
    .await;

    let id = svc
        .start
        .handle(StartSessionCommand::default())
        .await
        .unwrap()
        .session_id;
    svc.submit.handle(say(id, "no")).await.unwrap();
    svc.submit.handle(say(id, "bus")).await.unwrap();

    let err = svc.submit.handle(say(id, "one more")).await.unwrap_err();
    assert_eq!(err, SurveyError::already_completed(id));
    let err = svc.submit.handle(say(id, "   ")).await.unwrap_err();
    assert_eq!(err, SurveyError::already_completed(id));

    let handle = svc.registry.get(&id).await.unwrap();
    assert_eq!(handle.lock().await.answers().len(), 2);
    assert_eq!(sink.count().await, 1);

    let resumed = svc
        .start
        .handle(StartSessionCommand { session_id: Some(id) })
        .await
        .unwrap();
    assert!(resumed.completed);
    assert_eq!(resumed.results_saved, Some(true));
}

#[tokio::test]
async fn unknown_session_is_not_found_and_nothing_is_created() {
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        llm_classifier(MockAIProvider::new()),
        Arc::new(InMemoryResultSink::new()),
        RegistryConfig::default(),
    )
    .await;
    let unknown = SessionId::new();

    let err = svc.submit.handle(say(unknown, "hello")).await.unwrap_err();
    assert_eq!(err, SurveyError::not_found(unknown));

    let err = svc.submit.handle(say(unknown, "")).await.unwrap_err();
    assert_eq!(err, SurveyError::not_found(unknown));
    assert_eq!(svc.registry.len().await, 0);
}

#[tokio::test]
async fn provider_failures_degrade_to_reprompt() {
    let provider = MockAIProvider::new()
        .with_error(MockError::Unavailable {
            message: "overloaded".to_string(),
        })
        .with_error(MockError::Timeout { timeout_secs: 30 });
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        llm_classifier(provider),
        Arc::new(InMemoryResultSink::new()),
        RegistryConfig::default(),
    )
    .await;
    let id = svc
        .start
        .handle(StartSessionCommand::default())
        .await
        .unwrap()
        .session_id;

    for _ in 0..2 {
        let turn = svc.submit.handle(say(id, "yes")).await.unwrap();
        assert_eq!(turn.kind, TurnKind::Reprompt);
    }
    let handle = svc.registry.get(&id).await.unwrap();
    assert_eq!(handle.lock().await.cursor(), 0);
}

#[tokio::test]
async fn sink_failure_is_reported_on_the_completion_turn() {
    let sink = InMemoryResultSink::new();
    sink.set_failing(true);
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        llm_classifier(MockAIProvider::new().with_response("A1").with_response("B1")),
        Arc::new(sink),
        RegistryConfig::default(),
    )
    .await;
    let id = svc
        .start
        .handle(StartSessionCommand::default())
        .await
        .unwrap()
        .session_id;

    svc.submit.handle(say(id, "yes")).await.unwrap();
    let turn = svc.submit.handle(say(id, "bus")).await.unwrap();

    assert!(turn.completed);
    assert_eq!(turn.results_saved, Some(false));
    assert!(turn.message.contains("could not"));
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn concurrent_submissions_on_one_session_are_serialized() {
    let sink = InMemoryResultSink::new();
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        Arc::new(FirstOptionClassifier {
            delay: Duration::from_millis(5),
        }),
        Arc::new(sink.clone()),
        RegistryConfig::default(),
    )
    .await;
    let id = svc
        .start
        .handle(StartSessionCommand::default())
        .await
        .unwrap()
        .session_id;

    let turns = join_all((0..10).map(|i| {
        let submit = svc.submit.clone();
        tokio::spawn(async move { submit.handle(say(id, &format!("answer {}", i))).await })
    }))
    .await;

    let (ok, rejected): (Vec<_>, Vec<_>) = turns
        .into_iter()
        .map(|joined| joined.unwrap())
        .partition(|result| result.is_ok());

    assert_eq!(ok.len(), 2);
    assert_eq!(rejected.len(), 8);
    assert!(rejected
        .iter()
        .all(|r| matches!(r, Err(SurveyError::AlreadyCompleted(_)))));

    let handle = svc.registry.get(&id).await.unwrap();
    let session = handle.lock().await;
    assert_eq!(session.cursor(), 2);
    assert_eq!(session.answers().len(), 2);
    assert_eq!(sink.count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn slow_classification_does_not_block_other_sessions() {
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        Arc::new(FirstOptionClassifier {
            delay: Duration::from_millis(100),
        }),
        Arc::new(InMemoryResultSink::new()),
        RegistryConfig::default(),
    )
    .await;

    let mut ids = Vec::new();
    for _ in 0..20 {
        ids.push(
            svc.start
                .handle(StartSessionCommand::default())
                .await
                .unwrap()
                .session_id,
        );
    }

    let started = tokio::time::Instant::now();
    let turns = join_all(ids.iter().map(|id| svc.submit.handle(say(*id, "yes")))).await;

    assert!(turns.iter().all(|t| t.as_ref().unwrap().kind == TurnKind::NextQuestion));
    assert!(started.elapsed() < Duration::from_millis(500));
}

// =============================================================================
// Expiry and Catalog Reload
// =============================================================================

#[tokio::test(start_paused = true)]
async fn idle_session_expires_and_can_be_restarted_fresh() {
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        Arc::new(FirstOptionClassifier {
            delay: Duration::ZERO,
        }),
        Arc::new(InMemoryResultSink::new()),
        RegistryConfig {
            ttl: Duration::from_secs(60),
            tombstone_retention: Duration::from_secs(600),
        },
    )
    .await;
    let id = svc
        .start
        .handle(StartSessionCommand::default())
        .await
        .unwrap()
        .session_id;
    svc.submit.handle(say(id, "yes")).await.unwrap();

    tokio::time::advance(Duration::from_secs(61)).await;

    let err = svc.submit.handle(say(id, "bus")).await.unwrap_err();
    assert_eq!(err, SurveyError::expired(id));

    let turn = svc
        .start
        .handle(StartSessionCommand { session_id: Some(id) })
        .await
        .unwrap();
    assert_eq!(turn.kind, TurnKind::Welcome);
    assert_eq!(turn.current_question.unwrap().prompt, "Do you own a car?");
}

#[tokio::test(start_paused = true)]
async fn completed_session_is_not_reopened_after_expiry() {
    let sink = InMemoryResultSink::new();
    let svc = service(
        Arc::new(InMemoryCatalogSource::new(car_survey())),
        Arc::new(FirstOptionClassifier {
            delay: Duration::ZERO,
        }),
        Arc::new(sink.clone()),
        RegistryConfig {
            ttl: Duration::from_secs(60),
            tombstone_retention: Duration::from_secs(600),
        },
    )
    .await;
    let id = svc
        .start
        .handle(StartSessionCommand::default())
        .await
        .unwrap()
        .session_id;
    svc.submit.handle(say(id, "yes")).await.unwrap();
    let done = svc.submit.handle(say(id, "bus")).await.unwrap();
    assert!(done.completed);

    tokio::time::advance(Duration::from_secs(61)).await;

    let err = svc
        .start
        .handle(StartSessionCommand { session_id: Some(id) })
        .await
        .unwrap_err();
    assert_eq!(err, SurveyError::expired(id));
    assert_eq!(
        svc.submit.handle(say(id, "yes")).await.unwrap_err(),
        SurveyError::expired(id)
    );
    assert_eq!(svc.registry.len().await, 0);
    assert_eq!(sink.count().await, 1);
}

#[tokio::test]
async fn reload_does_not_move_sessions_already_in_flight() {
    let source = Arc::new(InMemoryCatalogSource::new(car_survey()));
    let svc = service(
        source.clone(),
        Arc::new(FirstOptionClassifier {
            delay: Duration::ZERO,
        }),
        Arc::new(InMemoryResultSink::new()),
        RegistryConfig::default(),
    )
    .await;
    let old = svc
        .start
        .handle(StartSessionCommand::default())
        .await
        .unwrap()
        .session_id;

    source
        .replace(vec![Question::new(
            "new-1",
            "Brand new question?",
            Cardinality::Single,
            vec![AnswerOption::new("N1", "sure")],
        )])
        .await;
    assert_eq!(svc.reload.handle().await.unwrap().question_count, 1);

    let turn = svc.submit.handle(say(old, "yes")).await.unwrap();
    assert_eq!(turn.current_question.unwrap().prompt, "Which do you use?");

    let fresh = svc.start.handle(StartSessionCommand::default()).await.unwrap();
    assert_eq!(fresh.current_question.unwrap().prompt, "Brand new question?");
}

// =============================================================================
// File-backed Adapters
// =============================================================================

#[tokio::test]
async fn file_catalog_and_json_results_end_to_end() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("questions.json");
    tokio::fs::write(
        &catalog_path,
        r#"[
            {"id": 1, "question": "Tea or coffee?", "type": "single_choice",
             "options": [{"code": "T", "text": "Tea"}, {"code": "C", "text": "Coffee"}]}
        ]"#,
    )
    .await
    .unwrap();
    let results_dir = dir.path().join("results");

    let svc = service(
        Arc::new(FileCatalogSource::new(&catalog_path)),
        llm_classifier(MockAIProvider::new().with_response("C")),
        Arc::new(JsonFileResultSink::new(&results_dir)),
        RegistryConfig::default(),
    )
    .await;
    let id = svc
        .start
        .handle(StartSessionCommand::default())
        .await
        .unwrap()
        .session_id;

    let turn = svc.submit.handle(say(id, "coffee please")).await.unwrap();
    assert_eq!(turn.results_saved, Some(true));

    let mut entries = tokio::fs::read_dir(&results_dir).await.unwrap();
    let entry = entries.next_entry().await.unwrap().unwrap();
    let name = entry.file_name().to_string_lossy().to_string();
    assert!(name.starts_with(&format!("survey_{}_", id)));
    assert!(name.ends_with(".json"));

    let content = tokio::fs::read_to_string(entry.path()).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["session_id"], id.to_string());
    assert_eq!(json["answers"][0]["question_id"], 1);
    assert_eq!(json["answers"][0]["question"], "Tea or coffee?");
    assert_eq!(json["answers"][0]["answer_codes"][0], "C");
    assert_eq!(json["answers"][0]["original_answer"], "coffee please");

    let stored: SurveyResult = serde_json::from_str(&content).unwrap();
    assert_eq!(stored.session_id, id);
    assert_eq!(stored.answers[0].matched_codes, vec![OptionCode::from("C")]);
}
