//! End-to-end conversation flow: bootstrap, chat, background retrain,
//! snapshot persistence and resume.

use solace_core::config::EngineConfig;
use solace_core::EmotionLabel;
use solace_engine::ResponsePipeline;
use std::path::PathBuf;
use std::time::Duration;

fn config(dir: &tempfile::TempDir) -> EngineConfig {
    EngineConfig {
        snapshot_path: dir
            .path()
            .join("model.json")
            .to_string_lossy()
            .into_owned(),
        ..EngineConfig::default()
    }
}

#[tokio::test]
async fn test_full_conversation_and_resume() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(&dir);
    let snapshot_path = PathBuf::from(cfg.snapshot_path.clone());

    let pipeline = ResponsePipeline::load_or_bootstrap(cfg.clone());
    let seeded = pipeline.turn_count().await;
    assert!(seeded >= cfg.min_training_samples);
    assert_eq!(pipeline.model_trained_on(), Some(seeded));

    // A greeting is answered without touching history.
    let reply = pipeline.process("good evening").await;
    assert!(!reply.text.is_empty());
    assert_eq!(pipeline.turn_count().await, seeded);

    // Ordinary distress gets a supportive, non-crisis reply.
    let reply = pipeline.process("i'm really anxious about my exam tomorrow").await;
    assert!(!reply.is_crisis);
    assert_ne!(reply.emotion, EmotionLabel::Neutral);

    // Chat until the retrain cadence fires and a snapshot lands on disk.
    let inputs = [
        "work stress is wearing me down",
        "i feel so lonely these days",
        "everything is overwhelming",
        "so sad and tired all the time",
        "i keep doubting myself",
        "angry at my friend again",
        "scared i will fail",
        "grieving my grandmother",
        "cannot sleep, mind racing",
    ];
    for input in inputs {
        pipeline.process(input).await;
        if pipeline.turn_count().await % cfg.retrain_every == 0 {
            break;
        }
    }

    for _ in 0..150 {
        if snapshot_path.exists() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(snapshot_path.exists());

    // A fresh pipeline resumes from the snapshot instead of reseeding.
    let turns_before = pipeline.turn_count().await;
    let resumed = ResponsePipeline::load_or_bootstrap(cfg);
    assert_eq!(resumed.turn_count().await, turns_before);
    assert!(resumed.model_trained_on().is_some());
}

#[tokio::test]
async fn test_crisis_flow_is_always_flagged() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ResponsePipeline::load_or_bootstrap(config(&dir));

    for input in [
        "i want to end my life",
        "i am going to hurt myself",
        "nobody would miss me if i was gone",
    ] {
        let reply = pipeline.process(input).await;
        assert!(reply.is_crisis, "expected crisis for: {input}");
        assert!(reply.text.contains("988"));
    }
}

#[tokio::test]
async fn test_similar_input_reuses_learned_response() {
    let dir = tempfile::tempdir().unwrap();
    let pipeline = ResponsePipeline::load_or_bootstrap(config(&dir));

    // The bootstrap set contains an exam-anxiety template; a near-identical
    // utterance should retrieve a stored response rather than error out.
    let reply = pipeline
        .process("I'm feeling really anxious about my upcoming exam")
        .await;
    assert!(!reply.is_crisis);
    assert_eq!(reply.emotion, EmotionLabel::Anxiety);
    assert!(!reply.text.is_empty());
}
