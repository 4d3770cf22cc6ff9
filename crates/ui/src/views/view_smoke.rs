use lecture_core::model::{
    ASSISTANT_GREETING, Flashcard, LectureSession, OptionKey, QuizItem, Reference,
    SessionSnapshot, Transcript,
};
use lecture_core::time::fixed_now;
use services::SessionRepository;

use super::test_harness::{ViewKind, setup_view_harness};

fn sample_snapshot() -> SessionSnapshot {
    SessionSnapshot::new(
        LectureSession::new("An overview of photosynthesis.", "Photosynthesis converts light."),
        vec![QuizItem {
            question: "What do plants absorb?".into(),
            option_a: "Light".into(),
            option_b: "Sound".into(),
            option_c: "Heat".into(),
            option_d: "Radio waves".into(),
            correct_answer: OptionKey::A,
            answered: false,
            selected_option: None,
        }],
        vec![
            Flashcard {
                question: "What pigment drives photosynthesis?".into(),
                answer: "Chlorophyll".into(),
            },
            Flashcard {
                question: "Where does it happen?".into(),
                answer: "Chloroplasts".into(),
            },
        ],
        vec![Reference {
            url: "https://example.org/photosynthesis".into(),
            description: "A primer on light reactions.".into(),
        }],
        Transcript::seeded("Photosynthesis converts light."),
        fixed_now(),
    )
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_summary_and_video() {
    let harness = setup_view_harness(ViewKind::Home);
    let mut snapshot = sample_snapshot();
    snapshot.session.media_url = Some("https://cdn.example/lecture.mp4".into());
    harness
        .store
        .replace_snapshot(&snapshot)
        .await
        .expect("seed snapshot");

    let mut harness = harness;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Speech Overview"), "missing overview in {html}");
    assert!(
        html.contains("An overview of photosynthesis."),
        "missing summary in {html}"
    );
    assert!(
        html.contains("https://cdn.example/lecture.mp4"),
        "missing video url in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Upload"),
        "missing upload prompt in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn chatbot_view_smoke_renders_greeting() {
    let mut harness = setup_view_harness(ViewKind::Chatbot);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains(ASSISTANT_GREETING), "missing greeting in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn chatbot_view_smoke_restores_persisted_turns() {
    let harness = setup_view_harness(ViewKind::Chatbot);
    let mut snapshot = sample_snapshot();
    snapshot
        .transcript
        .push_user("Why are leaves green?")
        .expect("push user turn");
    snapshot
        .transcript
        .push_assistant("Because chlorophyll reflects green light.");
    harness
        .store
        .replace_snapshot(&snapshot)
        .await
        .expect("seed snapshot");

    let mut harness = harness;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Why are leaves green?"), "missing user turn in {html}");
    assert!(
        html.contains("Because chlorophyll reflects green light."),
        "missing reply in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_question_and_options() {
    let harness = setup_view_harness(ViewKind::Quiz);
    harness
        .store
        .replace_snapshot(&sample_snapshot())
        .await
        .expect("seed snapshot");

    let mut harness = harness;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("What do plants absorb?"),
        "missing question in {html}"
    );
    assert!(html.contains("Radio waves"), "missing option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No quiz available"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_smoke_shows_first_question_face() {
    let harness = setup_view_harness(ViewKind::Flashcards);
    harness
        .store
        .replace_snapshot(&sample_snapshot())
        .await
        .expect("seed snapshot");

    let mut harness = harness;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("What pigment drives photosynthesis?"),
        "missing question face in {html}"
    );
    assert!(html.contains("Card 1 of 2"), "missing counter in {html}");
    assert!(
        !html.contains("Chlorophyll"),
        "answer face leaked into {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn further_knowledge_smoke_lists_reference_links() {
    let harness = setup_view_harness(ViewKind::FurtherKnowledge);
    harness
        .store
        .replace_snapshot(&sample_snapshot())
        .await
        .expect("seed snapshot");

    let mut harness = harness;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("https://example.org/photosynthesis"),
        "missing link in {html}"
    );
    assert!(
        html.contains("A primer on light reactions."),
        "missing description in {html}"
    );
}
