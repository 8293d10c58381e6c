use lingo_core::access::ADMIN_USER_IDS;
use lingo_core::model::{
    Challenge, ChallengeId, ChallengeKind, Lesson, LessonId, UserProgress, UserSubscription,
};
use services::StaticIdentity;
use storage::repository::{LessonRepository, ProgressRepository, Storage};

use super::test_harness::{QuizFixture, ViewKind, setup_view_harness};

const USER: &str = "user_learner";

fn quiz(hearts: i32, percentage: f64, subscription: Option<UserSubscription>) -> ViewKind {
    ViewKind::Quiz(QuizFixture {
        hearts,
        percentage,
        subscription,
    })
}

fn fixture(hearts: i32, percentage: f64) -> QuizFixture {
    QuizFixture {
        hearts,
        percentage,
        subscription: None,
    }
}

/// Five challenges per lesson; `completed` lists their 1-based order.
async fn seed_lesson_as(storage: &Storage, lesson: u64, title: &str, completed: &[u64]) {
    let lesson_id = LessonId::new(lesson);
    storage
        .lessons
        .upsert_lesson(&Lesson::new(lesson_id, title).unwrap())
        .await
        .unwrap();
    for order in 1..=5_u64 {
        let challenge = Challenge::new(
            ChallengeId::new(lesson * 10 + order),
            lesson_id,
            ChallengeKind::Select,
            format!("Question {order}"),
            u32::try_from(order).unwrap(),
        )
        .unwrap();
        storage.lessons.upsert_challenge(&challenge).await.unwrap();
    }
    for order in completed {
        storage
            .progress
            .mark_completed(USER, ChallengeId::new(lesson * 10 + order))
            .await
            .unwrap();
    }
}

async fn seed_lesson(storage: &Storage, hearts: i32, completed: &[u64]) {
    storage
        .progress
        .upsert_progress(&UserProgress::new(USER).with_hearts(hearts))
        .await
        .unwrap();
    seed_lesson_as(storage, 1, "Nouns", completed).await;
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_header_receives_initial_hearts_and_percentage() {
    let mut harness = setup_view_harness(quiz(5, 40.0, None), StaticIdentity::signed_out());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(r#"<span class="quiz-hearts-count">5</span>"#),
        "missing hearts in {html}"
    );
    assert!(html.contains(r#"aria-valuenow="40""#), "missing percentage in {html}");
    assert!(html.contains("width: 40%"), "missing progress width in {html}");
    assert!(html.contains("Exit lesson"), "missing exit in {html}");
    assert!(html.contains(r#"data-challenges="0""#), "missing challenge count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_keeps_seeded_values_when_props_change() {
    let mut harness = setup_view_harness(
        ViewKind::ReseededQuiz {
            first: fixture(5, 40.0),
            second: fixture(2, 90.0),
        },
        StaticIdentity::signed_out(),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("props: 2 hearts, 90%"), "props were not updated in {html}");
    assert!(
        html.contains(r#"<span class="quiz-hearts-count">5</span>"#),
        "hearts were re-seeded in {html}"
    );
    assert!(html.contains(r#"aria-valuenow="40""#), "percentage was re-seeded in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_header_shows_unlimited_hearts_for_active_subscription() {
    let mut harness = setup_view_harness(
        quiz(5, 40.0, Some(UserSubscription::active())),
        StaticIdentity::signed_out(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains(r#"<span class="quiz-hearts-count">∞</span>"#),
        "missing unlimited hearts in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_header_counts_hearts_without_active_subscription() {
    for subscription in [Some(UserSubscription::inactive()), None] {
        let mut harness =
            setup_view_harness(quiz(3, 0.0, subscription), StaticIdentity::signed_out());
        harness.rebuild();
        let html = harness.render();
        assert!(
            html.contains(r#"<span class="quiz-hearts-count">3</span>"#),
            "missing hearts count for {subscription:?} in {html}"
        );
        assert!(!html.contains('∞'), "unexpected unlimited hearts in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn closed_modals_render_nothing() {
    let mut harness = setup_view_harness(
        ViewKind::Modals {
            hearts_open: false,
            practice_open: false,
        },
        StaticIdentity::signed_out(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("modal"), "unexpected modal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn open_hearts_modal_does_not_open_practice_modal() {
    let mut harness = setup_view_harness(
        ViewKind::Modals {
            hearts_open: true,
            practice_open: false,
        },
        StaticIdentity::signed_out(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("You ran out of hearts!"), "missing hearts modal in {html}");
    assert!(html.contains("Get unlimited hearts"), "missing upgrade in {html}");
    assert!(html.contains("No thanks"), "missing dismiss in {html}");
    assert!(!html.contains("Practice lesson"), "unexpected practice modal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn open_practice_modal_renders_its_content() {
    let mut harness = setup_view_harness(
        ViewKind::Modals {
            hearts_open: false,
            practice_open: true,
        },
        StaticIdentity::signed_out(),
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Practice lesson"), "missing practice modal in {html}");
    assert!(html.contains("I understand"), "missing dismiss in {html}");
    assert!(!html.contains("You ran out of hearts!"), "unexpected hearts modal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dismissing_each_modal_closes_only_that_modal() {
    let mut hearts_dismissed = setup_view_harness(
        ViewKind::DismissedModals {
            hearts: true,
            practice: false,
        },
        StaticIdentity::signed_out(),
    );
    hearts_dismissed.rebuild();
    hearts_dismissed.drive_async().await;
    hearts_dismissed.drive_async().await;
    let html = hearts_dismissed.render();
    assert!(!html.contains("hearts-modal"), "hearts modal still open in {html}");
    assert!(html.contains("Practice lesson"), "practice modal closed too in {html}");

    let mut practice_dismissed = setup_view_harness(
        ViewKind::DismissedModals {
            hearts: false,
            practice: true,
        },
        StaticIdentity::signed_out(),
    );
    practice_dismissed.rebuild();
    practice_dismissed.drive_async().await;
    practice_dismissed.drive_async().await;
    let html = practice_dismissed.render();
    assert!(!html.contains("practice-modal"), "practice modal still open in {html}");
    assert!(html.contains("You ran out of hearts!"), "hearts modal closed too in {html}");

    let mut both_dismissed = setup_view_harness(
        ViewKind::DismissedModals {
            hearts: true,
            practice: true,
        },
        StaticIdentity::signed_out(),
    );
    both_dismissed.rebuild();
    both_dismissed.drive_async().await;
    both_dismissed.drive_async().await;
    let html = both_dismissed.render();
    assert!(!html.contains("modal"), "unexpected modal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_view_marks_admins() {
    let mut admin = setup_view_harness(ViewKind::Learn, StaticIdentity::signed_in(ADMIN_USER_IDS[0]));
    admin.rebuild();
    let html = admin.render();
    assert!(html.contains("admin-badge"), "missing admin badge in {html}");
    assert!(html.contains("Continue lesson"), "missing lesson link in {html}");

    let mut learner = setup_view_harness(ViewKind::Learn, StaticIdentity::signed_in(USER));
    learner.rebuild();
    let html = learner.render();
    assert!(!html.contains("admin-badge"), "unexpected admin badge in {html}");

    let mut signed_out = setup_view_harness(ViewKind::Learn, StaticIdentity::signed_out());
    signed_out.rebuild();
    let html = signed_out.render();
    assert!(!html.contains("admin-badge"), "unexpected admin badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_loads_quiz_from_storage() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1), StaticIdentity::signed_in(USER));
    seed_lesson(&harness.storage, 5, &[1, 2]).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Nouns"), "missing lesson title in {html}");
    assert!(
        html.contains(r#"<span class="quiz-hearts-count">5</span>"#),
        "missing hearts in {html}"
    );
    assert!(html.contains(r#"aria-valuenow="40""#), "missing percentage in {html}");
    assert!(!html.contains("modal"), "unexpected modal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_opens_practice_modal_for_finished_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1), StaticIdentity::signed_in(USER));
    seed_lesson(&harness.storage, 5, &[1, 2, 3, 4, 5]).await;
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains(r#"aria-valuenow="100""#), "missing percentage in {html}");
    assert!(html.contains("Practice lesson"), "missing practice modal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_reloads_when_lesson_id_changes() {
    let mut harness = setup_view_harness(
        ViewKind::SwitchingLesson { from: 1, to: 2 },
        StaticIdentity::signed_in(USER),
    );
    seed_lesson(&harness.storage, 5, &[1, 2]).await;
    seed_lesson_as(&harness.storage, 2, "Verbs", &[1, 2, 3, 4, 5]).await;
    harness.rebuild();
    for _ in 0..4 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Verbs"), "second lesson not loaded in {html}");
    assert!(!html.contains("Nouns"), "first lesson still shown in {html}");
    assert!(html.contains(r#"data-lesson="2""#), "quiz not rebuilt in {html}");
    assert!(html.contains(r#"aria-valuenow="100""#), "stale percentage in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_requires_identity() {
    let mut harness = setup_view_harness(ViewKind::Lesson(1), StaticIdentity::signed_out());
    seed_lesson(&harness.storage, 5, &[]).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Sign in to start this lesson."), "missing sign-in in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_reports_missing_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson(99), StaticIdentity::signed_in(USER));
    seed_lesson(&harness.storage, 5, &[]).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("This lesson does not exist."), "missing error in {html}");
}
