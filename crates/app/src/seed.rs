use lingo_core::model::{
    Challenge, ChallengeId, ChallengeKind, ChallengeOption, ChallengeOptionId, Lesson, LessonId,
    UserProgress,
};
use storage::repository::{LessonRepository, ProgressRepository, Storage};

/// Demo content for the desktop shell: one lesson of Spanish nouns.
const CHALLENGES: &[(&str, &[(&str, bool)])] = &[
    (
        "Which one of these is \"the man\"?",
        &[("el hombre", true), ("la mujer", false), ("el robot", false)],
    ),
    (
        "Which one of these is \"the woman\"?",
        &[("la mujer", true), ("el chico", false), ("el hombre", false)],
    ),
    (
        "Which one of these is \"the boy\"?",
        &[("la mujer", false), ("el hombre", false), ("el chico", true)],
    ),
    (
        "\"the man\"",
        &[("el hombre", true), ("la mujer", false), ("el chico", false)],
    ),
    (
        "Which one of these is \"the zombie\"?",
        &[("el hombre", false), ("la mujer", false), ("el zombie", true)],
    ),
];

/// Challenge ids start at `lesson * 100`, option ids at `lesson * 1000`.
/// `None` when the lesson id leaves no room for the whole lesson.
fn id_bases(lesson_id: LessonId) -> Option<(u64, u64)> {
    let base = lesson_id.value().checked_mul(100)?;
    let option_base = base.checked_mul(10)?;
    let option_count: usize = CHALLENGES.iter().map(|(_, options)| options.len()).sum();
    option_base.checked_add(u64::try_from(option_count).ok()?)?;
    Some((base, option_base))
}

/// Seed `lesson_id` and give `user_id` a fresh progress record.
///
/// # Errors
///
/// Returns an error if `lesson_id` is too large to derive demo ids from, or
/// the first validation or storage failure.
pub async fn seed_demo(
    storage: &Storage,
    lesson_id: LessonId,
    user_id: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (base, mut option_id) = id_bases(lesson_id)
        .ok_or_else(|| format!("lesson id {lesson_id} is too large for the demo lesson"))?;

    storage
        .lessons
        .upsert_lesson(&Lesson::new(lesson_id, "Spanish nouns")?)
        .await?;

    for (index, (question, options)) in CHALLENGES.iter().enumerate() {
        let order = u32::try_from(index + 1)?;
        let challenge_id = ChallengeId::new(base + u64::from(order));
        let kind = if index == 3 {
            ChallengeKind::Assist
        } else {
            ChallengeKind::Select
        };
        let challenge = Challenge::new(challenge_id, lesson_id, kind, *question, order)?;
        storage.lessons.upsert_challenge(&challenge).await?;

        for (text, correct) in *options {
            option_id += 1;
            let option =
                ChallengeOption::new(ChallengeOptionId::new(option_id), challenge_id, *text, *correct)?;
            storage.lessons.upsert_option(&option).await?;
        }
    }

    if let Some(user_id) = user_id {
        storage
            .progress
            .upsert_progress(&UserProgress::new(user_id))
            .await?;
    }

    tracing::info!(lesson = %lesson_id, challenges = CHALLENGES.len(), "seeded demo lesson");
    Ok(())
}
