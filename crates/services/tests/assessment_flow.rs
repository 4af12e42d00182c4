use services::{AssessmentError, AssessmentPhase, AssessmentService, QuestionBank};
use study_core::model::{Advance, Answer, Question, QuestionId, SessionError, TemplateId};
use study_core::time::fixed_clock;

fn scenario_questions() -> Vec<Question> {
    vec![
        Question::multiple_choice(QuestionId::new(1), "Q1", ["a", "b", "c"], 0, "").unwrap(),
        Question::true_false(QuestionId::new(2), "Q2", true, "").unwrap(),
        Question::multiple_choice(QuestionId::new(3), "Q3", ["a", "b", "c"], 2, "").unwrap(),
        Question::free_text(QuestionId::new(4), "Q4", "Paris", "").unwrap(),
    ]
}

fn expected_percent(questions: &[Question], answers: &[Answer]) -> u8 {
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.expected_answer() == **a)
        .count();
    (100.0 * correct as f64 / questions.len() as f64).round() as u8
}

#[test]
fn case_sensitive_free_text_scores_half() {
    let questions = scenario_questions();
    let answers = vec![
        Answer::Choice(0),
        Answer::Boolean(true),
        Answer::Choice(1),
        Answer::Text("paris".into()),
    ];
    let mut svc = AssessmentService::new(fixed_clock());
    svc.start(&questions).unwrap();

    let mut last = None;
    for answer in answers.iter().cloned() {
        svc.answer_current(answer).unwrap();
        last = Some(svc.advance().unwrap());
    }

    let Some(Advance::Completed(score)) = last else {
        panic!("advancing from the last question should complete, got {last:?}");
    };
    assert_eq!(score.percent(), 50);
    assert_eq!(score.percent(), expected_percent(&questions, &answers));
    assert_eq!(score.correct(), 2);
    assert_eq!(score.incorrect(), 2);
    assert_eq!(svc.phase(), AssessmentPhase::Completed);
}

#[test]
fn score_matches_independent_count_for_every_answer_mix() {
    let questions = scenario_questions();
    let options = [
        [Answer::Choice(0), Answer::Choice(2)],
        [Answer::Boolean(true), Answer::Boolean(false)],
        [Answer::Choice(2), Answer::Choice(0)],
        [Answer::Text("Paris".into()), Answer::Text("Lyon".into())],
    ];

    for mask in 0_u8..16 {
        let answers: Vec<Answer> = options
            .iter()
            .enumerate()
            .map(|(i, pair)| pair[usize::from((mask >> i) & 1)].clone())
            .collect();

        let mut svc = AssessmentService::new(fixed_clock());
        svc.start(&questions).unwrap();
        for (position, answer) in answers.iter().cloned().enumerate() {
            svc.submit_answer(position, answer).unwrap();
        }
        let score = svc.complete().unwrap();

        assert_eq!(
            score.percent(),
            expected_percent(&questions, &answers),
            "mask {mask:04b}"
        );
    }
}

#[test]
fn complete_twice_keeps_the_score() {
    let mut svc = AssessmentService::new(fixed_clock());
    svc.start(&scenario_questions()).unwrap();
    svc.submit_answer(0, Answer::Choice(0)).unwrap();

    let first = svc.complete().unwrap();
    let second = svc.complete().unwrap();

    assert_eq!(first, second);
    assert_eq!(svc.score(), Some(first));
}

#[test]
fn reset_returns_to_a_clean_slate() {
    let mut svc = AssessmentService::new(fixed_clock());
    svc.start(&scenario_questions()).unwrap();
    svc.submit_answer(0, Answer::Choice(0)).unwrap();
    svc.submit_answer(3, Answer::Text("Paris".into())).unwrap();

    svc.reset();

    assert_eq!(svc.phase(), AssessmentPhase::NotStarted);
    assert!(svc.session().is_none());
    assert_eq!(svc.score(), None);
    assert_eq!(svc.advance(), Err(AssessmentError::NotStarted));

    let session = svc.start(&scenario_questions()).unwrap();
    assert!(session.answers().is_empty());
    assert_eq!(session.position(), 0);
}

#[test]
fn rejected_calls_leave_the_session_unchanged() {
    let mut svc = AssessmentService::new(fixed_clock());
    svc.start(&scenario_questions()).unwrap();
    let before = svc.session().cloned();

    assert_eq!(
        svc.advance(),
        Err(AssessmentError::Session(SessionError::Unanswered {
            position: 0
        }))
    );
    assert_eq!(
        svc.submit_answer(10, Answer::Choice(0)),
        Err(AssessmentError::Session(SessionError::PositionOutOfRange {
            position: 10,
            len: 4
        }))
    );

    assert_eq!(svc.session().cloned(), before);
}

#[test]
fn completed_session_rejects_answers_until_reset() {
    let mut svc = AssessmentService::new(fixed_clock());
    svc.start(&scenario_questions()).unwrap();
    svc.complete().unwrap();

    assert_eq!(
        svc.submit_answer(0, Answer::Choice(0)),
        Err(AssessmentError::Session(SessionError::Completed))
    );
    assert_eq!(
        svc.start(&scenario_questions()).unwrap_err(),
        AssessmentError::AlreadyStarted
    );

    svc.reset();
    assert_eq!(svc.phase(), AssessmentPhase::NotStarted);
}

#[test]
fn templates_start_from_the_bank() {
    let bank = QuestionBank::builtin().unwrap();
    let mut svc = AssessmentService::new(fixed_clock());

    assert_eq!(
        svc.start_template(&bank, TemplateId::new(42)).unwrap_err(),
        AssessmentError::UnknownTemplate(TemplateId::new(42))
    );
    assert_eq!(svc.phase(), AssessmentPhase::NotStarted);

    let session = svc.start_template(&bank, TemplateId::new(2)).unwrap();
    assert_eq!(session.len(), bank.questions().len());
    assert_eq!(svc.phase(), AssessmentPhase::InProgress);
}
