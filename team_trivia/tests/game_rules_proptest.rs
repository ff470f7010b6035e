/// Property-based tests for the game rules using proptest
///
/// These tests drive the engine with arbitrary operation sequences and check
/// that rejected transitions never mutate anything and that scoring and
/// turn order hold regardless of the path taken.
use proptest::prelude::*;
use team_trivia::{
    GameData, GameError, LoadError, QuestionPool, QuestionRecord, Screen, TeamId, TeamRecord,
    TriviaGame, Wager,
};

const CATEGORIES: [&str; 3] = ["History", "Science", "Art"];

#[derive(Clone, Debug)]
enum Op {
    BeginSetup(bool),
    Start,
    SelectCategory(usize),
    SelectWager(i64),
    Reveal,
    Pass,
    Correct,
    NoPoints,
    Rename(TeamId, String),
    AddMember(TeamId),
    RemoveMember(TeamId, usize),
    UpdateMember(TeamId, usize),
    StartEdit,
    TempScore(String, String),
    SaveEdit,
    CancelEdit,
}

fn team_strategy() -> impl Strategy<Value = TeamId> {
    prop_oneof![Just(TeamId::A), Just(TeamId::B)]
}

// Wagers near the legal set plus arbitrary values
fn wager_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        prop::sample::select(Wager::ALL.map(Wager::points).to_vec()),
        -20i64..40,
        any::<i64>(),
    ]
}

fn play_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::BeginSetup),
        Just(Op::Start),
        // One past the end picks a category that doesn't exist
        (0..=CATEGORIES.len()).prop_map(Op::SelectCategory),
        wager_strategy().prop_map(Op::SelectWager),
        Just(Op::Reveal),
        Just(Op::Pass),
        Just(Op::Correct),
        Just(Op::NoPoints),
    ]
}

fn edit_op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (team_strategy(), prop_oneof![Just(String::new()), "[a-z ]{0,6}"])
            .prop_map(|(team, name)| Op::Rename(team, name)),
        team_strategy().prop_map(Op::AddMember),
        (team_strategy(), 0usize..3).prop_map(|(team, idx)| Op::RemoveMember(team, idx)),
        (team_strategy(), 0usize..3).prop_map(|(team, idx)| Op::UpdateMember(team, idx)),
        Just(Op::StartEdit),
        (
            prop::sample::select(vec!["team-a", "team-b", "team-x"]),
            prop_oneof![Just("12".to_string()), "-?[0-9]{1,4}", "[a-z]{1,3}"],
        )
            .prop_map(|(key, raw)| Op::TempScore(key.to_string(), raw)),
        Just(Op::SaveEdit),
        Just(Op::CancelEdit),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![3 => play_op_strategy(), 1 => edit_op_strategy()]
}

fn apply(game: &mut TriviaGame, op: &Op) -> Result<(), GameError> {
    match op {
        Op::BeginSetup(granted) => game.begin_setup(*granted),
        Op::Start => game.start_game(),
        Op::SelectCategory(idx) => {
            game.select_category(CATEGORIES.get(*idx).copied().unwrap_or("Nowhere"))
        }
        Op::SelectWager(value) => game.select_wager(*value),
        Op::Reveal => game.reveal_answer(),
        Op::Pass => game.pass_question(),
        Op::Correct => game.mark_correct(),
        Op::NoPoints => game.end_no_points(),
        Op::Rename(team, name) => game.update_team_name(*team, name.clone()),
        Op::AddMember(team) => game.add_team_member(*team, "Member"),
        Op::RemoveMember(team, idx) => game.remove_team_member(*team, *idx),
        Op::UpdateMember(team, idx) => game.update_team_member(*team, *idx, "Renamed"),
        Op::StartEdit => game.start_score_edit(),
        Op::TempScore(key, raw) => game.update_temp_score(key, raw),
        Op::SaveEdit => game.save_score_edit(),
        Op::CancelEdit => game.cancel_score_edit(),
    }
}

fn new_game(per_category: usize) -> TriviaGame {
    let questions = CATEGORIES
        .iter()
        .flat_map(|category| {
            (0..per_category).map(move |n| QuestionRecord {
                id: format!("{category}-{n}"),
                category: category.to_string(),
                prompt: "?".to_string(),
                answer: "!".to_string(),
                notes: String::new(),
            })
        })
        .collect();
    TriviaGame::new(GameData {
        teams: [
            TeamRecord::new("Red", Vec::new()),
            TeamRecord::new("Blue", Vec::new()),
        ],
        questions,
    })
}

fn used_count(pool: &QuestionPool) -> usize {
    pool.categories()
        .flat_map(|c| c.questions.iter())
        .filter(|q| q.used)
        .count()
}

fn all_used(pool: &QuestionPool) -> bool {
    pool.categories()
        .flat_map(|c| c.questions.iter())
        .all(|q| q.used)
}

proptest! {
    #[test]
    fn test_rejected_transitions_never_mutate(
        ops in prop::collection::vec(op_strategy(), 1..80)
    ) {
        let mut game = new_game(2);
        for op in &ops {
            let state_before = game.state().clone();
            let pool_before = game.pool().clone();
            let used_before = used_count(game.pool());

            if apply(&mut game, op).is_err() {
                prop_assert_eq!(game.state(), &state_before, "{:?} mutated state", op);
                prop_assert_eq!(game.pool(), &pool_before, "{:?} mutated pool", op);
                // Repeating a rejected call is still a no-op
                prop_assert!(apply(&mut game, op).is_err());
                prop_assert_eq!(game.state(), &state_before);
            }

            let state = game.state();
            match state.answering_team_id {
                Some(team) => {
                    prop_assert!(state.has_passed);
                    prop_assert_eq!(team, state.choosing_team_id.other());
                }
                None => prop_assert!(!state.has_passed),
            }
            prop_assert!(used_count(game.pool()) >= used_before);
            prop_assert_eq!(game.is_game_complete(), all_used(game.pool()));
        }
    }

    #[test]
    fn test_failed_load_stays_on_error_screen(
        ops in prop::collection::vec(op_strategy(), 1..60)
    ) {
        let mut game = TriviaGame::from_load(Err(LoadError::InvalidQuestions));
        let before = game.state().clone();
        for op in &ops {
            prop_assert!(apply(&mut game, op).is_err(), "{:?} accepted after failed load", op);
            prop_assert_eq!(game.state(), &before);
        }
        prop_assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_wager_accepts_only_fixed_stakes(value in wager_strategy()) {
        let mut game = new_game(1);
        game.start_game().unwrap();
        game.select_category("History").unwrap();

        let result = game.select_wager(value);
        if Wager::ALL.iter().any(|w| w.points() == value) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(game.state().current_wager.map(|w| w.points()), Some(value));
            prop_assert_eq!(game.select_wager(value), Err(GameError::WagerAlreadyLocked));
        } else {
            prop_assert_eq!(result, Err(GameError::InvalidWager(value)));
            prop_assert_eq!(game.state().current_wager, None);
        }
    }

    #[test]
    fn test_turn_alternates_and_scores_conserve(
        cycles in prop::collection::vec(
            (0..CATEGORIES.len(), prop::sample::select(vec![5i64, 10, 15]), any::<bool>(), any::<bool>()),
            1..9
        )
    ) {
        let mut game = new_game(3);
        game.start_game().unwrap();

        for (n, (category, wager, pass, correct)) in cycles.iter().enumerate() {
            // Fall through to the next category with questions left
            let name = (0..CATEGORIES.len())
                .map(|k| CATEGORIES[(category + k) % CATEGORIES.len()])
                .find(|name| game.pool().next_question(name).is_some())
                .unwrap();
            game.select_category(name).unwrap();
            game.select_wager(*wager).unwrap();
            if *pass {
                game.pass_question().unwrap();
            }

            let total_before = game.team(TeamId::A).score + game.team(TeamId::B).score;
            let answering = game.state().answering_team().id;
            let answering_before = game.team(answering).score;

            if *correct || !*pass {
                game.mark_correct().unwrap();
                prop_assert_eq!(game.team(answering).score, answering_before + wager);
                prop_assert_eq!(
                    game.team(TeamId::A).score + game.team(TeamId::B).score,
                    total_before + wager
                );
            } else {
                game.end_no_points().unwrap();
                prop_assert_eq!(
                    game.team(TeamId::A).score + game.team(TeamId::B).score,
                    total_before
                );
            }

            let completed = n + 1;
            let expected = if completed % 2 == 0 { TeamId::A } else { TeamId::B };
            prop_assert_eq!(game.state().choosing_team_id, expected);
            prop_assert_eq!(game.state().current_question_id.as_deref(), None);
        }
    }

    #[test]
    fn test_score_edit_round_trip(
        writes in prop::collection::vec(
            (prop::sample::select(vec!["team-a", "team-b"]), -500i64..500),
            0..10
        ),
        cancel in any::<bool>()
    ) {
        let mut game = new_game(1);
        game.start_score_edit().unwrap();
        for (key, value) in &writes {
            game.update_temp_score(key, &value.to_string()).unwrap();
        }

        if cancel {
            game.cancel_score_edit().unwrap();
            prop_assert_eq!(game.team(TeamId::A).score, 0);
            prop_assert_eq!(game.team(TeamId::B).score, 0);
        } else {
            game.save_score_edit().unwrap();
            for team in TeamId::ALL {
                let last = writes
                    .iter()
                    .rev()
                    .find(|(key, _)| *key == team.as_str())
                    .map_or(0, |(_, value)| *value);
                prop_assert_eq!(game.team(team).score, last);
            }
        }
        prop_assert!(!game.state().editing_scores);
    }
}

#[test]
fn test_exhausting_every_category_reaches_end() {
    let mut game = new_game(2);
    game.start_game().unwrap();
    for category in CATEGORIES.iter().cycle().take(6) {
        assert_eq!(game.state().screen, Screen::Grid);
        game.select_category(category).unwrap();
        game.select_wager(5).unwrap();
        game.mark_correct().unwrap();
    }
    assert_eq!(game.state().screen, Screen::End);
    assert!(game.categories().iter().all(|c| c.disabled));
    for category in CATEGORIES {
        assert!(game.pool().next_question(category).is_none());
    }
}
