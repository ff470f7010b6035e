//! JSON parsing and the async one-shot loader.

use log::{info, warn};
use serde_json::{Map, Value};
use std::path::Path;

use super::errors::{LoadError, LoadResult};
use super::records::{GameData, QuestionRecord, TeamRecord};
use crate::game::TeamId;

/// Read both data files concurrently and parse them.
///
/// # Errors
///
/// Fails if either file can't be read, either document isn't valid JSON,
/// or the questions document has no `questions` array.
pub async fn load_game_data(
    teams_path: impl AsRef<Path>,
    questions_path: impl AsRef<Path>,
) -> LoadResult<GameData> {
    let (teams_json, questions_json) = tokio::try_join!(
        read_document(teams_path.as_ref()),
        read_document(questions_path.as_ref())
    )?;
    parse_game_data(&teams_json, &questions_json)
}

async fn read_document(path: &Path) -> LoadResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Parse the teams and questions documents.
///
/// The teams document is lenient: anything short of two usable team
/// entries falls back to the default pair. Question records missing a
/// required field are skipped with a warning.
///
/// # Errors
///
/// Fails if either document isn't valid JSON or the questions document has
/// no `questions` array.
pub fn parse_game_data(teams_json: &str, questions_json: &str) -> LoadResult<GameData> {
    let teams_doc: Value = serde_json::from_str(teams_json).map_err(|source| LoadError::Json {
        document: "teams",
        source,
    })?;
    let questions_doc: Value =
        serde_json::from_str(questions_json).map_err(|source| LoadError::Json {
            document: "questions",
            source,
        })?;

    let data = GameData {
        teams: parse_teams(&teams_doc),
        questions: parse_questions(&questions_doc)?,
    };
    log_summary(&data.questions);
    Ok(data)
}

fn parse_teams(doc: &Value) -> [TeamRecord; 2] {
    match doc.get("teams").and_then(Value::as_array) {
        Some(teams) if teams.len() >= 2 => [
            team_record(&teams[0], TeamId::A),
            team_record(&teams[1], TeamId::B),
        ],
        _ => {
            info!("No team pair in teams data, using defaults");
            [TeamId::A.into(), TeamId::B.into()]
        }
    }
}

fn team_record(value: &Value, id: TeamId) -> TeamRecord {
    let default = TeamRecord::from(id);
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map_or(default.name, str::to_string);
    let members = value
        .get("members")
        .and_then(Value::as_array)
        .map(|members| {
            members
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    TeamRecord::new(name, members)
}

fn parse_questions(doc: &Value) -> LoadResult<Vec<QuestionRecord>> {
    let raw = doc
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(LoadError::InvalidQuestions)?;

    let mut questions = Vec::with_capacity(raw.len());
    for (idx, value) in raw.iter().enumerate() {
        match value.as_object().and_then(question_record) {
            Some(record) => questions.push(record),
            None => warn!("Skipping invalid question at index {idx}: {value}"),
        }
    }
    Ok(questions)
}

fn question_record(fields: &Map<String, Value>) -> Option<QuestionRecord> {
    Some(QuestionRecord {
        id: text_field(fields, "id")?,
        category: text_field(fields, "category")?,
        prompt: text_field(fields, "prompt")?,
        answer: text_field(fields, "answer")?,
        notes: text_field(fields, "notes").unwrap_or_default(),
    })
}

/// A non-empty string, or a non-zero number rendered as text (numeric ids
/// and answers are common in hand-written question files). Zero counts as
/// missing, like an empty string.
fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn log_summary(questions: &[QuestionRecord]) {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for question in questions {
        match counts.iter_mut().find(|(name, _)| *name == question.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((question.category.as_str(), 1)),
        }
    }
    let summary: Vec<String> = counts
        .iter()
        .map(|(name, count)| format!("{name}: {count}"))
        .collect();
    info!(
        "Loaded {} question(s) in {} categories [{}]",
        questions.len(),
        counts.len(),
        summary.join(", ")
    );
}
