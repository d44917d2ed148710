use crate::consts;
use crate::maps::MapVariant;
use crate::util::error_chain;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The contents of a high scores file: a JSON object mapping keys of the form
/// `snakeHighScore_<map>` to integers.  Keys that aren't ours are preserved
/// when the file is rewritten.
type ScoreTable = BTreeMap<String, Value>;

/// Durable storage for the best score achieved on each map
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreStore(Backend);

#[derive(Clone, Debug, Eq, PartialEq)]
enum Backend {
    File(PathBuf),
    Memory(BTreeMap<String, u32>),
}

impl HighScoreStore {
    /// A store backed by the JSON file at `path`.  The file is reread on
    /// every lookup and need not exist yet.
    pub(crate) fn file(path: PathBuf) -> HighScoreStore {
        HighScoreStore(Backend::File(path))
    }

    /// A store that forgets everything when the program exits
    pub(crate) fn memory() -> HighScoreStore {
        HighScoreStore(Backend::Memory(BTreeMap::new()))
    }

    /// Return the default high scores file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("snakegrid").join("highscores.json"))
    }

    pub(crate) fn key(map: MapVariant) -> String {
        format!("{}_{map}", consts::HIGH_SCORE_NAMESPACE)
    }

    /// Return the high score for `map`.  A missing or unreadable score is 0.
    pub(crate) fn get(&self, map: MapVariant) -> u32 {
        let key = HighScoreStore::key(map);
        match &self.0 {
            Backend::Memory(scores) => scores.get(&key).copied().unwrap_or_default(),
            Backend::File(path) => match load(path) {
                Ok(table) => table.get(&key).map_or(0, score_value),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %error_chain(&e), "Could not read high scores");
                    0
                }
            },
        }
    }

    /// Store `score` as the high score for `map` if it beats the current one.
    /// Failures to write are logged and otherwise ignored.
    pub(crate) fn record(&mut self, map: MapVariant, score: u32) {
        let key = HighScoreStore::key(map);
        match &mut self.0 {
            Backend::Memory(scores) => {
                let best = scores.entry(key).or_default();
                if score > *best {
                    *best = score;
                }
            }
            Backend::File(path) => {
                if let Err(e) = update(path, key, score) {
                    tracing::warn!(path = %path.display(), error = %error_chain(&e), "Could not save high score");
                } else {
                    tracing::debug!(%map, score, "Saved high score");
                }
            }
        }
    }
}

/// Interpret a stored value as a score; anything other than a non-negative
/// integer is 0, and values too large for a `u32` are capped.
fn score_value(v: &Value) -> u32 {
    v.as_u64()
        .map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

fn load(path: &Path) -> Result<ScoreTable, LoadError> {
    let src = match fs_err::read(path) {
        Ok(src) => src,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ScoreTable::new()),
        Err(e) => return Err(LoadError::read(e)),
    };
    serde_json::from_slice(&src).map_err(LoadError::deserialize)
}

fn save(path: &Path, table: &ScoreTable) -> Result<(), SaveError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
    }
    let mut src = serde_json::to_string_pretty(table).map_err(SaveError::serialize)?;
    src.push('\n');
    fs_err::write(path, &src).map_err(SaveError::write)?;
    Ok(())
}

fn update(path: &Path, key: String, score: u32) -> Result<(), SaveError> {
    // A corrupt file is replaced rather than blocking all future saves.
    let mut table = load(path).unwrap_or_default();
    if table.get(&key).map_or(0, score_value) >= score {
        return Ok(());
    }
    table.insert(key, Value::from(score));
    save(path, &table)
}

#[derive(Debug, Error)]
#[error("Failed to save high scores to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high scores")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high scores to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high scores from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high scores file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high scores")]
    Deserialize(#[source] serde_json::Error),
}
