//! Question bank loading and rewriting.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use indexmap::IndexSet;
use serde_json::Value;

use crate::error::{QuizbankError, Result};
use crate::question::Question;

/// Where the bank lives relative to the app project root.
pub const DEFAULT_BANK_PATH: &str = "Resources/questions/questions_ja3.json";

/// An ordered list of question records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Create a bank from records, keeping their order.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Load a bank from a JSON file.
    ///
    /// The file must hold a JSON array whose elements are all objects.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use quizbank::QuestionBank;
    ///
    /// let bank = QuestionBank::load("Resources/questions/questions_ja3.json").unwrap();
    /// println!("{} questions", bank.len());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|e| QuizbankError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        parse(&text, path)
    }

    /// Parse a bank from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        parse(text, Path::new("<input>"))
    }

    /// Serialize as pretty JSON: two-space indent, non-ASCII kept as-is,
    /// one trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.questions)?;
        out.push('\n');
        Ok(out)
    }

    /// Overwrite `path` with the serialized bank.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_json_string()?;

        let io_err = |e: std::io::Error| QuizbankError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes()).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        self.questions
            .iter()
            .map(Question::category)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<Question>> for QuestionBank {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl IntoIterator for QuestionBank {
    type Item = Question;
    type IntoIter = std::vec::IntoIter<Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

fn parse(text: &str, path: &Path) -> Result<QuestionBank> {
    let value: Value = serde_json::from_str(text).map_err(|e| QuizbankError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(QuizbankError::NotAList {
                path: path.to_path_buf(),
                found: json_kind(&other),
            });
        }
    };

    let questions = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(Question::from(map)),
            other => Err(QuizbankError::NotAnObject {
                path: path.to_path_buf(),
                index,
                found: json_kind(&other),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuestionBank { questions })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
