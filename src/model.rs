//! Wire and geometry types for the word search grid.
//! Grid and word records are owned by the server; unknown fields are kept so
//! they post back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Page-space position of the grid's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Render-only segment between two cell centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub from_cell: Cell,
    pub to_cell: Cell,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub from_cell: Cell,
    pub to_cell: Cell,
    #[serde(default)]
    pub is_selected: bool,
    /// Anything else the server attaches (word text, direction, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Word {
    /// Display text, when the server sent one.
    pub fn text(&self) -> Option<&str> {
        ["word", "text", "value"]
            .iter()
            .find_map(|k| self.extra.get(*k).and_then(Value::as_str))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    #[serde(rename = "gridIn2D", default)]
    pub grid_in_2d: Vec<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Grid {
    pub fn rows(&self) -> usize {
        self.grid_in_2d.len()
    }
}

/// Text shown for a single grid entry. Letters are opaque to the client.
pub fn letter_label(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Object(o) => ["letter", "value", "char"]
            .iter()
            .find_map(|k| o.get(*k).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| v.to_string()),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewGridResponse {
    pub grid: Grid,
    #[serde(default)]
    pub words: Vec<Word>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectRequest<'a> {
    pub words: &'a [Word],
    pub grid: &'a Grid,
    pub selection: Selection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectResponse {
    #[serde(default)]
    pub is_valid_word: bool,
    #[serde(default)]
    pub words: Option<Vec<Word>>,
}

/// Words after a select response: replaced wholesale only when the server
/// accepted the selection and sent a list.
pub fn accepted_words(response: &SelectResponse) -> Option<Vec<Word>> {
    match (response.is_valid_word, &response.words) {
        (true, Some(words)) => Some(words.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn word(from: (i32, i32), to: (i32, i32), selected: bool) -> Word {
        Word {
            from_cell: Cell::new(from.0, from.1),
            to_cell: Cell::new(to.0, to.1),
            is_selected: selected,
            extra: Map::new(),
        }
    }

    #[test]
    fn new_grid_response_parses_server_shape() {
        let raw = json!({
            "grid": { "gridIn2D": [["A", "B"], ["C", "D"]], "width": 2 },
            "words": [
                { "word": "AB", "fromCell": { "row": 0, "col": 0 }, "toCell": { "row": 0, "col": 1 }, "isSelected": false }
            ]
        });
        let parsed: NewGridResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.grid.rows(), 2);
        assert_eq!(parsed.grid.extra.get("width"), Some(&json!(2)));
        assert_eq!(parsed.words.len(), 1);
        assert_eq!(parsed.words[0].text(), Some("AB"));
        assert_eq!(parsed.words[0].to_cell, Cell::new(0, 1));
    }

    #[test]
    fn select_request_uses_camel_case_and_keeps_extra_fields() {
        let mut w = word((2, 3), (2, 5), false);
        w.extra.insert("word".into(), json!("CAT"));
        let words = vec![w];
        let grid = Grid::default();
        let req = SelectRequest {
            words: &words,
            grid: &grid,
            selection: Selection {
                from_cell: Cell::new(2, 3),
                to_cell: Cell::new(2, 5),
            },
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["selection"]["fromCell"], json!({ "row": 2, "col": 3 }));
        assert_eq!(v["selection"]["toCell"], json!({ "row": 2, "col": 5 }));
        assert_eq!(v["words"][0]["word"], json!("CAT"));
        assert_eq!(v["words"][0]["isSelected"], json!(false));
        assert!(v["grid"].get("gridIn2D").is_some());
    }

    #[test]
    fn select_response_without_words_parses() {
        let r: SelectResponse = serde_json::from_value(json!({ "isValidWord": false })).unwrap();
        assert!(!r.is_valid_word);
        assert!(r.words.is_none());
    }

    #[test]
    fn rejected_selection_yields_no_words() {
        let rejected = SelectResponse {
            is_valid_word: false,
            words: Some(vec![word((0, 0), (0, 2), true)]),
        };
        assert_eq!(accepted_words(&rejected), None);
    }

    #[test]
    fn valid_selection_yields_server_words() {
        let next = vec![word((0, 0), (0, 2), true)];
        let accepted = SelectResponse {
            is_valid_word: true,
            words: Some(next.clone()),
        };
        assert_eq!(accepted_words(&accepted), Some(next));
        let no_list = SelectResponse {
            is_valid_word: true,
            words: None,
        };
        assert_eq!(accepted_words(&no_list), None);
    }

    #[test]
    fn letter_label_handles_strings_and_objects() {
        assert_eq!(letter_label(&json!("Q")), "Q");
        assert_eq!(letter_label(&json!({ "letter": "Z", "row": 1 })), "Z");
        assert_eq!(letter_label(&json!(7)), "7");
        assert_eq!(letter_label(&Value::Null), "");
    }
}
