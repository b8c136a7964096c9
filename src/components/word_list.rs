use yew::prelude::*;

use crate::model::Word;

#[derive(Properties, PartialEq, Clone)]
pub struct WordListProps {
    pub words: Vec<Word>,
    pub found: usize,
    pub solved: bool,
}

fn label(w: &Word) -> String {
    match w.text() {
        Some(t) => t.to_string(),
        None => format!(
            "({},{}) to ({},{})",
            w.from_cell.row, w.from_cell.col, w.to_cell.row, w.to_cell.col
        ),
    }
}

#[function_component]
pub fn WordList(props: &WordListProps) -> Html {
    let total = props.words.len();
    html! {
        <div class="word-list" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:180px; font-size:14px;">
            <div style="display:flex; justify-content:space-between; font-weight:600; margin-bottom:8px;">
                <span>{"Words"}</span>
                <span class="word-count" style="font-variant-numeric:tabular-nums;">{ format!("{} / {}", props.found, total) }</span>
            </div>
            <ul style="margin:0; padding:0; list-style:none; display:flex; flex-direction:column; gap:4px;">
                { for props.words.iter().map(|w| {
                    let style = if w.is_selected {
                        "text-decoration:line-through; color:#3fb950;"
                    } else {
                        "color:#c9d1d9;"
                    };
                    html! { <li style={style}>{ label(w) }</li> }
                }) }
            </ul>
            if props.solved {
                <div class="solved" style="margin-top:10px; color:#3fb950; font-weight:600;">{"All words found!"}</div>
            }
        </div>
    }
}
