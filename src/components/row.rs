use serde_json::Value;
use yew::prelude::*;

use crate::coords::CELL_SIZE;
use crate::model::letter_label;

#[derive(Properties, PartialEq, Clone)]
pub struct RowProps {
    pub row: Vec<Value>,
}

#[function_component(Row)]
pub fn row(props: &RowProps) -> Html {
    // Cells must stay exactly CELL_SIZE square or overlay lines drift.
    let cell_style = format!(
        "width:{s}px; min-width:{s}px; height:{s}px; padding:0; box-sizing:border-box; text-align:center; vertical-align:middle; font-size:22px; font-weight:600; border:1px solid #2f3641;",
        s = CELL_SIZE
    );
    html! {
        <tr>
            { for props.row.iter().map(|v| html! { <td style={cell_style.clone()}>{ letter_label(v) }</td> }) }
        </tr>
    }
}
