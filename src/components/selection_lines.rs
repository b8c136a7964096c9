use yew::prelude::*;

use crate::model::Line;

#[derive(Properties, PartialEq, Clone)]
pub struct SelectionLinesProps {
    pub lines: Vec<Line>,
    #[prop_or_default]
    pub active: Option<Line>,
}

fn segment(line: &Line, stroke: &'static str, class: &'static str) -> Html {
    html! {
        <line
            class={class}
            x1={line.from.x.to_string()}
            y1={line.from.y.to_string()}
            x2={line.to.x.to_string()}
            y2={line.to.y.to_string()}
            stroke={stroke}
            stroke-width="30"
            stroke-linecap="round"
            stroke-opacity="0.45"
        />
    }
}

/// Page-space SVG layer. It must not sit inside a positioned ancestor, since
/// line coordinates are page coordinates.
#[function_component(SelectionLines)]
pub fn selection_lines(props: &SelectionLinesProps) -> Html {
    html! {
        <svg class="selection-lines" style="position:absolute; left:0; top:0; width:100%; height:100%; overflow:visible; pointer-events:none; z-index:1;">
            { for props.lines.iter().map(|l| segment(l, "#3fb950", "found-line")) }
            { props.active.as_ref().map(|l| segment(l, "#58a6ff", "active-line")).unwrap_or_default() }
        </svg>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::model::Point;
    use std::time::Duration;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn line(x: f64) -> Line {
        Line {
            from: Point { x, y: 10.0 },
            to: Point { x: x + 100.0, y: 10.0 },
        }
    }

    #[wasm_bindgen_test(async)]
    async fn draws_found_lines_and_live_line() {
        let document = web_sys::window().and_then(|w| w.document()).expect("document");
        let root = document.create_element("div").expect("root");
        document.body().expect("body").append_child(&root).expect("append");
        let _handle = yew::Renderer::<SelectionLines>::with_root_and_props(
            root.clone(),
            SelectionLinesProps {
                lines: vec![line(0.0), line(50.0)],
                active: Some(line(200.0)),
            },
        )
        .render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(root.query_selector_all(".found-line").unwrap().length(), 2);
        assert_eq!(root.query_selector_all(".active-line").unwrap().length(), 1);
    }
}
