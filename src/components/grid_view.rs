use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use super::{error_notice::ErrorNotice, row::Row, selection_lines::SelectionLines, spinner::Spinner};
use crate::api::ApiClient;
use crate::model::Offset;
use crate::overlay::{active_line, selection_lines};
use crate::state::{LoadPhase, PointerButton, PuzzleAction, PuzzleState};

#[derive(Properties, PartialEq, Clone)]
pub struct GridViewProps {
    pub puzzle: UseReducerHandle<PuzzleState>,
    pub client: ApiClient,
    pub grid_width: u32,
}

/// Owns the network side: loads the puzzle on mount (and on retry) and sends
/// each released selection to the server.
#[function_component(GridView)]
pub fn grid_view(props: &GridViewProps) -> Html {
    // Effect: load puzzle
    {
        let puzzle = props.puzzle.clone();
        let client = props.client.clone();
        let width = props.grid_width;
        use_effect_with(props.puzzle.load_attempt, move |_| {
            spawn_local(async move {
                match client.new_grid(width).await {
                    Ok(resp) => puzzle.dispatch(PuzzleAction::Loaded(resp)),
                    Err(e) => puzzle.dispatch(PuzzleAction::LoadFailed(e.to_string())),
                }
            });
            || ()
        });
    }
    // Effect: submit released selection
    {
        let puzzle = props.puzzle.clone();
        let client = props.client.clone();
        use_effect_with(props.puzzle.tracker.pending(), move |pending| {
            if let Some(sub) = *pending {
                let words = puzzle.words.clone();
                let grid = puzzle.grid.clone();
                spawn_local(async move {
                    let result = client.select(&words, &grid, sub.selection).await;
                    puzzle.dispatch(PuzzleAction::SubmitResolved {
                        ticket: sub.ticket,
                        result,
                    });
                });
            }
            || ()
        });
    }

    let on_action = {
        let dispatcher = props.puzzle.dispatcher();
        Callback::from(move |a: PuzzleAction| dispatcher.dispatch(a))
    };
    let snapshot = Rc::new((*props.puzzle).clone());
    html! { <GridBoard puzzle={snapshot} on_action={on_action} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GridBoardProps {
    pub puzzle: Rc<PuzzleState>,
    pub on_action: Callback<PuzzleAction>,
}

/// Spinner, load error, or the letter table with its line overlay.
#[function_component(GridBoard)]
pub fn grid_board(props: &GridBoardProps) -> Html {
    let table_ref = use_node_ref();
    let ready = props.puzzle.phase == LoadPhase::Ready;

    // Effect: measure the grid once it is on screen
    {
        let table_ref = table_ref.clone();
        let on_action = props.on_action.clone();
        use_effect_with(ready, move |ready| {
            if *ready {
                if let Some(el) = table_ref.cast::<Element>() {
                    let rect = el.get_bounding_client_rect();
                    let (sx, sy) = web_sys::window()
                        .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
                        .unwrap_or((0.0, 0.0));
                    on_action.emit(PuzzleAction::OffsetMeasured(Offset {
                        top: rect.top() + sy,
                        left: rect.left() + sx,
                    }));
                }
            }
            || ()
        });
    }

    let puzzle = &props.puzzle;
    match &puzzle.phase {
        LoadPhase::Loading => html! { <Spinner /> },
        LoadPhase::Failed(msg) => {
            let retry = {
                let cb = props.on_action.clone();
                Callback::from(move |()| cb.emit(PuzzleAction::Retry))
            };
            html! { <ErrorNotice message={format!("Could not load a puzzle: {}", msg)} on_retry={retry} /> }
        }
        LoadPhase::Ready => {
            let onmousedown = {
                let cb = props.on_action.clone();
                Callback::from(move |e: MouseEvent| {
                    cb.emit(PuzzleAction::PointerDown {
                        button: PointerButton::from_event(&e),
                        x: e.page_x() as f64,
                        y: e.page_y() as f64,
                    })
                })
            };
            let onmousemove = {
                let cb = props.on_action.clone();
                Callback::from(move |e: MouseEvent| {
                    cb.emit(PuzzleAction::PointerMove {
                        x: e.page_x() as f64,
                        y: e.page_y() as f64,
                    })
                })
            };
            let onmouseup = {
                let cb = props.on_action.clone();
                Callback::from(move |_e: MouseEvent| cb.emit(PuzzleAction::PointerUp))
            };
            let oncontextmenu = Callback::from(|e: MouseEvent| e.prevent_default());

            let overlay = puzzle.offset.map(|offset| {
                html! {
                    <SelectionLines
                        lines={selection_lines(&puzzle.words, offset)}
                        active={active_line(&puzzle.tracker, offset)}
                    />
                }
            });

            let wrapper_style = format!(
                "display:inline-block; user-select:none; cursor:{};",
                if puzzle.tracker.is_dragging() { "grabbing" } else { "crosshair" }
            );
            html! {
                <div class="grid-wrapper" style={wrapper_style}>
                    { overlay.unwrap_or_default() }
                    <table
                        ref={table_ref.clone()}
                        style="border-collapse:collapse; border-spacing:0; margin:0;"
                        onmousedown={onmousedown}
                        onmousemove={onmousemove}
                        onmouseup={onmouseup}
                        oncontextmenu={oncontextmenu}
                    >
                        <tbody>
                            { for puzzle.grid.grid_in_2d.iter().map(|row| html! { <Row row={row.clone()} /> }) }
                        </tbody>
                    </table>
                </div>
            }
        }
    }
}
