use super::{error_notice::ErrorNotice, grid_view::GridView, word_list::WordList};
use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::state::{LoadPhase, PuzzleAction, PuzzleState};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());
    let client = ApiClient::new(&config);
    let puzzle = use_reducer(PuzzleState::default);

    let dismiss = {
        let puzzle = puzzle.clone();
        Callback::from(move |()| puzzle.dispatch(PuzzleAction::DismissNotice))
    };
    let notice = puzzle.notice.clone().map(|msg| {
        html! { <ErrorNotice message={msg} on_dismiss={dismiss.clone()} /> }
    });
    let side_panel = (puzzle.phase == LoadPhase::Ready).then(|| {
        html! { <WordList words={puzzle.words.clone()} found={puzzle.found_count()} solved={puzzle.is_solved()} /> }
    });

    // No positioned wrappers here: the line overlay draws in page coordinates.
    html! {
        <div id="root" style="padding:16px 24px; color:#c9d1d9; background:#0e1116; min-height:100vh; font-family:sans-serif;">
            <h2 style="margin:0 0 12px 0; color:#58a6ff;">{"Word Search"}</h2>
            <div style="display:flex; gap:24px; align-items:flex-start;">
                <GridView puzzle={puzzle.clone()} client={client} grid_width={config.grid_width} />
                { side_panel.unwrap_or_default() }
            </div>
            // Below the grid so it never shifts the measured offset.
            { notice.unwrap_or_default() }
        </div>
    }
}
