use yew::prelude::*;

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner" style="display:flex; align-items:center; justify-content:center; gap:10px; padding:40px; font-size:16px; opacity:0.8;">
            <span style="display:inline-block; width:18px; height:18px; border:3px solid #30363d; border-top-color:#58a6ff; border-radius:50%;"></span>
            <span>{"Loading puzzle..."}</span>
        </div>
    }
}
