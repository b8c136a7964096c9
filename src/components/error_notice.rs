use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorNoticeProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

#[function_component]
pub fn ErrorNotice(props: &ErrorNoticeProps) -> Html {
    let retry_btn = props.on_retry.clone().map(|cb| {
        let onclick = Callback::from(move |_| cb.emit(()));
        html! { <button onclick={onclick}>{"Retry"}</button> }
    });
    let dismiss_btn = props.on_dismiss.clone().map(|cb| {
        let onclick = Callback::from(move |_| cb.emit(()));
        html! { <button onclick={onclick} style="padding:2px 8px;">{"Dismiss"}</button> }
    });
    html! {
        <div class="error-notice" style="display:flex; align-items:center; gap:10px; margin:12px 0; background:#1c2128; border:1px solid #f85149; color:#f85149; border-radius:8px; padding:8px 12px; font-size:13px;">
            <span style="flex:1;">{ props.message.clone() }</span>
            { retry_btn.unwrap_or_default() }
            { dismiss_btn.unwrap_or_default() }
        </div>
    }
}
