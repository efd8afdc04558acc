use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeModalProps {
    /// Nothing is rendered while `None`.
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn NoticeModal(props: &NoticeModalProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #f85149; border-radius:12px; padding:16px 20px; min-width:320px; max-width:480px; display:flex; flex-direction:column; gap:14px;">
            <h3 style="margin:0; font-size:18px; color:#f85149;">{"Notice"}</h3>
            <div style="line-height:1.4;">{ message }</div>
            <div style="display:flex; justify-content:flex-end;">
                <button onclick={dismiss_cb}>{"OK"}</button>
            </div>
        </div>
    </div>}
}
