use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DestinationDialogProps {
    pub on_submit: Callback<String>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Asks for the dropoff station before a route is calculated
#[function_component(DestinationDialog)]
pub fn destination_dialog(props: &DestinationDialogProps) -> Html {
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with((), move |_| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
            || ()
        });
    }

    let on_submit = {
        let input_ref = input_ref.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let close_click = props.on_close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <form class="modal-content destination-dialog" onclick={stop} onsubmit={on_submit}>
                <div class="modal-header">
                    <h3>{"Enter Dropoff Station"}</h3>
                    <button type="button" class="btn-close" onclick={close_click}>{"✕"}</button>
                </div>
                <input
                    type="text"
                    class="input-field"
                    placeholder="Enter address in Kisumu..."
                    ref={input_ref}
                />
                {
                    if let Some(error) = &props.error {
                        html! { <span class="error">{error.clone()}</span> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="btn-calculate">{"Calculate Route"}</button>
            </form>
        </div>
    }
}
