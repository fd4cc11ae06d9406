use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OptimizeButtonProps {
    pub on_click: Callback<()>,
    pub disabled: bool,
}

#[function_component(OptimizeButton)]
pub fn optimize_button(props: &OptimizeButtonProps) -> Html {
    html! {
        <div class="optimize">
            <button
                type="button"
                class="btn-optimize"
                onclick={props.on_click.reform(|_: MouseEvent| ())}
                disabled={props.disabled}
            >
                {"Optimize Route"}
            </button>
        </div>
    }
}
