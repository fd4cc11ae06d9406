use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShowMapButtonProps {
    pub on_click: Callback<()>,
}

#[function_component(ShowMapButton)]
pub fn show_map_button(props: &ShowMapButtonProps) -> Html {
    html! {
        <div class="show-map">
            <h3 class="heading">{"Live Map"}</h3>
            <button type="button" class="btn-show-map" onclick={props.on_click.reform(|_: MouseEvent| ())}>
                {"📍 Show on Map"}
            </button>
        </div>
    }
}
