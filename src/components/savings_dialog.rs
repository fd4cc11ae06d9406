use yew::prelude::*;

use crate::models::Savings;

#[derive(Properties, PartialEq)]
pub struct SavingsDialogProps {
    pub savings: Savings,
    pub on_close: Callback<()>,
}

#[function_component(SavingsDialog)]
pub fn savings_dialog(props: &SavingsDialogProps) -> Html {
    let close_click = props.on_close.reform(|_: MouseEvent| ());
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={close_click.clone()}></div>
            <div class="modal-content savings-dialog" onclick={stop}>
                <div class="modal-header">
                    <h3 class="savings-title">{"Route Optimized! 🎉"}</h3>
                    <button type="button" class="btn-close" onclick={close_click}>{"✕"}</button>
                </div>
                <p>{"Distance saved: "}<strong>{format!("{} km", props.savings.distance_km)}</strong></p>
                <p>{"Fuel saved: "}<strong>{format!("{} L", props.savings.fuel_l)}</strong></p>
            </div>
        </div>
    }
}
