use yew::prelude::*;

use super::world_view::WorldView;
use crate::model::WorldState;

#[function_component(App)]
pub fn app() -> Html {
    let world = use_reducer(WorldState::new);

    html! {
        <div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; justify-content:center; padding:16px; background:#0e1116; color:#e6edf3; font-family:'Courier New', monospace;">
            <h1 style="margin:0 0 14px 0; font-size:26px; letter-spacing:4px; color:#58a6ff; text-shadow:0 0 12px rgba(88,166,255,0.55);">
                {"\u{2605} ZEDO'S WORLD \u{2605}"}
            </h1>
            <WorldView world={world.clone()} />
            <div style="margin-top:10px; font-size:11px; opacity:0.6;">
                {"Assets by "}
                <a href="https://scarloxy.itch.io/mpwsp01" target="_blank" rel="noopener noreferrer" style="color:#58a6ff;">{"scarloxy"}</a>
            </div>
        </div>
    }
}
