use yew::prelude::*;

use crate::model::{Building, SiteId};
use crate::util::asset_url;

#[derive(Properties, PartialEq, Clone)]
pub struct BuildingSpriteProps {
    pub building: Building,
    /// Player is within door range; highlights the label and glow.
    pub near: bool,
    pub on_open: Callback<SiteId>,
}

#[function_component(BuildingSprite)]
pub fn building_sprite(props: &BuildingSpriteProps) -> Html {
    let b = props.building;
    let open_cb = {
        let cb = props.on_open.clone();
        let id = b.id;
        Callback::from(move |_| cb.emit(id))
    };

    let glow = if props.near {
        " filter:drop-shadow(0 0 8px #58a6ff);"
    } else {
        ""
    };
    let outer = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; cursor:pointer; z-index:5;{}",
        b.x, b.y, b.w, b.h, glow
    );
    let label = if props.near {
        "position:absolute; left:50%; bottom:4px; transform:translateX(-50%); font-size:11px; letter-spacing:1px; white-space:nowrap; padding:1px 6px; border-radius:4px; background:rgba(22,27,34,0.9); border:1px solid #58a6ff; color:#58a6ff;"
    } else {
        "position:absolute; left:50%; bottom:4px; transform:translateX(-50%); font-size:11px; letter-spacing:1px; white-space:nowrap; padding:1px 6px; border-radius:4px; background:rgba(22,27,34,0.9); border:1px solid #30363d; color:#e6edf3;"
    };

    html! {
        <div style={outer} onclick={open_cb}>
            <img
                src={asset_url(b.image)}
                alt={b.label}
                style="width:100%; height:100%; image-rendering:pixelated;"
            />
            <span style={label}>{ b.label }</span>
        </div>
    }
}
