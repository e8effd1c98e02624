use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HintBarProps {
    pub near: bool,
}

/// Single-line prompt under the world: movement hint normally, confirm
/// prompt while standing at a door.
#[function_component(HintBar)]
pub fn hint_bar(props: &HintBarProps) -> Html {
    let (text, color, border) = if props.near {
        ("\u{25b6} PRESS ENTER", "#58a6ff", "#58a6ff")
    } else {
        ("\u{25b2}\u{25bc}\u{25c4}\u{25ba} MOVE", "#8b949e", "#30363d")
    };
    html! {
        <div style={format!("margin-top:12px; padding:6px 16px; font-size:13px; letter-spacing:2px; text-align:center; border:1px solid {}; border-radius:8px; background:rgba(22,27,34,0.9); color:{};", border, color)}>
            { text }
        </div>
    }
}
