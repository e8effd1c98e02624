use yew::prelude::*;

use crate::content;

#[function_component(BiodataPanel)]
pub fn biodata_panel() -> Html {
    let d = &content::BIODATA;
    html! {<>
        <div style="display:flex; gap:14px; align-items:flex-start;">
            <div style="font-size:42px; line-height:1;">{"\u{1f468}\u{200d}\u{1f4bb}"}</div>
            <div>
                <h3 style="margin:0 0 2px 0; font-size:17px;">{ d.name }</h3>
                <p style="margin:0 0 8px 0; font-size:13px; color:#58a6ff;">{ d.role }</p>
                <p style="margin:0; font-size:13px; line-height:1.5; opacity:0.85;">{ d.bio }</p>
            </div>
        </div>
        <h4 style="margin:16px 0 6px 0; font-size:13px; letter-spacing:1px;">{"SKILLS"}</h4>
        <div style="display:flex; flex-wrap:wrap; gap:6px;">
            { for d.skills.iter().map(|s| html! {
                <span style="padding:2px 8px; font-size:12px; border-radius:4px; background:#1d2430; border:1px solid #30363d;">{ *s }</span>
            }) }
        </div>
    </>}
}
