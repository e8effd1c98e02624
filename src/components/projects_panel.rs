use yew::prelude::*;

use crate::content;

#[function_component(ProjectsPanel)]
pub fn projects_panel() -> Html {
    html! {<>
        { for content::PROJECTS.iter().map(|p| html! {
            <div style="margin-bottom:10px; padding:10px 12px; border:1px solid #30363d; border-radius:8px; background:#1d2430;">
                <h4 style="margin:0 0 4px 0; font-size:14px;">{ p.name }</h4>
                <p style="margin:0 0 6px 0; font-size:12px; opacity:0.75;">{ p.description }</p>
                <div style="display:flex; flex-wrap:wrap; gap:4px;">
                    { for p.tech.iter().map(|t| html! {
                        <span style="padding:1px 6px; font-size:11px; border-radius:4px; background:#161b22; border:1px solid #30363d; opacity:0.9;">{ *t }</span>
                    }) }
                </div>
            </div>
        }) }
    </>}
}
