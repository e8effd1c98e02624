use yew::prelude::*;

use super::{
    biodata_panel::BiodataPanel, contact_panel::ContactPanel, experience_panel::ExperiencePanel,
    projects_panel::ProjectsPanel,
};
use crate::model::SiteId;

#[derive(Properties, PartialEq, Clone)]
pub struct SiteModalProps {
    pub site: Option<SiteId>,
    pub on_close: Callback<()>,
}

fn site_title(site: SiteId) -> &'static str {
    match site {
        SiteId::Biodata => "\u{1f4cb} BIODATA",
        SiteId::Experience => "\u{1f3c6} EXPERIENCE",
        SiteId::Projects => "\u{1f52c} PROJECTS",
        SiteId::Contact => "\u{1f4e7} CONTACT",
    }
}

fn site_accent(site: SiteId) -> &'static str {
    match site {
        SiteId::Biodata => "#f85858",
        SiteId::Experience => "#6898f8",
        SiteId::Projects => "#58c858",
        SiteId::Contact => "#4a9a4a",
    }
}

#[function_component]
pub fn SiteModal(props: &SiteModalProps) -> Html {
    let Some(site) = props.site else {
        return html! {};
    };

    let backdrop_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Clicks inside the box must not reach the backdrop handler.
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let body = match site {
        SiteId::Biodata => html! { <BiodataPanel /> },
        SiteId::Experience => html! { <ExperiencePanel /> },
        SiteId::Projects => html! { <ProjectsPanel /> },
        SiteId::Contact => html! { <ContactPanel /> },
    };

    html! {<div onclick={backdrop_cb} style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div onclick={swallow_click} style="background:#161b22; border:1px solid #30363d; border-radius:12px; min-width:340px; max-width:520px; width:90%; max-height:80vh; display:flex; flex-direction:column; overflow:hidden;">
            <div style={format!("display:flex; justify-content:space-between; align-items:center; padding:10px 14px; background:{}; color:#fff;", site_accent(site))}>
                <span style="font-weight:600; letter-spacing:1px;">{ site_title(site) }</span>
                <button onclick={close_cb} style="background:none; border:none; color:#fff; font-size:16px; cursor:pointer; padding:0 2px;">{"\u{2715}"}</button>
            </div>
            <div style="padding:14px 16px; overflow-y:auto;">{ body }</div>
        </div>
    </div>}
}
