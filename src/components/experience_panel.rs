use yew::prelude::*;

use crate::content;
use crate::util::asset_url;

#[function_component(ExperiencePanel)]
pub fn experience_panel() -> Html {
    html! {<>
        { for content::EXPERIENCE.iter().map(|job| html! {
            <div style="margin-bottom:8px; padding:10px 12px; border:1px solid #30363d; border-radius:8px; background:#1d2430;">
                <h4 style="margin:0 0 4px 0; font-size:14px;">{ job.title }</h4>
                <p style="margin:0; font-size:12px; opacity:0.75;">
                    { format!("{} \u{2022} {}", job.company, job.period) }
                </p>
            </div>
        }) }
        <a
            href={asset_url(content::CV_FILE)}
            download={content::CV_FILE}
            style="display:inline-block; margin-top:6px; padding:6px 14px; font-size:13px; border-radius:6px; background:#238636; border:1px solid #2ea043; color:#fff; text-decoration:none;"
        >
            {"\u{1f4c4} Download CV"}
        </a>
    </>}
}
