use yew::prelude::*;

use crate::content;

#[function_component(ContactPanel)]
pub fn contact_panel() -> Html {
    let c = &content::CONTACT;
    let link = "display:block; padding:8px 12px; font-size:13px; border:1px solid #30363d; border-radius:8px; background:#1d2430; color:#58a6ff; text-decoration:none;";
    html! {
        <div style="display:flex; flex-direction:column; gap:8px;">
            <a href={format!("mailto:{}", c.email)} style={link}>
                { format!("\u{1f4e7} {}", c.email) }
            </a>
            <a href={format!("https://{}", c.github)} target="_blank" style={link}>
                { format!("\u{1f419} {}", c.github) }
            </a>
            <a href={format!("https://{}", c.linkedin)} target="_blank" style={link}>
                { format!("\u{1f4bc} {}", c.linkedin) }
            </a>
        </div>
    }
}
