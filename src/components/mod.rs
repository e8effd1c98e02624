pub mod app;
pub mod biodata_panel;
pub mod building;
pub mod character;
pub mod contact_panel;
pub mod experience_panel;
pub mod hint_bar;
pub mod modal;
pub mod projects_panel;
pub mod world_view;
