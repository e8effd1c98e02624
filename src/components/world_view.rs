use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::{
    building::BuildingSprite, character::CharacterSprite, hint_bar::HintBar, modal::SiteModal,
};
use crate::model::{SiteId, WorldAction, WorldState, BUILDINGS, WORLD_H, WORLD_W};
use crate::state::{GameKey, HeldKeys};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct WorldViewProps {
    pub world: UseReducerHandle<WorldState>,
}

/// Decorative dirt paths over the grass: one avenue under each building
/// row and two vertical connectors between them.
static PATHS: [(f64, f64, f64, f64); 4] = [
    (0.0, 200.0, 960.0, 50.0),
    (0.0, 355.0, 960.0, 50.0),
    (150.0, 0.0, 50.0, 640.0),
    (760.0, 0.0, 50.0, 640.0),
];

#[function_component(WorldView)]
pub fn world_view(props: &WorldViewProps) -> Html {
    // Written by the key listeners, snapshotted by the tick interval. The
    // set is intentionally not cleared on window blur, so a key released
    // while unfocused stays held until its next keyup.
    let held = use_mut_ref(HeldKeys::default);

    // Effect: window key listeners (mount/unmount).
    {
        let world = props.world.clone();
        let held = held.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let keydown_cb = {
                let world = world.clone();
                let held = held.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    let key = e.key();
                    if key == "Escape" {
                        world.dispatch(WorldAction::CloseModal);
                        return;
                    }
                    let Some(game_key) = GameKey::from_event_key(&key) else {
                        return;
                    };
                    e.prevent_default();
                    held.borrow_mut().press(game_key);
                    if matches!(game_key, GameKey::Enter | GameKey::Space) {
                        world.dispatch(WorldAction::Confirm);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                .ok();
            let keyup_cb = {
                let held = held.clone();
                Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if let Some(game_key) = GameKey::from_event_key(&e.key()) {
                        held.borrow_mut().release(game_key);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("keyup", keyup_cb.as_ref().unchecked_ref())
                .ok();
            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "keydown",
                    keydown_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "keyup",
                    keyup_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (&keydown_cb, &keyup_cb);
            }
        });
    }
    // Effect: 16 ms movement tick, torn down while a modal is open and
    // recreated when it closes.
    {
        let world = props.world.clone();
        let held = held.clone();
        use_effect_with(props.world.modal, move |&modal| {
            let mut tick_cb = None;
            let mut tick_id = None;
            match modal {
                Some(site) => clog(&format!("modal open: {:?}", site)),
                None => {
                    let window = web_sys::window().expect("window");
                    let cb = Closure::wrap(Box::new(move || {
                        world.dispatch(WorldAction::Tick {
                            held: *held.borrow(),
                        });
                    }) as Box<dyn FnMut()>);
                    let id = window
                        .set_interval_with_callback_and_timeout_and_arguments_0(
                            cb.as_ref().unchecked_ref(),
                            16,
                        )
                        .unwrap();
                    tick_cb = Some(cb);
                    tick_id = Some(id);
                }
            }
            move || {
                if let Some(id) = tick_id {
                    if let Some(win) = web_sys::window() {
                        win.clear_interval_with_handle(id);
                    }
                }
                let _keep_alive = tick_cb;
            }
        });
    }
    // Effect: 100 ms animation timer, rebuilt whenever walking flips or a
    // modal opens, so the frame counter restarts from the transition.
    {
        let world = props.world.clone();
        let walking = props.world.player.walking;
        let modal_open = props.world.modal.is_some();
        use_effect_with((walking, modal_open), move |&(walking, open)| {
            let mut anim_cb = None;
            let mut anim_id = None;
            if walking && !open {
                let window = web_sys::window().expect("window");
                let cb = Closure::wrap(Box::new(move || {
                    world.dispatch(WorldAction::AdvanceFrame);
                }) as Box<dyn FnMut()>);
                let id = window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        100,
                    )
                    .unwrap();
                anim_cb = Some(cb);
                anim_id = Some(id);
            }
            move || {
                if let Some(id) = anim_id {
                    if let Some(win) = web_sys::window() {
                        win.clear_interval_with_handle(id);
                    }
                }
                let _keep_alive = anim_cb;
            }
        });
    }

    let near = props.world.near_door();
    let on_open = {
        let world = props.world.clone();
        Callback::from(move |id: SiteId| world.dispatch(WorldAction::OpenModal(id)))
    };
    let on_close = {
        let world = props.world.clone();
        Callback::from(move |_| world.dispatch(WorldAction::CloseModal))
    };

    html! {<>
        <div style={format!("position:relative; width:{}px; height:{}px; background:#3f8f44; border:3px solid #30363d; border-radius:6px; overflow:hidden;", WORLD_W, WORLD_H)}>
            { for PATHS.iter().map(|&(x, y, w, h)| html! {
                <div style={format!("position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; background:#c9a66b; opacity:0.85;", x, y, w, h)} />
            }) }
            { for BUILDINGS.iter().map(|b| html! {
                <BuildingSprite building={*b} near={near == Some(b.id)} on_open={on_open.clone()} />
            }) }
            <CharacterSprite player={props.world.player} />
        </div>
        <HintBar near={near.is_some()} />
        <SiteModal site={props.world.modal} on_close={on_close} />
    </>}
}
