use yew::prelude::*;

use crate::model::{Player, CHAR_H, CHAR_W, FRAME_COLS, FRAME_ROWS};
use crate::util::asset_url;

#[derive(Properties, PartialEq, Clone)]
pub struct CharacterSpriteProps {
    pub player: Player,
}

/// Sprite-sheet viewport: a fixed-size box that shows exactly one frame by
/// translating the full sheet behind it. Facing picks the row, animation
/// frame picks the column.
#[function_component(CharacterSprite)]
pub fn character_sprite(props: &CharacterSpriteProps) -> Html {
    let p = props.player;
    let offset_x = p.frame as f64 * CHAR_W;
    let offset_y = p.dir.sprite_row() as f64 * CHAR_H;
    let sheet_w = CHAR_W * FRAME_COLS as f64;
    let sheet_h = CHAR_H * FRAME_ROWS as f64;

    let viewport = format!(
        "position:absolute; left:{}px; top:{}px; width:{}px; height:{}px; overflow:hidden; z-index:10;",
        p.x, p.y, CHAR_W, CHAR_H
    );
    let sheet = format!(
        "width:{}px; height:{}px; background-image:url('{}'); background-size:100% 100%; image-rendering:pixelated; transform:translate({}px, {}px);",
        sheet_w,
        sheet_h,
        asset_url("character.png"),
        -offset_x,
        -offset_y
    );

    html! {
        <div style={viewport}>
            <div style={sheet} />
        </div>
    }
}
