//! Core world model: geometry, collision, movement, proximity, and the
//! modal state machine. Everything here is pure; the interval timers and
//! DOM listeners in `components` only dispatch actions, so the whole
//! behavior is exercisable from native tests.

use std::rc::Rc;
use yew::Reducible;

use crate::state::HeldKeys;

/// World extents in logical units (CSS pixels).
pub const WORLD_W: f64 = 960.0;
pub const WORLD_H: f64 = 640.0;

/// Sprite sheet: 4x4 grid of 32x32 frames, rendered at 2x.
pub const FRAME_COLS: u32 = 4;
pub const FRAME_ROWS: u32 = 4;
pub const SPRITE_SCALE: u32 = 2;

/// On-screen character box (one frame at scale).
pub const CHAR_W: f64 = (32 * SPRITE_SCALE) as f64;
pub const CHAR_H: f64 = (32 * SPRITE_SCALE) as f64;

/// Movement per 16 ms tick.
pub const SPEED: f64 = 3.0;

/// Door proximity tolerances around a building's door anchor.
const NEAR_X: f64 = 50.0;
const NEAR_Y: f64 = 40.0;

/// Height of the walkable band at the bottom of each building, and the
/// half-width of the door gap left open in it.
const DOOR_BAND: f64 = 45.0;
const DOOR_HALF_GAP: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Sprite sheet row for this facing; the column is the animation frame.
    pub fn sprite_row(self) -> u32 {
        match self {
            Direction::Down => 0,
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }
}

/// The four content sites; each building opens one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteId {
    Biodata,
    Experience,
    Projects,
    Contact,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict AABB overlap: touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Building {
    pub id: SiteId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub label: &'static str,
    pub image: &'static str,
}

impl Building {
    /// Point the proximity check measures against: the horizontal center of
    /// the bottom edge, where the door gap sits.
    pub fn door_anchor(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h)
    }
}

/// The four buildings, two per row around the central paths.
pub static BUILDINGS: [Building; 4] = [
    Building {
        id: SiteId::Biodata,
        x: 200.0,
        y: 50.0,
        w: 150.0,
        h: 140.0,
        label: "PROFILE",
        image: "building2.png",
    },
    Building {
        id: SiteId::Experience,
        x: 610.0,
        y: 50.0,
        w: 150.0,
        h: 140.0,
        label: "EXPERIENCE",
        image: "building3.png",
    },
    Building {
        id: SiteId::Projects,
        x: 200.0,
        y: 410.0,
        w: 150.0,
        h: 150.0,
        label: "PROJECTS",
        image: "building4.png",
    },
    Building {
        id: SiteId::Contact,
        x: 610.0,
        y: 410.0,
        w: 150.0,
        h: 140.0,
        label: "CONTACT",
        image: "building1.png",
    },
];

/// Static obstacle set: three rectangles per building (the body above the
/// door band, plus the two strips flanking the door gap) and four boundary
/// walls just outside the world edges.
pub fn build_obstacles() -> Vec<Rect> {
    let mut boxes = Vec::with_capacity(BUILDINGS.len() * 3 + 4);
    for b in &BUILDINGS {
        boxes.push(Rect::new(b.x, b.y, b.w, b.h - DOOR_BAND));
        boxes.push(Rect::new(
            b.x,
            b.y + b.h - DOOR_BAND,
            b.w / 2.0 - DOOR_HALF_GAP,
            DOOR_BAND,
        ));
        boxes.push(Rect::new(
            b.x + b.w / 2.0 + DOOR_HALF_GAP,
            b.y + b.h - DOOR_BAND,
            b.w / 2.0 - DOOR_HALF_GAP,
            DOOR_BAND,
        ));
    }
    boxes.push(Rect::new(-20.0, 0.0, 20.0, WORLD_H));
    boxes.push(Rect::new(WORLD_W, 0.0, 20.0, WORLD_H));
    boxes.push(Rect::new(0.0, -20.0, WORLD_W, 20.0));
    boxes.push(Rect::new(0.0, WORLD_H, WORLD_W, 20.0));
    boxes
}

/// Collision footprint for a sprite whose top-left is at (x, y): inset 12
/// units on each side and only the bottom 12-unit strip, so the sprite's
/// upper body may visually overlap building fronts without blocking.
fn footprint(x: f64, y: f64) -> Rect {
    Rect::new(x + 12.0, y + CHAR_H - 12.0, CHAR_W - 24.0, 12.0)
}

/// Id of the first building whose door anchor is within tolerance of a
/// sprite at the given top-left: horizontal distance measured from the
/// sprite center, vertical from its bottom edge.
pub fn near_door_at(x: f64, y: f64) -> Option<SiteId> {
    for b in &BUILDINGS {
        let (ax, ay) = b.door_anchor();
        if (x + CHAR_W / 2.0 - ax).abs() < NEAR_X && (y + CHAR_H - ay).abs() < NEAR_Y {
            return Some(b.id);
        }
    }
    None
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub dir: Direction,
    pub walking: bool,
    pub frame: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub player: Player,
    /// Currently open content modal, if any.
    pub modal: Option<SiteId>,
    /// Computed once at mount, never mutated afterwards.
    obstacles: Vec<Rect>,
}

impl WorldState {
    pub fn new() -> Self {
        Self {
            player: Player {
                x: 432.0,
                y: 280.0,
                dir: Direction::Down,
                walking: false,
                frame: 0,
            },
            modal: None,
            obstacles: build_obstacles(),
        }
    }

    /// True iff the footprint at the candidate top-left overlaps any
    /// obstacle. Pure; no side effects.
    pub fn collides(&self, x: f64, y: f64) -> bool {
        let fp = footprint(x, y);
        self.obstacles.iter().any(|b| fp.intersects(b))
    }

    pub fn near_door(&self) -> Option<SiteId> {
        near_door_at(self.player.x, self.player.y)
    }

    /// One movement tick. Each axis commits independently so sliding along
    /// a wall works; the vertical checks reuse the already-committed
    /// horizontal result so diagonals compose. When several keys are held
    /// the last direction processed (fixed order left, right, up, down)
    /// wins the facing tie-break.
    fn step(&mut self, held: &HeldKeys) {
        let p = self.player;
        let mut nx = p.x;
        let mut ny = p.y;
        let mut nd = p.dir;
        let mut moved = false;

        if held.direction_held(Direction::Left) && !self.collides(p.x - SPEED, p.y) {
            nx -= SPEED;
            nd = Direction::Left;
            moved = true;
        }
        if held.direction_held(Direction::Right) && !self.collides(p.x + SPEED, p.y) {
            nx += SPEED;
            nd = Direction::Right;
            moved = true;
        }
        if held.direction_held(Direction::Up) && !self.collides(nx, p.y - SPEED) {
            ny -= SPEED;
            nd = Direction::Up;
            moved = true;
        }
        if held.direction_held(Direction::Down) && !self.collides(nx, p.y + SPEED) {
            ny += SPEED;
            nd = Direction::Down;
            moved = true;
        }

        self.player.x = nx.clamp(0.0, WORLD_W - CHAR_W);
        self.player.y = ny.clamp(0.0, WORLD_H - CHAR_H);
        self.player.walking = moved;
        if moved {
            self.player.dir = nd;
        } else {
            // Frame is pinned to 0 whenever the player is not walking.
            self.player.frame = 0;
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum WorldAction {
    /// One 16 ms movement tick with a snapshot of the held keys.
    Tick { held: HeldKeys },
    /// One 100 ms animation step.
    AdvanceFrame,
    /// Confirm key (Enter/Space): opens the near building's modal, if any.
    Confirm,
    /// Direct click on a building; proximity does not apply.
    OpenModal(SiteId),
    CloseModal,
}

impl Reducible for WorldState {
    type Action = WorldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use WorldAction::*;
        match action {
            Tick { held } => {
                // The scene is frozen while a modal is open.
                if self.modal.is_some() {
                    return self;
                }
                let mut new = (*self).clone();
                new.step(&held);
                Rc::new(new)
            }
            AdvanceFrame => {
                if !self.player.walking || self.modal.is_some() {
                    return self;
                }
                let mut new = (*self).clone();
                new.player.frame = (new.player.frame + 1) % FRAME_COLS;
                Rc::new(new)
            }
            Confirm => {
                // Confirm with a modal already open is an explicit no-op.
                if self.modal.is_some() {
                    return self;
                }
                match self.near_door() {
                    Some(id) => {
                        let mut new = (*self).clone();
                        new.modal = Some(id);
                        Rc::new(new)
                    }
                    None => self,
                }
            }
            OpenModal(id) => {
                let mut new = (*self).clone();
                new.modal = Some(id);
                Rc::new(new)
            }
            CloseModal => {
                if self.modal.is_none() {
                    return self;
                }
                let mut new = (*self).clone();
                new.modal = None;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameKey;

    fn hold(keys: &[GameKey]) -> HeldKeys {
        let mut held = HeldKeys::default();
        for &k in keys {
            held.press(k);
        }
        held
    }

    fn tick(state: Rc<WorldState>, held: &HeldKeys) -> Rc<WorldState> {
        state.reduce(WorldAction::Tick { held: held.clone() })
    }

    fn at(x: f64, y: f64) -> Rc<WorldState> {
        let mut st = WorldState::new();
        st.player.x = x;
        st.player.y = y;
        Rc::new(st)
    }

    #[test]
    fn obstacle_set_has_three_parts_per_building_plus_walls() {
        let boxes = build_obstacles();
        assert_eq!(boxes.len(), BUILDINGS.len() * 3 + 4);
        // Every door gap is 60 units wide and centered on the building.
        for b in &BUILDINGS {
            let cx = b.x + b.w / 2.0;
            let left = Rect::new(b.x, b.y + b.h - 45.0, b.w / 2.0 - 30.0, 45.0);
            let right = Rect::new(cx + 30.0, b.y + b.h - 45.0, b.w / 2.0 - 30.0, 45.0);
            assert!(boxes.contains(&left));
            assert!(boxes.contains(&right));
            assert_eq!(right.x - (left.x + left.w), 60.0);
        }
    }

    #[test]
    fn footprint_overlap_is_strict() {
        let st = WorldState::new();
        // Biodata body occupies (200, 50)..(350, 145). A sprite at x=338
        // puts the footprint's left edge exactly on the body's right edge:
        // touching, not overlapping.
        assert!(!st.collides(338.0, 48.0));
        assert!(st.collides(337.0, 48.0));
        // Same vertically against the body's bottom edge (y + 52 = 145).
        assert!(!st.collides(250.0, 93.0));
        assert!(st.collides(250.0, 92.0));
    }

    #[test]
    fn door_gap_is_walkable() {
        let st = WorldState::new();
        // Footprint x-range 262..302 sits inside biodata's 245..305 gap, so
        // the door band rows collide only left/right of the gap.
        assert!(!st.collides(250.0, 100.0));
        assert!(st.collides(180.0, 100.0));
        assert!(st.collides(300.0, 100.0));
    }

    #[test]
    fn down_key_moves_down_by_speed_until_blocked() {
        let mut st = tick(Rc::new(WorldState::new()), &hold(&[GameKey::S]));
        assert_eq!(st.player.y, 283.0);
        assert_eq!(st.player.dir, Direction::Down);
        assert!(st.player.walking);
        let mut prev = st.player.y;
        for _ in 0..200 {
            st = tick(st, &hold(&[GameKey::S]));
            assert!(st.player.y >= prev);
            assert!(st.player.y - prev <= SPEED);
            prev = st.player.y;
        }
        // Stopped by the bottom boundary wall: one more step would push the
        // footprint past y = 640.
        assert_eq!(st.player.y, 574.0);
        assert!(!st.player.walking);
        assert_eq!(st.player.frame, 0);
    }

    #[test]
    fn position_stays_inside_world_bounds() {
        // Rightward run along a clear row ends clamped at the world edge.
        let mut st = Rc::new(WorldState::new());
        for _ in 0..200 {
            st = tick(st, &hold(&[GameKey::D]));
            assert!(st.player.x >= 0.0 && st.player.x <= WORLD_W - CHAR_W);
            assert!(st.player.y >= 0.0 && st.player.y <= WORLD_H - CHAR_H);
        }
        assert_eq!(st.player.x, WORLD_W - CHAR_W);
        assert_eq!(st.player.y, 280.0);
        // The clamp, not the side wall, stops the run, so the tick still
        // counts as movement and the sprite runs in place at the edge.
        assert!(st.player.walking);
        // Pushing left from x = 0 stays clamped at 0.
        let mut st = at(0.0, 300.0);
        for _ in 0..3 {
            st = tick(st, &hold(&[GameKey::A]));
            assert_eq!(st.player.x, 0.0);
        }
    }

    #[test]
    fn blocked_axis_still_slides_on_the_free_one() {
        // Just below the biodata body: up is blocked, left is free.
        let st = at(250.0, 94.0);
        assert!(st.collides(250.0, 91.0));
        let st = tick(st, &hold(&[GameKey::W, GameKey::A]));
        assert_eq!(st.player.x, 247.0);
        assert_eq!(st.player.y, 94.0);
        assert!(st.player.walking);
        assert_eq!(st.player.dir, Direction::Left);
    }

    #[test]
    fn opposite_keys_cancel_but_face_the_last_processed() {
        let st = tick(Rc::new(WorldState::new()), &hold(&[GameKey::A, GameKey::D]));
        // Net zero movement, yet the player is "walking" and faces right:
        // the fixed processing order is the tie-break, not an average.
        assert_eq!(st.player.x, 432.0);
        assert_eq!(st.player.y, 280.0);
        assert!(st.player.walking);
        assert_eq!(st.player.dir, Direction::Right);
    }

    #[test]
    fn diagonal_movement_composes_both_axes() {
        let st = tick(
            Rc::new(WorldState::new()),
            &hold(&[GameKey::D, GameKey::ArrowDown]),
        );
        assert_eq!(st.player.x, 435.0);
        assert_eq!(st.player.y, 283.0);
        assert_eq!(st.player.dir, Direction::Down);
    }

    #[test]
    fn near_door_respects_both_tolerances() {
        // Contact's door anchor is (685, 550).
        assert_eq!(near_door_at(660.0, 500.0), Some(SiteId::Contact));
        // 60 units further down clears it.
        assert_eq!(near_door_at(660.0, 560.0), None);
        // Exactly on the horizontal tolerance is not near (strict <).
        assert_eq!(near_door_at(703.0, 486.0), None);
        assert_eq!(near_door_at(702.0, 486.0), Some(SiteId::Contact));
        // The spawn point is near nothing.
        assert_eq!(near_door_at(432.0, 280.0), None);
    }

    #[test]
    fn confirm_near_a_door_opens_and_reopens_nothing() {
        let st = at(660.0, 500.0);
        let st = st.reduce(WorldAction::Confirm);
        assert_eq!(st.modal, Some(SiteId::Contact));
        // Confirm while open is a no-op (same state, not just equal state).
        let again = st.clone().reduce(WorldAction::Confirm);
        assert!(Rc::ptr_eq(&st, &again));
        let st = st.reduce(WorldAction::CloseModal);
        assert_eq!(st.modal, None);
    }

    #[test]
    fn confirm_away_from_doors_is_a_noop() {
        let st = Rc::new(WorldState::new());
        let after = st.clone().reduce(WorldAction::Confirm);
        assert!(Rc::ptr_eq(&st, &after));
    }

    #[test]
    fn click_opens_regardless_of_proximity() {
        let st = Rc::new(WorldState::new());
        assert_eq!(st.near_door(), None);
        let st = st.reduce(WorldAction::OpenModal(SiteId::Projects));
        assert_eq!(st.modal, Some(SiteId::Projects));
    }

    #[test]
    fn ticks_are_suspended_while_a_modal_is_open() {
        let st = Rc::new(WorldState::new());
        let st = st.reduce(WorldAction::OpenModal(SiteId::Biodata));
        let after = tick(st.clone(), &hold(&[GameKey::S]));
        assert!(Rc::ptr_eq(&st, &after));
        // Closing resumes movement exactly where it left off.
        let st = st.reduce(WorldAction::CloseModal);
        let st = tick(st, &hold(&[GameKey::S]));
        assert_eq!(st.player.y, 283.0);
    }

    #[test]
    fn frames_cycle_while_walking_and_pin_to_zero_after() {
        let mut st = tick(Rc::new(WorldState::new()), &hold(&[GameKey::D]));
        assert!(st.player.walking);
        for expect in [1, 2, 3, 0, 1] {
            st = st.reduce(WorldAction::AdvanceFrame);
            assert_eq!(st.player.frame, expect);
        }
        // Releasing every key stops walking and pins the frame within one
        // tick.
        let st = tick(st, &HeldKeys::default());
        assert!(!st.player.walking);
        assert_eq!(st.player.frame, 0);
        // AdvanceFrame while idle (or behind a modal) changes nothing.
        let idle = st.clone().reduce(WorldAction::AdvanceFrame);
        assert!(Rc::ptr_eq(&st, &idle));
    }

    #[test]
    fn arrow_aliases_move_like_wasd() {
        let a = tick(Rc::new(WorldState::new()), &hold(&[GameKey::ArrowLeft]));
        let b = tick(Rc::new(WorldState::new()), &hold(&[GameKey::A]));
        assert_eq!(a.player, b.player);
        assert_eq!(a.player.dir, Direction::Left);
    }
}
