//! Projectile physics and the transient pieces left behind by a slice

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::wrap_degrees;

/// Integrating body: position, velocity, gravity, spin
///
/// Units are per tick; the simulation runs at a fixed rate so no dt scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub gravity: f32,
    /// Rotation in degrees, always in [0, 360)
    pub angle: f32,
    /// Degrees per tick
    pub spin: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, gravity: f32, spin: f32) -> Self {
        Self {
            pos,
            vel,
            gravity,
            angle: 0.0,
            spin,
        }
    }

    /// Advance one tick: move by velocity, then accelerate downward
    pub fn integrate(&mut self) {
        self.pos += self.vel;
        self.vel.y += self.gravity;
        self.angle = wrap_degrees(self.angle + self.spin);
    }
}

/// Fruit artwork variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitVariant {
    Apple,
    Banana,
    Orange,
}

impl FruitVariant {
    pub const ALL: [FruitVariant; 3] = [
        FruitVariant::Apple,
        FruitVariant::Banana,
        FruitVariant::Orange,
    ];

    /// RGB of the juice splash
    pub fn juice_color(&self) -> [u8; 3] {
        match self {
            FruitVariant::Apple => [255, 50, 50],
            FruitVariant::Banana => [255, 225, 70],
            FruitVariant::Orange => [255, 150, 30],
        }
    }
}

/// What a projectile is, and therefore what slicing it does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Scores when sliced, costs a life when missed
    Normal(FruitVariant),
    /// Ends the session when sliced, harmless when missed
    Hazard,
}

/// A launched fruit or bomb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub kind: ProjectileKind,
    /// `body.pos` is the sprite's top-left corner
    pub body: Body,
    pub alive: bool,
}

impl Projectile {
    pub fn new(id: u32, kind: ProjectileKind, pos: Vec2, vel: Vec2, spin: f32) -> Self {
        Self {
            id,
            kind,
            body: Body::new(pos, vel, GRAVITY, spin),
            alive: true,
        }
    }

    /// Sprite center (collision origin)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.pos + Vec2::splat(HALF_EXTENT)
    }

    /// Fallen past the bottom margin
    #[inline]
    pub fn is_off_screen(&self, viewport_height: f32) -> bool {
        self.body.pos.y > viewport_height + OFFSCREEN_MARGIN
    }

    pub fn is_hazard(&self) -> bool {
        matches!(self.kind, ProjectileKind::Hazard)
    }
}

/// Half of a sliced fruit, tumbling away
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitFragment {
    pub variant: FruitVariant,
    pub body: Body,
    /// Ticks left before removal
    pub lifetime: u32,
}

impl SplitFragment {
    /// The two halves of a fruit whose sprite corner is at `origin`
    pub fn pair(variant: FruitVariant, origin: Vec2) -> [SplitFragment; 2] {
        let quarter = FRAGMENT_SIZE / 2.0;
        let make = |pos: Vec2, direction: f32| SplitFragment {
            variant,
            body: Body::new(
                pos,
                Vec2::new(direction * FRAGMENT_SPEED_X, FRAGMENT_SPEED_Y),
                FRAGMENT_GRAVITY,
                0.0,
            ),
            lifetime: FRAGMENT_LIFETIME,
        };
        [
            make(origin + Vec2::new(quarter, quarter), -1.0),
            make(origin + Vec2::new(FRAGMENT_SIZE, quarter), 1.0),
        ]
    }

    /// Step one tick; returns false once expired
    pub fn update(&mut self) -> bool {
        self.body.integrate();
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }
}

/// Growing juice blot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplashEffect {
    pub pos: Vec2,
    pub radius: f32,
    pub lifetime: u32,
    pub color: [u8; 3],
}

impl SplashEffect {
    pub fn new(pos: Vec2, color: [u8; 3]) -> Self {
        Self {
            pos,
            radius: SPLASH_RADIUS,
            lifetime: SPLASH_LIFETIME,
            color,
        }
    }

    /// Step one tick; returns false once expired
    pub fn update(&mut self) -> bool {
        self.radius += SPLASH_GROWTH;
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }
}
