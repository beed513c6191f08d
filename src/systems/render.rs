//! Rendering.
//!
//! Everything is drawn into the fixed-resolution [`RenderTarget`]:
//!
//! 1. world sprites through the active [`Camera2DRes`], sorted by [`ZIndex`],
//!    scaled by [`Scale`], flipped by [`Sprite::flip_h`] and tinted by [`Tint`];
//! 2. in debug mode, collider and solid tile outlines on top of the world;
//! 3. screen-space [`DynamicText`] labels and the debug overlay.
//!
//! The target is then scaled to the window with letterboxing.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::group::COIN;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::level::Level;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldsignals::WorldSignals;

const BACKGROUND: Color = Color::new(0x3d, 0x8e, 0xd6, 0xff);

/// Sprite draw parameters in world space.
struct SpriteDraw<'a> {
    tex_key: &'a str,
    src: Rectangle,
    dest: Rectangle,
    origin: Vector2,
    tint: Color,
    z: ZIndex,
}

fn sprite_draw<'a>(
    sprite: &'a Sprite,
    pos: &MapPosition,
    z: ZIndex,
    scale: Option<&Scale>,
    tint: Option<&Tint>,
) -> SpriteDraw<'a> {
    let scale = scale.copied().unwrap_or_default().scale;
    let src_width = if sprite.flip_h {
        -sprite.width
    } else {
        sprite.width
    };
    SpriteDraw {
        tex_key: &sprite.tex_key,
        src: Rectangle::new(sprite.offset.x, sprite.offset.y, src_width, sprite.height),
        dest: Rectangle::new(
            pos.pos.x,
            pos.pos.y,
            sprite.width * scale.x,
            sprite.height * scale.y,
        ),
        origin: Vector2::new(sprite.origin.x * scale.x, sprite.origin.y * scale.y),
        tint: tint.map(|t| t.color).unwrap_or(Color::WHITE),
        z,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    camera: Option<Res<Camera2DRes>>,
    textures: Res<TextureStore>,
    debug: Option<Res<DebugMode>>,
    level: Option<Res<Level>>,
    signals: Res<WorldSignals>,
    sprites: Query<(
        &Sprite,
        &MapPosition,
        &ZIndex,
        Option<&Scale>,
        Option<&Tint>,
    )>,
    texts: Query<(&DynamicText, &ScreenPosition)>,
    colliders: Query<(&BoxCollider, &MapPosition)>,
    entities: Query<Entity>,
) {
    let mut to_draw: Vec<SpriteDraw> = sprites
        .iter()
        .map(|(sprite, pos, z, scale, tint)| sprite_draw(sprite, pos, *z, scale, tint))
        .collect();
    to_draw.sort_by_key(|draw| draw.z);

    let window_w = rl.get_screen_width();
    let window_h = rl.get_screen_height();
    let fps = rl.get_fps();
    let src = target.source_rect();
    let dest = target.dest_rect(window_w, window_h);

    let mut d = rl.begin_drawing(&th);
    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(BACKGROUND);

        if let Some(camera) = camera.as_deref() {
            let mut d2 = t.begin_mode2D(camera.0);
            for draw in to_draw.iter() {
                if let Some(tex) = textures.get(draw.tex_key) {
                    d2.draw_texture_pro(tex, draw.src, draw.dest, draw.origin, 0.0, draw.tint);
                }
            }

            if debug.is_some() {
                let thickness = 1.0 / camera.0.zoom.max(f32::EPSILON);
                if let Some(level) = level.as_deref() {
                    let tile_w = level.tile_width as f32;
                    let tile_h = level.tile_height as f32;
                    for (tx, ty, _) in level.iter_tiles().filter(|(_, _, c)| c.solid) {
                        d2.draw_rectangle_lines_ex(
                            Rectangle::new(tx as f32 * tile_w, ty as f32 * tile_h, tile_w, tile_h),
                            thickness,
                            Color::YELLOW,
                        );
                    }
                }
                for (collider, position) in colliders.iter() {
                    let (x, y, w, h) = collider.get_aabb(position.pos);
                    d2.draw_rectangle_lines_ex(
                        Rectangle::new(x, y, w, h),
                        thickness,
                        Color::RED,
                    );
                }
            }
        }

        for (text, position) in texts.iter() {
            let top_left = text.top_left(position.pos);
            t.draw_text(
                &text.content,
                top_left.x as i32,
                top_left.y as i32,
                text.font_size,
                text.color,
            );
        }

        if debug.is_some() {
            let coins = signals.get_integer("coins_collected").unwrap_or(0);
            let left = signals.get_group_count(COIN).unwrap_or(0);
            t.draw_text(
                &format!("DEBUG | FPS: {fps} | Entities: {}", entities.iter().count()),
                4,
                4,
                10,
                Color::BLACK,
            );
            t.draw_text(
                &format!("Coins: {coins} collected, {left} left"),
                4,
                16,
                10,
                Color::BLACK,
            );
            if let Some(camera) = camera.as_deref() {
                t.draw_text(
                    &format!(
                        "Camera: ({:.1}, {:.1}) Zoom: {:.2}",
                        camera.0.target.x, camera.0.target.y, camera.0.zoom
                    ),
                    4,
                    28,
                    10,
                    Color::BLACK,
                );
            }
        }
    }

    d.clear_background(Color::BLACK);
    d.draw_texture_pro(&target.texture, src, dest, Vector2::zero(), 0.0, Color::WHITE);
}
