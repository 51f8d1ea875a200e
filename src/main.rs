mod caster;
mod config;
mod framebuffer;
mod grid;
mod movement;
mod player;
mod projector;
mod scene;
mod textures;

use std::thread;
use std::time::Duration;

use raylib::prelude::*;

use config::Config;
use framebuffer::Framebuffer;
use grid::{CellState, Grid};
use movement::{resolve_move, Intent};
use player::Pose;
use scene::{compose, DrawOp};
use textures::{load_wall_texture, Pixmap};

const DEFAULT_MAP: &str = "\
################
#              #
#   ##     #   #
#   ##     #   #
#          #   #
#     ###      #
#              #
#   #      ##  #
#   #       #  #
#   ####       #
#              #
################";

fn read_intent(window: &RaylibHandle) -> Intent {
    Intent {
        forward: window.is_key_down(KeyboardKey::KEY_W),
        back: window.is_key_down(KeyboardKey::KEY_S),
        strafe_left: window.is_key_down(KeyboardKey::KEY_A),
        strafe_right: window.is_key_down(KeyboardKey::KEY_D),
        rotate_left: window.is_key_down(KeyboardKey::KEY_LEFT),
        rotate_right: window.is_key_down(KeyboardKey::KEY_RIGHT),
    }
}

/// Consumes one frame's draw ops into the framebuffer.
fn present(fb: &mut Framebuffer, ops: impl Iterator<Item = DrawOp>, tex: &Pixmap, cfg: &Config) {
    for op in ops {
        match op {
            DrawOp::Backdrop => {
                let mid = cfg.viewport_height / 2;
                fb.fill_rows(0, mid, Color::new(0, 100, 200, 255));
                fb.fill_rows(mid, cfg.viewport_height, Color::new(50, 50, 50, 255));
            }
            DrawOp::Slice(s) => {
                let tex_x = (s.tex_u * tex.width() as f32) as u32;
                fb.draw_textured_strip(s.x, s.top, s.height, tex, tex_x);
            }
        }
    }
}

/// Top-down debug view: wall cells as filled squares, player as a dot.
fn render_topdown(fb: &mut Framebuffer, grid: &Grid, pose: &Pose) {
    let scale = (fb.width as usize / grid.width())
        .min(fb.height as usize / grid.height())
        .max(1);
    for gy in 0..grid.height() {
        for gx in 0..grid.width() {
            if grid.cell_state(gx as i32, gy as i32) != CellState::Wall {
                continue;
            }
            for y in gy * scale..(gy + 1) * scale {
                for x in gx * scale..(gx + 1) * scale {
                    fb.set_pixel(x as u32, y as u32, Color::RED);
                }
            }
        }
    }
    fb.set_pixel(
        (pose.pos.x * scale as f32) as u32,
        (pose.pos.y * scale as f32) as u32,
        Color::YELLOW,
    );
}

fn main() {
    let cfg = Config::default();

    let (mut window, raylib_thread) = raylib::init()
        .size(cfg.viewport_width as i32, cfg.viewport_height as i32)
        .title("cuberoom")
        .build();

    let wall_tex = load_wall_texture();
    let mut framebuffer = Framebuffer::new(cfg.viewport_width, cfg.viewport_height);
    let grid = Grid::parse(DEFAULT_MAP);
    let mut pose = Pose::new(2.0, 2.0, 0.0);

    // M toggles between the raycast view and the top-down debug map.
    let mut topdown = false;

    while !window.window_should_close() {
        if window.is_key_pressed(KeyboardKey::KEY_M) {
            topdown = !topdown;
        }

        let intent = read_intent(&window);
        pose = resolve_move(&pose, intent, &grid, &cfg);

        framebuffer.clear();
        if topdown {
            render_topdown(&mut framebuffer, &grid, &pose);
        } else {
            present(
                &mut framebuffer,
                compose(&grid, &pose, &cfg),
                &wall_tex,
                &cfg,
            );
        }

        let fps_now = window.get_fps();
        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);
            for y in 0..framebuffer.height {
                for x in 0..framebuffer.width {
                    let color = framebuffer.color_buffer[(y * framebuffer.width + x) as usize];
                    d.draw_pixel(x as i32, y as i32, color);
                }
            }
            d.draw_text(&format!("FPS: {fps_now}"), 10, 10, 20, Color::WHITE);
        }

        // ~60 FPS
        thread::sleep(Duration::from_millis(16));
    }
}
