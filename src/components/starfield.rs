//! Starfield Component
//!
//! Animated background particles on a full-viewport canvas.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Number of particles seeded at startup; resizes do not change it
const STAR_COUNT: usize = 150;

/// A single background particle. Drifts upward and wraps to the bottom
/// edge when it exits the top.
struct Star {
    x: f64,
    y: f64,
    size: f64,
    speed: f64,
    opacity: f64,
}

impl Star {
    fn advance(&mut self, height: f64) {
        self.y -= self.speed;
        if self.y < 0.0 {
            self.y = height;
        }
    }
}

/// Starfield background canvas
#[component]
pub fn Starfield() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let started = store_value(false);

    // Seed particles and start the animation loop once the canvas mounts
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            if !started.get_value() {
                started.set_value(true);
                start_animation(&canvas);
            }
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            id="starCanvas"
            class="fixed inset-0 w-full h-full pointer-events-none"
        />
    }
}

fn start_animation(canvas: &HtmlCanvasElement) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let (width, height) = viewport_size(&window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let stars = Rc::new(RefCell::new(seed_stars(width, height)));

    // Resizes only track the viewport; particles keep their positions
    {
        let canvas = canvas.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            if let Some(window) = web_sys::window() {
                let (width, height) = viewport_size(&window);
                canvas.set_width(width as u32);
                canvas.set_height(height as u32);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }

    // Self-rescheduling frame loop; runs for the lifetime of the page
    let canvas = canvas.clone();
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        draw_frame(&ctx, &canvas, &mut stars.borrow_mut());

        if let Some(window) = web_sys::window() {
            if let Some(callback) = next.borrow().as_ref() {
                let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
            }
        }
    }));

    let frame_ref = frame.borrow();
    if let Some(callback) = frame_ref.as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

fn viewport_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn seed_stars(width: f64, height: f64) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            x: js_sys::Math::random() * width,
            y: js_sys::Math::random() * height,
            size: js_sys::Math::random() * 1.5,
            speed: js_sys::Math::random() * 0.2 + 0.05,
            opacity: js_sys::Math::random(),
        })
        .collect()
}

fn draw_frame(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, stars: &mut [Star]) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    for star in stars.iter_mut() {
        ctx.set_fill_style(&format!("rgba(26, 42, 68, {})", star.opacity).into());
        ctx.begin_path();
        let _ = ctx.arc(star.x, star.y, star.size, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        star.advance(height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_drifts_upward() {
        let mut star = Star {
            x: 10.0,
            y: 300.0,
            size: 1.0,
            speed: 0.25,
            opacity: 0.5,
        };

        star.advance(600.0);
        assert!((star.y - 299.75).abs() < 1e-9);
    }

    #[test]
    fn test_star_wraps_to_bottom_edge() {
        let mut star = Star {
            x: 10.0,
            y: 0.1,
            size: 1.0,
            speed: 0.2,
            opacity: 0.5,
        };

        star.advance(600.0);
        assert_eq!(star.y, 600.0);
    }

    #[test]
    fn test_star_on_edge_does_not_wrap() {
        let mut star = Star {
            x: 10.0,
            y: 0.3,
            size: 1.0,
            speed: 0.2,
            opacity: 0.5,
        };

        star.advance(600.0);
        assert!((star.y - 0.1).abs() < 1e-9);
    }
}
