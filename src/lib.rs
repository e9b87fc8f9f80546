pub mod color;
pub mod config;
pub mod field;
pub mod particle;
pub mod renderer;
mod utils;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

pub use crate::config::FieldConfig;
use crate::field::FieldSim;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

#[derive(Copy, Clone, PartialEq)]
enum RunState {
    Running,
    Stopped,
}

struct Engine {
    sim: FieldSim,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    state: RunState,
    frame_handle: Option<i32>,
}

impl Engine {
    /// One frame: tick the sim, then repaint everything. A failed draw call
    /// loses at most this frame's remaining strokes, never the loop.
    fn frame(&mut self) {
        self.sim.step();
        renderer::clear(&self.context, self.sim.width, self.sim.height);
        for p in &self.sim.particles {
            let _ = renderer::draw_particle(&self.context, p);
        }
        for edge in self.sim.connections() {
            renderer::draw_edge(&self.context, &edge);
        }
    }

    fn resize_to_viewport(&mut self, window: &Window) -> Result<(), JsValue> {
        let (width, height) = viewport_size(window)?;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.sim.set_bounds(width, height);
        Ok(())
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

// The frame closure re-arms itself through requestAnimationFrame, so it has
// to live in a shared slot it can reach from inside its own body. stop()
// empties the slot to break the cycle.
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Listeners {
    resize: Closure<dyn FnMut()>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_leave: Closure<dyn FnMut()>,
}

/// The exported engine: a fixed particle population simulated and rendered
/// to a full-viewport canvas once per animation frame until `stop`.
#[wasm_bindgen]
pub struct ParticleField {
    engine: Rc<RefCell<Engine>>,
    frame_closure: FrameClosure,
    listeners: Option<Listeners>,
}

#[wasm_bindgen]
impl ParticleField {
    /// Sizes the canvas to the viewport, spawns the population, hooks the
    /// window events, and begins the frame loop.
    pub fn start(canvas: HtmlCanvasElement, config: &FieldConfig) -> Result<ParticleField, JsValue> {
        let _timer = Timer::new("ParticleField::start");
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let (width, height) = viewport_size(&window)?;
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let engine = Rc::new(RefCell::new(Engine {
            sim: FieldSim::new(*config, width, height),
            canvas,
            context,
            state: RunState::Running,
            frame_handle: None,
        }));

        let listeners = register_listeners(&window, &engine)?;
        let frame_closure = schedule_loop(&window, &engine)?;

        Ok(ParticleField {
            engine,
            frame_closure,
            listeners: Some(listeners),
        })
    }

    /// Stops the loop and detaches the window listeners. Safe to call more
    /// than once; after the first call returns, no frame runs and no
    /// listener mutates sim state.
    pub fn stop(&mut self) {
        {
            let mut engine = self.engine.borrow_mut();
            if engine.state == RunState::Stopped {
                return;
            }
            engine.state = RunState::Stopped;
            if let Some(window) = web_sys::window() {
                if let Some(handle) = engine.frame_handle.take() {
                    let _ = window.cancel_animation_frame(handle);
                }
            }
        }
        if let Some(window) = web_sys::window() {
            if let Some(listeners) = self.listeners.take() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    listeners.resize.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mousemove",
                    listeners.mouse_move.as_ref().unchecked_ref(),
                );
                let _ = window.remove_event_listener_with_callback(
                    "mouseout",
                    listeners.mouse_leave.as_ref().unchecked_ref(),
                );
            }
        }
        self.frame_closure.borrow_mut().take();
    }
}

fn register_listeners(
    window: &Window,
    engine: &Rc<RefCell<Engine>>,
) -> Result<Listeners, JsValue> {
    let resize = {
        let engine = Rc::clone(engine);
        Closure::wrap(Box::new(move || {
            let mut engine = engine.borrow_mut();
            if engine.state != RunState::Running {
                return;
            }
            if let Some(window) = web_sys::window() {
                let _ = engine.resize_to_viewport(&window);
            }
        }) as Box<dyn FnMut()>)
    };
    let mouse_move = {
        let engine = Rc::clone(engine);
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let mut engine = engine.borrow_mut();
            if engine.state != RunState::Running {
                return;
            }
            engine
                .sim
                .pointer_moved(event.client_x() as f64, event.client_y() as f64);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let mouse_leave = {
        let engine = Rc::clone(engine);
        Closure::wrap(Box::new(move || {
            let mut engine = engine.borrow_mut();
            if engine.state != RunState::Running {
                return;
            }
            engine.sim.pointer_left();
        }) as Box<dyn FnMut()>)
    };

    window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("mouseout", mouse_leave.as_ref().unchecked_ref())?;

    Ok(Listeners {
        resize,
        mouse_move,
        mouse_leave,
    })
}

/// Kicks off the requestAnimationFrame chain. The frame body re-checks the
/// run state before touching anything, which covers a frame that was
/// already queued when stop() ran.
fn schedule_loop(window: &Window, engine: &Rc<RefCell<Engine>>) -> Result<FrameClosure, JsValue> {
    let slot: FrameClosure = Rc::new(RefCell::new(None));
    let inner_slot = Rc::clone(&slot);
    let inner_engine = Rc::clone(engine);
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut engine = inner_engine.borrow_mut();
        if engine.state != RunState::Running {
            return;
        }
        engine.frame_handle = None;
        engine.frame();
        if let Some(window) = web_sys::window() {
            if let Some(closure) = inner_slot.borrow().as_ref() {
                if let Ok(handle) =
                    window.request_animation_frame(closure.as_ref().unchecked_ref())
                {
                    engine.frame_handle = Some(handle);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(closure) = slot.borrow().as_ref() {
        let handle =
            window.request_animation_frame(closure.as_ref().unchecked_ref::<js_sys::Function>())?;
        engine.borrow_mut().frame_handle = Some(handle);
    }
    Ok(slot)
}
