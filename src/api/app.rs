//! Page wiring: one render closure re-armed every frame, plus focus, blur and
//! resize listeners. Everything lives for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::domain::ParticleSettings;
use crate::simulation::{now_secs, HeartCore};

use super::canvas::{CanvasSprite, CanvasSurface};
use super::error::GlueError;
use super::scheduler::{FrameHandle, FrameScheduler};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct CanvasApp {
    core: HeartCore,
    surface: CanvasSurface,
    sprite: CanvasSprite,
    scheduler: FrameScheduler,
    pending: Option<FrameHandle>,
    paused: bool,
}

impl CanvasApp {
    fn schedule(&mut self, callback: &Closure<dyn FnMut()>) {
        match self.scheduler.request(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.pending = Some(handle),
            Err(err) => log::error!("could not schedule frame: {:?}", err),
        }
    }

    fn render(&mut self) {
        self.core.render(now_secs(), &mut self.surface, &self.sprite);
    }

    /// A focus event restarts the loop only when nothing is scheduled.
    fn needs_resume(&self) -> bool {
        needs_resume(self.paused, self.pending)
    }

    fn pause(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        self.paused = true;
        log::debug!("paused");
    }
}

/// Start the heart effect on `<canvas id=canvas_id>`.
///
/// `settings_json` may be omitted for the stock settings.
#[wasm_bindgen]
pub fn start(canvas_id: &str, settings_json: Option<String>) -> Result<(), JsValue> {
    let settings = match settings_json {
        Some(json) => ParticleSettings::from_json(&json).map_err(GlueError::from)?,
        None => ParticleSettings::default(),
    };
    run(canvas_id, settings)?;
    Ok(())
}

fn run(canvas_id: &str, settings: ParticleSettings) -> Result<(), GlueError> {
    let window = web_sys::window().ok_or(GlueError::NoWindow)?;
    let document = window.document().ok_or(GlueError::NoDocument)?;

    let surface = CanvasSurface::from_element_id(&document, canvas_id)?;
    surface.fit_to_layout();

    let core = HeartCore::new(settings)?;
    let sprite = CanvasSprite::upload(&document, &core.rasterize_sprite())?;

    log::info!(
        "heart effect on #{}: {} particles over {}s",
        canvas_id,
        core.settings().length,
        core.settings().duration
    );

    let app = Rc::new(RefCell::new(CanvasApp {
        core,
        surface,
        sprite,
        scheduler: FrameScheduler::new(window.clone()),
        pending: None,
        paused: false,
    }));

    let frame: FrameCallback = Rc::new(RefCell::new(None));
    {
        let app = app.clone();
        let frame_ref = frame.clone();
        *frame.borrow_mut() = Some(Closure::new(move || {
            let mut app = app.borrow_mut();
            app.pending = None;
            if app.paused {
                return;
            }
            if let Some(cb) = frame_ref.borrow().as_ref() {
                app.schedule(cb);
            }
            app.render();
        }));
    }

    listen(&window, "focus", {
        let app = app.clone();
        let frame = frame.clone();
        move || {
            let mut app = app.borrow_mut();
            if app.needs_resume() {
                app.core.reset_clock();
                app.paused = false;
                if let Some(cb) = frame.borrow().as_ref() {
                    app.schedule(cb);
                }
                log::debug!("resumed");
            }
        }
    })?;

    listen(&window, "blur", {
        let app = app.clone();
        move || app.borrow_mut().pause()
    })?;

    listen(&window, "resize", {
        let app = app.clone();
        move || app.borrow().surface.fit_to_layout()
    })?;

    // Kick off the first frame.
    if let Some(cb) = frame.borrow().as_ref() {
        app.borrow_mut().schedule(cb);
    }
    Ok(())
}

fn listen(window: &Window, event: &str, handler: impl FnMut() + 'static) -> Result<(), GlueError> {
    let closure = Closure::<dyn FnMut()>::new(handler);
    window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn needs_resume(paused: bool, pending: Option<FrameHandle>) -> bool {
    paused || pending.is_none()
}
