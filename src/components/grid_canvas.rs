use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::render::{canvas::paint, compose, Scene};
use crate::state::{CellCoord, EditorState, PointerInput};

#[derive(Properties, PartialEq, Clone)]
pub struct GridCanvasProps {
    pub editor: UseReducerHandle<EditorState>,
    pub on_pointer: Callback<PointerInput>,
    #[prop_or(false)]
    pub picking: bool,
}

fn draw(canvas: &HtmlCanvasElement, editor: &EditorState) {
    let (w, h) = editor.mapper().surface_size();
    let (w, h) = (w.ceil() as u32, h.ceil() as u32);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(c) => c,
        None => return,
    };
    paint(&ctx, &compose(&Scene::of(editor)));
}

fn mouse_cell(editor: &EditorState, e: &MouseEvent) -> CellCoord {
    editor.mapper().to_cell(e.offset_x() as f64, e.offset_y() as f64)
}

fn touch_cell(canvas: &HtmlCanvasElement, editor: &EditorState, e: &TouchEvent) -> Option<CellCoord> {
    let t = e.touches().item(0)?;
    let rect = canvas.get_bounding_client_rect();
    Some(editor.mapper().to_cell(
        t.client_x() as f64 - rect.left(),
        t.client_y() as f64 - rect.top(),
    ))
}

type TouchCallback = Closure<dyn FnMut(TouchEvent)>;

/// Touch handlers registered on the canvas; removed again on drop.
struct TouchListeners {
    canvas: HtmlCanvasElement,
    handlers: Vec<(&'static str, TouchCallback)>,
}

impl TouchListeners {
    fn attach(
        canvas: HtmlCanvasElement,
        editor_ref: Rc<RefCell<UseReducerHandle<EditorState>>>,
        on_pointer_ref: Rc<RefCell<Callback<PointerInput>>>,
    ) -> Self {
        let last_touch: Rc<RefCell<Option<CellCoord>>> = Rc::new(RefCell::new(None));
        let start_cb = {
            let canvas = canvas.clone();
            let editor_ref = editor_ref.clone();
            let on_pointer_ref = on_pointer_ref.clone();
            let last_touch = last_touch.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                e.prevent_default();
                let editor = editor_ref.borrow();
                if let Some(at) = touch_cell(&canvas, &editor, &e) {
                    *last_touch.borrow_mut() = Some(at);
                    on_pointer_ref.borrow().emit(PointerInput::Down(at));
                }
            }) as Box<dyn FnMut(_)>)
        };
        let move_cb = {
            let canvas = canvas.clone();
            let last_touch = last_touch.clone();
            let on_pointer_ref = on_pointer_ref.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                e.prevent_default();
                let editor = editor_ref.borrow();
                if let Some(at) = touch_cell(&canvas, &editor, &e) {
                    *last_touch.borrow_mut() = Some(at);
                    on_pointer_ref.borrow().emit(PointerInput::Move(at));
                }
            }) as Box<dyn FnMut(_)>)
        };
        // A finished touch ends the stroke, then counts as a tap at its last cell.
        let end_cb = Closure::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            let cb = on_pointer_ref.borrow().clone();
            cb.emit(PointerInput::Up);
            if let Some(at) = last_touch.borrow_mut().take() {
                cb.emit(PointerInput::Click(at));
            }
        }) as Box<dyn FnMut(_)>);

        let handlers = vec![
            ("touchstart", start_cb),
            ("touchmove", move_cb),
            ("touchend", end_cb),
        ];
        for (name, cb) in &handlers {
            canvas
                .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                .ok();
        }
        Self { canvas, handlers }
    }
}

impl Drop for TouchListeners {
    fn drop(&mut self) {
        for (name, cb) in &self.handlers {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
    }
}

#[function_component(GridCanvas)]
pub fn grid_canvas(props: &GridCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let editor_ref = use_mut_ref(|| props.editor.clone());
    let on_pointer_ref = use_mut_ref(|| props.on_pointer.clone());
    *on_pointer_ref.borrow_mut() = props.on_pointer.clone();

    // Redraw after every reduction; the canvas follows the map's surface size.
    {
        let canvas_ref = canvas_ref.clone();
        let editor_ref = editor_ref.clone();
        let current = props.editor.clone();
        use_effect_with(props.editor.version, move |_| {
            *editor_ref.borrow_mut() = current.clone();
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw(&canvas, &current);
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let editor_ref = editor_ref.clone();
        let on_pointer_ref = on_pointer_ref.clone();
        use_effect_with((), move |_| {
            let listeners = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|canvas| TouchListeners::attach(canvas, editor_ref, on_pointer_ref));
            move || drop(listeners)
        });
    }

    let mouse = |make: fn(CellCoord) -> PointerInput| {
        let editor = props.editor.clone();
        let cb = props.on_pointer.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() == 0 {
                cb.emit(make(mouse_cell(&editor, &e)));
            }
        })
    };
    let onmousedown = mouse(PointerInput::Down);
    let onmousemove = mouse(PointerInput::Move);
    let onclick = mouse(PointerInput::Click);
    let onmouseup = {
        let cb = props.on_pointer.clone();
        Callback::from(move |_: MouseEvent| cb.emit(PointerInput::Up))
    };
    let onmouseleave = onmouseup.clone();

    let cursor = if props.picking { "crosshair" } else { "default" };
    html! {
        <canvas
            ref={canvas_ref}
            style={format!("display:block; touch-action:none; border:1px solid #30363d; cursor:{};", cursor)}
            {onmousedown}
            {onmousemove}
            {onmouseup}
            {onmouseleave}
            {onclick}
        />
    }
}
