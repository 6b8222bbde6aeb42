//! A draggable colored tile with its message input.

use cutting::{PlayState, TileColor};
use leptos::prelude::*;

/// One of the five tiles. Pointer-down anywhere on it, input included,
/// starts a drag; moving and releasing are handled window-wide by the page.
#[component]
pub fn Tile(color: TileColor, play: RwSignal<PlayState>) -> impl IntoView {
    let tile_ref = NodeRef::<leptos::html::Div>::new();

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = tile_ref.get_untracked() {
                let rect = crate::util::dom::element_rect(&el);
                let pointer = crate::util::dom::pointer(&ev);
                play.update(|p| p.begin_drag(color, pointer, rect));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, tile_ref);
        }
    };

    let left = move || format!("{}px", play.with(|p| p.positions[color].x));
    let top = move || format!("{}px", play.with(|p| p.positions[color].y));
    let is_dragged = move || play.with(|p| p.dragged() == Some(color));

    view! {
        <div
            class=color.tile_class()
            class:tile--dragging=is_dragged
            node_ref=tile_ref
            on:mousedown=on_mouse_down
            style:position="absolute"
            style:cursor="move"
            style:left=left
            style:top=top
        >
            <input
                class=color.input_class()
                type="text"
                placeholder=color.placeholder()
                prop:value=move || play.with(|p| p.messages[color].clone())
                on:input=move |ev| play.update(|p| p.edit_message(color, event_target_value(&ev)))
            />
        </div>
    }
}
