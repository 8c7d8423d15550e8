use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::scroll::ScrollHandle;

/// The page's scrollable region. Reads its own vertical offset whenever it
/// scrolls (and once after mounting) and publishes it on `handle`.
#[component]
pub fn ScrollContainer(
    handle: ScrollHandle,
    #[props(default = "app".to_string())] id: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut element = use_signal(|| Option::<Rc<MountedData>>::None);

    let publish = move |target: Rc<MountedData>, handle: ScrollHandle| {
        spawn(async move {
            match target.get_scroll_offset().await {
                Ok(offset) => handle.dispatch(offset.y),
                Err(err) => tracing::warn!("reading scroll offset failed: {err:?}"),
            }
        });
    };

    let mount_handle = handle.clone();
    let scroll_handle = handle.clone();

    rsx! {
        div {
            id: "{id}",
            class: "scroll-container {class}",
            onmounted: move |evt| {
                let data = evt.data();
                element.set(Some(data.clone()));
                publish(data, mount_handle.clone());
            },
            onscroll: move |_| {
                if let Some(target) = element() {
                    publish(target, scroll_handle.clone());
                }
            },
            {children}
        }
    }
}
