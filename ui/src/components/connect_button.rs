use dioxus::prelude::*;

use crate::core::format::short_address;

/// Default occupant of the navbar's wallet slot. Shows the connected account
/// when one is supplied; connection itself is the host application's job.
#[component]
pub fn ConnectButton(address: Option<String>, onclick: Option<EventHandler<MouseEvent>>) -> Element {
    let (text, label) = match address.as_deref() {
        Some(address) => {
            let short = short_address(address);
            let label = crate::t!("nav-connected-as", address = short.as_str());
            (short, label)
        }
        None => {
            let text = crate::t!("nav-connect-wallet");
            (text.clone(), text)
        }
    };
    let class = if address.is_some() {
        "button button--ghost connect-button connect-button--connected"
    } else {
        "button button--primary connect-button"
    };

    rsx! {
        button {
            r#type: "button",
            class,
            aria_label: label,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            "{text}"
        }
    }
}
