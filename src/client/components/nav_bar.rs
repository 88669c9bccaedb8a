use dioxus::prelude::*;

pub fn top_bar() -> Element {
    rsx! {
        div {
            background_color: "#0a5f98",
            width: "100%",
            margin: "0",
            padding: "20px 0",
            height: "80px",
            display: "flex",
            align_items: "center",
            justify_content: "center",

            div {
                font_size: "2.2em",
                color: "white",
                margin: "0",
                "Learn"
            }
        }
    }
}

/// Every press calls `on_back` exactly once.
pub fn back_handler<E>(on_back: EventHandler) -> impl FnMut(E) {
    move |_| on_back.call(())
}

#[component]
pub fn BackButton(on_back: EventHandler) -> Element {
    rsx! {
        button {
            class: "back",
            onclick: back_handler::<MouseEvent>(on_back),
            "← Back"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn press_back(presses: (usize, Rc<Cell<usize>>)) -> Element {
        let (times, calls) = presses;
        let on_back = EventHandler::new(move |_: ()| calls.set(calls.get() + 1));
        use_hook(move || {
            let mut back = back_handler::<()>(on_back);
            for _ in 0..times {
                back(());
            }
        });

        rsx! {
            BackButton { on_back: on_back }
        }
    }

    fn pressed(times: usize) -> (usize, String) {
        let calls = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new_with_props(press_back, (times, calls.clone()));
        dom.rebuild_in_place();
        (calls.get(), dioxus_ssr::render(&dom))
    }

    #[test]
    fn back_calls_handler_once_per_press() {
        assert_eq!(pressed(1).0, 1);
        assert_eq!(pressed(3).0, 3);
    }

    #[test]
    fn rendering_does_not_go_back() {
        let (calls, html) = pressed(0);
        assert_eq!(calls, 0);
        assert!(html.contains("class=\"back\""), "{}", html);
        assert!(html.contains("Back"), "{}", html);
    }

    #[test]
    fn top_bar_needs_no_router() {
        fn bar() -> Element {
            top_bar()
        }

        let mut dom = VirtualDom::new(bar);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("Learn"));
    }
}
