use crate::ui::Route;
use dioxus::prelude::*;

/// Layout component with the app header
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "bg-gray-800 text-white p-4 flex items-center",
            span { class: "text-xl font-bold", "vitrine" }
        }

        Outlet::<Route> {}
    }
}
