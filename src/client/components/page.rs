use dioxus::prelude::*;

/// Content area below the fixed navbar, with an optional heading
#[component]
pub fn Page(
    class: Option<&'static str>,
    heading: Option<&'static str>,
    children: Element,
) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            if let Some(heading) = heading {
                h1 { class: "text-2xl font-semibold py-4", "{heading}" }
            }
            {children}
        }
    )
}
