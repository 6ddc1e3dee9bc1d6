use sycamore::prelude::*;

use crate::store;

#[component]
pub fn InteractiveCounter<G: Html>(cx: Scope) -> View<G> {
    let counter = store::use_store(cx).counter().clone();

    let dec = counter.clone();
    let decrement = move |_| dec.decrement();

    let inc = counter.clone();
    let increment = move |_| inc.increment();

    let btn = "bg-sky-500 hover:bg-sky-400 dark:bg-sky-600 dark:hover:bg-sky-500 \
        text-white w-8 h-8 rounded-full shadow-md";

    view! { cx,
        div(class="flex items-center gap-x-3") {
            button(class=btn, title="Decrement", on:click=decrement) { "-" }
            span(class="min-w-[3ch] text-center text-lg tabular-nums") { (counter.count()) }
            button(class=btn, title="Increment", on:click=increment) { "+" }
        }
    }
}

#[cfg(test)]
mod tests {
    use sycamore::prelude::*;

    use super::*;
    use crate::store;

    // Renders the widget with a fresh store wired in, like `mount` does.
    fn render() -> String {
        sycamore::render_to_string(|cx| {
            store::provide_store(cx);
            view! { cx, InteractiveCounter() }
        })
    }

    // Server rendering interleaves marker comments with dynamic text,
    // drop them before matching on the markup.
    fn strip_comments(mut html: &str) -> String {
        let mut out = String::new();
        while let Some(start) = html.find("<!--") {
            out.push_str(&html[..start]);
            html = match html[start..].find("-->") {
                Some(end) => &html[start + end + 3..],
                None => "",
            };
        }
        out.push_str(html);
        out
    }

    #[test]
    fn renders_default_count() {
        let html = strip_comments(&render());
        assert!(html.contains(">0<"), "{html}");
    }

    #[test]
    fn renders_increment_and_decrement_buttons() {
        let html = render();
        assert_eq!(html.matches("<button").count(), 2, "{html}");
        assert!(html.contains("title=\"Increment\""), "{html}");
        assert!(html.contains("title=\"Decrement\""), "{html}");
    }
}
