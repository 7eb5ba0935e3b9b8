//! FAQ accordion - at most one answer open at a time

use leptos::prelude::*;

use super::{Icon, ICON_CARET_DOWN};
use crate::content::{Faq, FAQS};

/// Next open item after a click on `clicked`.
///
/// Clicking the open item closes it; clicking any other item opens that one
/// and closes the rest.
pub fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Accordion of questions. All items start collapsed.
#[component]
pub fn FaqAccordion(#[prop(default = FAQS)] items: &'static [Faq]) -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <section id="faq" class="faq">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Frequently asked questions"</h2>
                </div>
                <div class="faq-list" data-accordion="faq">
                    {items
                        .iter()
                        .enumerate()
                        .map(|(idx, item)| {
                            let is_open = move || open.get() == Some(idx);
                            let panel_id = format!("faq-panel-{}", idx);
                            view! {
                                <div class=move || if is_open() { "faq-item open" } else { "faq-item" }>
                                    <button
                                        class="faq-question"
                                        aria-expanded=move || is_open().to_string()
                                        aria-controls=panel_id.clone()
                                        data-faq-index=idx.to_string()
                                        on:click=move |_| set_open.update(|o| *o = toggle_open(*o, idx))
                                    >
                                        <span>{item.question}</span>
                                        <Icon path=ICON_CARET_DOWN size="18" class="faq-caret" />
                                    </button>
                                    <div id=panel_id class="faq-answer" hidden=move || !is_open()>
                                        <p>{item.answer}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_closed_item() {
        assert_eq!(toggle_open(None, 2), Some(2));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn clicking_other_item_switches() {
        assert_eq!(toggle_open(Some(0), 3), Some(3));
    }
}
