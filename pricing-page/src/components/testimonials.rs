//! Customer quotes

use leptos::prelude::*;

use crate::content::{Testimonial, TESTIMONIALS};

/// Grid of testimonial cards.
#[component]
pub fn Testimonials(
    #[prop(default = TESTIMONIALS)] items: &'static [Testimonial],
) -> impl IntoView {
    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Trusted by security teams"</h2>
                </div>
                <div class="testimonial-grid">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <figure class="testimonial-card">
                                    <blockquote>{item.quote}</blockquote>
                                    <figcaption>
                                        <span class="testimonial-author">{item.author}</span>
                                        <span class="testimonial-role">
                                            {format!("{}, {}", item.role, item.company)}
                                        </span>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
