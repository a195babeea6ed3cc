use leptos::prelude::*;

use crate::scroll::anchors;

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "Pregunta 1",
        "Lorem ipsum dolor sit amet consectetur adipisicing elit. Quas cupiditate laboriosam fugiat.",
    ),
    (
        "Pregunta 2",
        "Lorem ipsum dolor sit amet consectetur adipisicing elit. Quas cupiditate laboriosam fugiat.",
    ),
    (
        "Pregunta 3",
        "Lorem ipsum dolor sit amet consectetur adipisicing elit. Quas cupiditate laboriosam fugiat.",
    ),
    (
        "Pregunta 4",
        "Lorem ipsum dolor sit amet consectetur adipisicing elit. Quas cupiditate laboriosam fugiat.",
    ),
];

/// Single-open accordion selection: clicking the open item collapses it,
/// clicking any other item opens exactly that one.
fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn Faq() -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <section id=anchors::FAQ class="faq">
            <div class="container faq-inner">
                <h2 class="section-title">"FAQ"</h2>
                <div class="faq-list">
                    {FAQ_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, (question, answer))| {
                            view! {
                                <div class="faq-item">
                                    <button
                                        class=move || {
                                            if open.get() == Some(index) {
                                                "faq-question open"
                                            } else {
                                                "faq-question"
                                            }
                                        }
                                        on:click=move |_| {
                                            set_open.update(|o| *o = toggle_open(*o, index))
                                        }
                                    >
                                        <span class="faq-question-text">{*question}</span>
                                        <span class="faq-toggle-icon">
                                            {move || {
                                                if open.get() == Some(index) { "−" } else { "+" }
                                            }}
                                        </span>
                                    </button>
                                    <Show when=move || open.get() == Some(index)>
                                        <div class="faq-answer">{*answer}</div>
                                    </Show>
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
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_another_item_closes_the_first() {
        let open = toggle_open(None, 2);
        assert_eq!(open, Some(2));
        let open = toggle_open(open, 3);
        assert_eq!(open, Some(3));
    }

    #[test]
    fn toggling_the_open_item_closes_everything() {
        let open = toggle_open(Some(3), 3);
        assert_eq!(open, None);
    }

    #[test]
    fn four_questions_ship_with_the_page() {
        assert_eq!(FAQ_ITEMS.len(), 4);
    }
}
