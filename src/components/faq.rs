//! FAQ section: single-open accordion over question/answer entries.

use crate::components::icons::{Icon, ICON_CHEVRON_DOWN};
use crate::components::section::{reveal_class, SectionHeader};
use crate::interactions::{use_scroll_reveal, AccordionState, RevealOptions};
use crate::theme::ThemeColor;
use crate::types::FaqItem;
use leptos::html::Section;
use leptos::prelude::*;

/// Which entry starts open. The storefront opens the first question.
pub const DEFAULT_OPEN_INDEX: Option<usize> = Some(0);

/// Default question/answer entries when the tenant supplies none.
pub fn default_faq_items() -> Vec<FaqItem> {
    [
        (
            "How do I place my first order?",
            "It's super easy - book a free consultation, chat with one of our specialists, \
             get your script sorted, and you're good to go. Your first order can be placed \
             right after.",
        ),
        (
            "Is everything lab-tested?",
            "Absolutely. Every single product on our shelves goes through rigorous \
             third-party testing. We don't play when it comes to quality and safety.",
        ),
        (
            "How fast is delivery?",
            "We move quick. Orders placed before noon get same-day processing, and you can \
             track your package in real-time. Discreet packaging, always.",
        ),
        (
            "Can I get help choosing the right product?",
            "That's literally what we're here for. Our team knows their stuff and will \
             match you with the perfect product based on what you're looking for.",
        ),
        (
            "Do you offer online consultations?",
            "Yep! We do both in-person and telehealth consults. Book online and pick \
             whatever works best for your schedule. Easy.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqItem {
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}

#[component]
pub fn Faq(
    #[prop(into, default = String::from("Got Questions?"))] heading: String,
    #[prop(into, default = String::from(
        "We've got answers. Here's the lowdown on how we roll."
    ))]
    subtitle: String,
    /// Entries; defaults to [`default_faq_items`].
    #[prop(optional)]
    items: Option<Vec<FaqItem>>,
) -> impl IntoView {
    let items = items.unwrap_or_else(default_faq_items);
    let section_ref = NodeRef::<Section>::new();
    let visible = use_scroll_reveal(section_ref, RevealOptions::default());
    let accordion = RwSignal::new(AccordionState::new(DEFAULT_OPEN_INDEX));

    view! {
        <section
            node_ref=section_ref
            class="section"
            style=format!("background-color: {}", ThemeColor::Surface.hsl())
        >
            <div class="container container-narrow">
                <SectionHeader heading=heading subtitle=subtitle visible=visible />
                <div class=reveal_class("faq-list", visible.into())>
                    {items.into_iter().enumerate().map(|(index, item)| view! {
                        <FaqEntry item=item index=index accordion=accordion />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One accordion entry. Open/close is driven by the shared
/// [`AccordionState`]; the height/opacity transition is CSS only.
#[component]
fn FaqEntry(item: FaqItem, index: usize, accordion: RwSignal<AccordionState>) -> impl IntoView {
    let is_open = move || accordion.get().is_open(index);

    view! {
        <div
            class="faq-entry"
            style=format!("border-bottom: 1px solid {}", ThemeColor::Border.hsl())
        >
            <button
                class="faq-question"
                on:click=move |_| accordion.update(|state| state.toggle(index))
            >
                <span style=format!("color: {}", ThemeColor::Heading.hsl())>
                    {item.question}
                </span>
                <span
                    class=move || if is_open() { "faq-caret open" } else { "faq-caret" }
                    style=format!("color: {}", ThemeColor::Primary.hsl())
                >
                    <Icon path=ICON_CHEVRON_DOWN size="20" />
                </span>
            </button>
            <div class=move || if is_open() { "faq-answer open" } else { "faq-answer" }>
                <p style=format!("color: {}", ThemeColor::Text.hsl())>{item.answer}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_five_default_entries_with_the_first_expanded() {
        let items = default_faq_items();
        assert_eq!(items.len(), 5);

        let state = AccordionState::new(DEFAULT_OPEN_INDEX);
        assert!(state.is_open(0));
        for index in 1..items.len() {
            assert!(!state.is_open(index));
        }
    }

    #[test]
    fn closing_the_open_question_leaves_everything_collapsed() {
        let mut state = AccordionState::new(DEFAULT_OPEN_INDEX);
        state.toggle(0);
        assert_eq!(state.open_index(), None);
    }
}
