//! Global state management

use dioxus::prelude::*;
use waitlist_core::Notice;

/// Toasts currently on screen
#[derive(Clone, Copy)]
pub struct Notices {
    pub items: Signal<Vec<(u64, Notice)>>,
    next_id: Signal<u64>,
}

impl Notices {
    pub fn push(mut self, notice: Notice) {
        let id = *self.next_id.peek() + 1;
        self.next_id.set(id);
        self.items.write().push((id, notice));
    }

    pub fn dismiss(mut self, id: u64) {
        self.items.write().retain(|(item, _)| *item != id);
    }
}

#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 0);

    use_context_provider(|| Notices { items, next_id });

    children
}

pub fn use_notices() -> Notices {
    use_context::<Notices>()
}

/// Confetti trigger shared by every page.
///
/// A count of requested bursts. The overlay plays one burst per increment,
/// so a page firing while an earlier burst is still on screen restarts it.
#[derive(Clone, Copy)]
pub struct Celebration {
    pub triggers: Signal<u64>,
}

impl Celebration {
    pub fn fire(mut self) {
        let next = *self.triggers.peek() + 1;
        self.triggers.set(next);
    }
}

#[component]
pub fn CelebrationProvider(children: Element) -> Element {
    let triggers = use_signal(|| 0);

    use_context_provider(|| Celebration { triggers });

    children
}

pub fn use_celebration() -> Celebration {
    use_context::<Celebration>()
}
