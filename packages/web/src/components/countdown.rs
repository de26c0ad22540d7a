use std::time::Duration;

use dioxus::prelude::*;
use waitlist_core::Countdown;

use crate::time::sleep;

const TICK: Duration = Duration::from_secs(1);

/// Launch countdown, one tick per second.
#[component]
pub fn LaunchCountdown() -> Element {
    let countdown = Countdown::LAUNCH;
    let mut ticks = use_signal(|| 0u64);

    use_future(move || async move {
        loop {
            sleep(TICK).await;
            ticks += 1;
            if countdown.is_finished_at(Duration::from_secs(ticks())) {
                break;
            }
        }
    });

    let digits = countdown.digits_at(Duration::from_secs(ticks()));

    rsx! {
        div {
            class: "flex gap-4 justify-center font-mono",
            CountdownCell { value: digits.days, label: "Days" }
            CountdownCell { value: digits.hours, label: "Hours" }
            CountdownCell { value: digits.minutes, label: "Minutes" }
            CountdownCell { value: digits.seconds, label: "Seconds" }
        }
    }
}

#[component]
fn CountdownCell(value: u64, label: &'static str) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center rounded-lg border border-zinc-800 bg-zinc-900/60 px-4 py-3 min-w-16",
            span { class: "text-3xl font-bold text-white", "{value:02}" }
            span { class: "text-xs uppercase tracking-wide text-zinc-400", "{label}" }
        }
    }
}
