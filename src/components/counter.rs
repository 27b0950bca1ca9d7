use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::DEFAULT_REVEAL_MARGIN;
use crate::hooks::viewport::use_in_view_once;
use crate::motion::count_up::{format_count, needs_run, CountUp, CounterTiming, Tick};

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: String,
}

/// Counts from 0 up to `value` the first time it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view_once(node.clone(), DEFAULT_REVEAL_MARGIN);
    let count = use_state(|| 0u32);
    // Target the last completed run settled on.
    let settled = use_state(|| None::<u32>);

    {
        let count = count.setter();
        let settled_setter = settled.setter();
        use_effect_with_deps(
            move |(in_view, settled, target)| {
                let active = if needs_run(*in_view, *settled, *target) {
                    debug!("counter to {} started", target);
                    // A new target is a new run: restart the display from zero.
                    count.set(0);
                    let timing = CounterTiming::default();
                    let run = Rc::new(RefCell::new(CountUp::new(*target, timing)));
                    let ticking = run.clone();
                    let interval = Interval::new(timing.tick_ms, move || {
                        let tick = ticking.borrow_mut().tick();
                        if let Some(tick) = tick {
                            count.set(tick.value());
                            if let Tick::Done(value) = tick {
                                debug!("counter reached {}", value);
                                // Re-keys this effect; its cleanup clears the interval.
                                settled_setter.set(Some(value));
                            }
                        }
                    });
                    Some((run, interval))
                } else {
                    None
                };

                move || {
                    if let Some((run, interval)) = active {
                        run.borrow_mut().cancel();
                        drop(interval);
                    }
                }
            },
            (in_view, *settled, props.value),
        );
    }

    html! {
        <span ref={node}>{format_count(*count, &props.suffix)}</span>
    }
}
