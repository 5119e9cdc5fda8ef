// Example: a 10k-row list driven by an in-memory scroll host and a manual clock.
//
// Run with:
// RUST_LOG=fixed_list=debug cargo run -p fixed-list-adapter --example simple --features tracing
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Context;
use fixed_list::ListConfig;
use fixed_list_adapter::{ManualTimers, ScrollHost, ScrollListener, WindowedList};
use tracing_subscriber::EnvFilter;

const ITEM_HEIGHT: f64 = 40.0;
const CONTAINER_HEIGHT: f64 = 600.0;

#[derive(Default)]
struct Element {
    scroll_top: f64,
    next_id: u64,
    listeners: Vec<(u64, ScrollListener)>,
}

/// A scrollable pane standing in for a real UI element.
#[derive(Clone, Default)]
struct Pane(Rc<RefCell<Element>>);

impl Pane {
    fn scroll_to(&self, scroll_top: f64) {
        self.0.borrow_mut().scroll_top = scroll_top;
        let listeners: Vec<_> = self
            .0
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl ScrollHost for Pane {
    type Registration = u64;

    fn scroll_offset(&self) -> f64 {
        self.0.borrow().scroll_top
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> u64 {
        let mut el = self.0.borrow_mut();
        el.next_id += 1;
        let id = el.next_id;
        el.listeners.push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, registration: u64) {
        self.0
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != registration);
    }
}

struct Item {
    id: String,
    text: String,
}

fn create_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|index| Item {
            id: format!("row-{index:05}"),
            text: index.to_string(),
        })
        .collect()
}

fn render(list: &mut WindowedList<Pane, ManualTimers>, items: &[Item]) {
    let frame = list.frame();
    println!(
        "total_height={} rows={:?}..={:?} is_scrolling={}",
        frame.total_height,
        frame.start_index(),
        frame.end_index(),
        frame.is_scrolling
    );
    for virtual_item in frame.items.iter().take(3) {
        let item = &items[virtual_item.index];
        let label = if frame.is_scrolling {
            "Scrolling..."
        } else {
            item.text.as_str()
        };
        println!("  [{}] translateY({}) {label}", item.id, virtual_item.offset_top);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut document = HashMap::new();
    document.insert("root", Pane::default());
    let root = document
        .get("root")
        .cloned()
        .context("root mount point not found; cannot mount the list")?;

    let mut items = create_items(10_000);
    let timers = ManualTimers::new();
    let mut list = WindowedList::new(
        ListConfig::new(items.len(), ITEM_HEIGHT, CONTAINER_HEIGHT),
        timers.clone(),
    );
    list.attach(|| Some(root.clone()));
    render(&mut list, &items);

    // A short burst of scroll signals keeps `is_scrolling` set.
    for (now_ms, scroll_top) in [(0, 1_000.0), (40, 2_500.0), (80, 4_000.0)] {
        timers.advance_to(now_ms);
        root.scroll_to(scroll_top);
    }
    render(&mut list, &items);

    // The "reverse" button: same count, so the rendered rows keep their positions.
    items.reverse();
    timers.advance_to(80 + list.config().scrolling_quiet_period_ms);
    render(&mut list, &items);

    list.detach();
    Ok(())
}
