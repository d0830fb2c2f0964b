//! Shared utilities for integration testing.

use spa_router::{ComponentRef, RouteEntry, RouteTable, StaticView, ViewHost};

/// View host that records mount/unmount commands in order.
#[derive(Default)]
pub struct RecordingHost {
    pub events: Vec<String>,
}

impl ViewHost for RecordingHost {
    fn mount(&mut self, entry: &RouteEntry) {
        self.events.push(format!("mount {}", entry.component().label()));
    }

    fn unmount(&mut self, entry: &RouteEntry) {
        self.events.push(format!("unmount {}", entry.component().label()));
    }
}

/// The primary table: '/', '/milestone', '/hello'. Returns the table plus
/// the two component handles for identity assertions.
#[allow(dead_code)]
pub fn milestone_table() -> (RouteTable, ComponentRef, ComponentRef) {
    let milestone = ComponentRef::new(StaticView::new("MileStone"));
    let hello = ComponentRef::new(StaticView::new("HelloWorld"));
    let table = RouteTable::builder()
        .route("/", milestone.clone())
        .route("/milestone", milestone.clone())
        .route("/hello", hello.clone())
        .build();
    (table, milestone, hello)
}

/// The named variant: '/' and '/milestone' only, both named "milestone".
#[allow(dead_code)]
pub fn named_table() -> (RouteTable, ComponentRef) {
    let milestone = ComponentRef::new(StaticView::new("MileStone"));
    let table = RouteTable::builder()
        .named_route("/", "milestone", milestone.clone())
        .named_route("/milestone", "milestone", milestone.clone())
        .build();
    (table, milestone)
}
