use evcore::bus::{EventBus, EventFilter, Logger};
use evcore::codes::{MapNames, EV_ABS, EV_KEY, EV_REL, EV_SYN};
use evcore::{classify, InputEvent};

fn main() {
    // A real host would load the full code->name dump; a few entries are
    // enough to show resolution and fallback.
    let mut names = MapNames::new();
    names.insert(EV_KEY, 28, "KEY_ENTER");
    names.insert(EV_REL, 0, "REL_X");
    names.insert(EV_ABS, 1, "ABS_Y");
    names.insert(EV_SYN, 0, "SYN_REPORT");

    let mut bus = EventBus::new();
    bus.add_listener(Logger::new(names.clone()), EventFilter::All);

    // A canned stream standing in for an external transport.
    let raw = [
        InputEvent::new(1337197425, 477835, EV_KEY, 28, 1),
        InputEvent::new(1337197425, 501002, EV_REL, 0, -5),
        InputEvent::new(1337197425, 501010, EV_ABS, 1, 300),
        InputEvent::new(1337197425, 501011, EV_SYN, 0, 0),
        InputEvent::new(1337197425, 611002, EV_KEY, 28, 0),
        InputEvent::new(1337197426, 2, 0x1f, 9, 7), // no classifier registered
    ];

    for event in raw {
        match classify(event, &names) {
            Ok(typed) => bus.emit(&typed),
            // Unclassified events stay usable in generic form.
            Err(err) => println!("{err}: {event}"),
        }
    }
}
