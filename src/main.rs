//! Scripted demo of the picker controller and control panel.
//!
//! Drives the controller through a plane drag, a hue drag, and numeric
//! field entry, then builds the payloads a host would POST. Run with
//! `RUST_LOG=debug` to see the drag-state transitions.

use huepanel::{ColorPicker, ControlPanel, PickerConfig, PickerEvent, Surface};

fn print_snapshot(label: &str, snapshot: huepanel::Snapshot) {
    println!(
        "{label}: rgb=({}, {}, {}) plane=({:.2}, {:.2}) line={:.2}",
        snapshot.rgb.r,
        snapshot.rgb.g,
        snapshot.rgb.b,
        snapshot.plane_x,
        snapshot.plane_y,
        snapshot.line_t,
    );
}

fn main() {
    env_logger::init();

    let mut picker = match ColorPicker::new(PickerConfig::default()) {
        Ok(picker) => picker,
        Err(err) => {
            eprintln!("picker configuration error: {err}");
            std::process::exit(1);
        }
    };

    print_snapshot("initial", picker.snapshot());

    // Drag across the saturation/value plane.
    let plane_drag = [
        PickerEvent::PointerPressed {
            surface: Surface::Plane,
            position: (160.0, 30.0),
        },
        PickerEvent::PointerMoved {
            surface: Surface::Plane,
            position: (120.0, 70.0),
        },
        PickerEvent::PointerReleased {
            surface: Surface::Plane,
        },
    ];
    for event in &plane_drag {
        if let Some(snapshot) = picker.handle_event(event) {
            print_snapshot("plane drag", snapshot);
        }
    }

    // Drag the hue line to a teal hue.
    let line_drag = [
        PickerEvent::PointerPressed {
            surface: Surface::Line,
            position: (0.0, 100.0),
        },
        PickerEvent::PointerMoved {
            surface: Surface::Line,
            position: (0.0, 111.0),
        },
        PickerEvent::PointerReleased {
            surface: Surface::Line,
        },
    ];
    for event in &line_drag {
        if let Some(snapshot) = picker.handle_event(event) {
            print_snapshot("line drag", snapshot);
        }
    }

    // Type into the RGB fields, one of them invalid.
    let snapshot = picker.update_from_rgb_fields("128", "oops", "400");
    print_snapshot("rgb fields", snapshot);

    // Assemble the payloads a host would send.
    let mut panel = ControlPanel::new();
    panel.set_temperature(70);
    panel.set_brightness(40);
    panel.set_color_brightness(85);

    let payloads = [
        panel.set_power(true),
        panel.send_temperature(),
        panel.send_color(&picker),
    ];
    for payload in &payloads {
        match serde_json::to_string(payload) {
            Ok(body) => println!("payload: {body}"),
            Err(err) => eprintln!("payload serialization error: {err}"),
        }
    }

    if let Some(payload) = panel.toggle_preset("rainbow") {
        match serde_json::to_string(&payload) {
            Ok(body) => println!("payload: {body}"),
            Err(err) => eprintln!("payload serialization error: {err}"),
        }
    }
}
