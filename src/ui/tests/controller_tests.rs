// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Controller tests
//!
//! Test for the MVC Controller logic

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{ConfigError, WindowConfig};
use crate::core::{ButtonId, ButtonRegistry};
use crate::ui::{App, Controller, UiError};

const FOOTBAR: &str = "v1.0.0 (2024-06-02)";

/// Helper: Creates a controller with the four application buttons
///
/// Every callback appends its label to the returned log.
fn create_test_controller() -> (Controller, Rc<RefCell<Vec<&'static str>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = ButtonRegistry::new();

    for label in ["Device Info", "Flash FW", "Debug", "About"] {
        let log = log.clone();
        registry.register(label, move || log.borrow_mut().push(label));
    }

    let controller = Controller::new(registry, FOOTBAR).unwrap();
    (controller, log)
}

#[test]
fn test_controller_creation() {
    let (controller, log) = create_test_controller();

    assert_eq!(controller.button_count(), 4);
    assert_eq!(controller.footbar_text(), FOOTBAR);
    assert!(log.borrow().is_empty(), "No callback should run at startup");
}

#[test]
fn test_empty_registry_rejected() {
    let result = Controller::new(ButtonRegistry::new(), FOOTBAR);

    assert!(matches!(result, Err(UiError::EmptyRegistry)));
}

#[test]
fn test_header_starts_with_first_label() {
    let (controller, _log) = create_test_controller();

    assert_eq!(controller.header_text(), "Device Info");
    assert_eq!(controller.selected(), ButtonId::new(0));
}

#[test]
fn test_buttons_in_registration_order() {
    let (controller, _log) = create_test_controller();

    let labels: Vec<&str> = controller.buttons().map(|b| b.label()).collect();
    assert_eq!(labels, vec!["Device Info", "Flash FW", "Debug", "About"]);
}

#[test]
fn test_press_updates_header_and_selection() {
    let (controller, log) = create_test_controller();

    assert!(controller.press(ButtonId::new(2)));

    assert_eq!(controller.header_text(), "Debug");
    assert_eq!(controller.selected(), ButtonId::new(2));
    assert_eq!(*log.borrow(), vec!["Debug"]);
}

#[test]
fn test_press_unknown_id_is_noop() {
    let (controller, log) = create_test_controller();
    controller.press(ButtonId::new(1));

    assert!(!controller.press(ButtonId::new(99)));

    assert_eq!(controller.header_text(), "Flash FW");
    assert_eq!(controller.selected(), ButtonId::new(1));
    assert_eq!(*log.borrow(), vec!["Flash FW"]);
}

#[test]
fn test_listeners_notified_on_press() {
    let (controller, _log) = create_test_controller();
    let headers = Rc::new(RefCell::new(Vec::new()));
    let selections = Rc::new(RefCell::new(Vec::new()));

    let headers_clone = headers.clone();
    controller.connect_header_changed(move |text| headers_clone.borrow_mut().push(text.to_string()));
    let selections_clone = selections.clone();
    controller.connect_selection_changed(move |id| selections_clone.borrow_mut().push(id));

    controller.press(ButtonId::new(3));
    controller.press(ButtonId::new(42));

    assert_eq!(*headers.borrow(), vec!["About".to_string()]);
    assert_eq!(*selections.borrow(), vec![ButtonId::new(3)]);
}

#[test]
fn test_end_to_end_two_buttons() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut registry = ButtonRegistry::new();

    let log_f1 = log.clone();
    registry.register("Device Info", move || log_f1.borrow_mut().push("f1"));
    let log_f2 = log.clone();
    registry.register("Flash FW", move || log_f2.borrow_mut().push("f2"));

    let controller = Controller::new(registry, FOOTBAR).unwrap();

    controller.press(ButtonId::new(1));
    assert_eq!(*log.borrow(), vec!["f2"]);
    assert_eq!(controller.header_text(), "Flash FW");

    controller.press(ButtonId::new(99));
    assert_eq!(*log.borrow(), vec!["f2"]);
    assert_eq!(controller.header_text(), "Flash FW");
}

#[test]
fn test_press_handler_does_not_keep_controller_alive() {
    let (controller, log) = create_test_controller();
    let controller = Rc::new(controller);

    let handler = controller.press_handler();
    assert_eq!(Rc::strong_count(&controller), 1, "Handler should hold a weak reference");

    handler(ButtonId::new(1));
    assert_eq!(controller.header_text(), "Flash FW");

    drop(controller);
    handler(ButtonId::new(0));
    assert_eq!(*log.borrow(), vec!["Flash FW"], "Dropped controller ignores presses");
}

#[test]
fn test_app_rejects_invalid_size_before_running() {
    let mut registry = ButtonRegistry::new();
    registry.register("Device Info", || {});
    let config = WindowConfig::new("uJFlasher").with_min_size(Some(0), Some(600));

    let result = App::new(registry, config);

    assert!(matches!(
        result,
        Err(UiError::Config(ConfigError::InvalidSize {
            dimension: "width",
            value: 0
        }))
    ));
}

#[test]
fn test_app_rejects_empty_registry_before_running() {
    let result = App::new(ButtonRegistry::new(), WindowConfig::default());

    assert!(matches!(result, Err(UiError::EmptyRegistry)));
}
