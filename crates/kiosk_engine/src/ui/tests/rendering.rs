//! Frame generation and mount rules

use super::{widget_with_menu, RecordingBackend};
use crate::error::WidgetError;
use crate::foundation::money::Price;
use crate::ui::rendering::RenderCommand;
use crate::ui::widgets::TextStyle;
use crate::ui::{ControlId, OrderWidget};
use std::time::Duration;

#[test]
fn test_mount_presents_initial_frame() {
    let mut widget = OrderWidget::default();
    let mut backend = RecordingBackend::new();
    widget.mount(&mut backend).unwrap();

    assert!(widget.is_mounted());
    assert_eq!(backend.frame_count(), 1);

    // No toppings yet: price display, submit button, empty legend
    let controls: Vec<ControlId> = backend
        .last_frame()
        .iter()
        .map(RenderCommand::control)
        .collect();
    assert_eq!(
        controls,
        vec![
            ControlId::PriceDisplay,
            ControlId::Submit,
            ControlId::StatusLegend,
        ]
    );

    match backend.find(ControlId::PriceDisplay) {
        Some(RenderCommand::Text { content, .. }) => assert_eq!(content, "Order Total: $40"),
        other => panic!("expected price display text, got {other:?}"),
    }
    match backend.find(ControlId::Submit) {
        Some(RenderCommand::Button { label, enabled, .. }) => {
            assert_eq!(label, "Finish");
            assert!(*enabled);
        }
        other => panic!("expected submit button, got {other:?}"),
    }
    match backend.find(ControlId::StatusLegend) {
        Some(RenderCommand::Text { content, .. }) => assert!(content.is_empty()),
        other => panic!("expected status legend text, got {other:?}"),
    }
}

#[test]
fn test_frame_lists_controls_in_display_order() {
    let (mut widget, mut backend) = widget_with_menu();
    widget.render(&mut backend).unwrap();

    let controls: Vec<ControlId> = backend
        .last_frame()
        .iter()
        .map(RenderCommand::control)
        .collect();
    assert_eq!(
        controls,
        vec![
            ControlId::Topping(0),
            ControlId::Topping(1),
            ControlId::PriceDisplay,
            ControlId::Submit,
            ControlId::StatusLegend,
        ]
    );
}

#[test]
fn test_checkbox_labels_include_price() {
    let (mut widget, mut backend) = widget_with_menu();
    widget.render(&mut backend).unwrap();

    match backend.find(ControlId::Topping(0)) {
        Some(RenderCommand::Checkbox { label, checked, .. }) => {
            assert_eq!(label, "cheese $5");
            assert!(!checked);
        }
        other => panic!("expected checkbox, got {other:?}"),
    }
    match backend.find(ControlId::Topping(1)) {
        Some(RenderCommand::Checkbox { label, .. }) => assert_eq!(label, "olives $3"),
        other => panic!("expected checkbox, got {other:?}"),
    }
}

#[test]
fn test_registration_fills_the_menu() {
    let (widget, _backend) = widget_with_menu();
    assert_eq!(widget.topping_count(), 2);
    assert_eq!(widget.base_price(), Price::new(40));

    let names: Vec<&str> = widget
        .menu()
        .iter()
        .map(|topping| topping.name.as_str())
        .collect();
    assert_eq!(names, vec!["cheese", "olives"]);
    assert_eq!(widget.menu()[1].price, Price::new(3));
}

#[test]
fn test_register_before_mount_is_rejected() {
    let mut widget = OrderWidget::default();
    assert!(matches!(
        widget.register_topping("cheese", Price::new(5)),
        Err(WidgetError::NotMounted)
    ));
}

#[test]
fn test_render_before_mount_is_rejected() {
    let mut widget = OrderWidget::default();
    let mut backend = RecordingBackend::new();

    let err = widget.render(&mut backend).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<WidgetError>(),
        Some(WidgetError::NotMounted)
    ));
    assert_eq!(backend.frame_count(), 0);
}

#[test]
fn test_mount_twice_is_rejected() {
    let mut widget = OrderWidget::default();
    let mut backend = RecordingBackend::new();
    widget.mount(&mut backend).unwrap();

    let err = widget.mount(&mut backend).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<WidgetError>(),
        Some(WidgetError::AlreadyMounted)
    ));
}

#[test]
fn test_clean_widget_skips_regeneration() {
    let (mut widget, mut backend) = widget_with_menu();
    widget.render(&mut backend).unwrap();
    assert!(!widget.is_dirty());

    widget.render(&mut backend).unwrap();
    let frames = backend.frames();
    assert_eq!(frames[frames.len() - 1], frames[frames.len() - 2]);
}

#[test]
fn test_cycle_frames_show_disabled_state() {
    let (mut widget, mut backend) = widget_with_menu();
    widget.toggle_topping(0).unwrap();
    widget.place_order().unwrap();
    widget.render(&mut backend).unwrap();

    match backend.find(ControlId::Submit) {
        Some(RenderCommand::Button { enabled, .. }) => assert!(!enabled),
        other => panic!("expected submit button, got {other:?}"),
    }
    match backend.find(ControlId::Topping(0)) {
        Some(RenderCommand::Checkbox {
            checked, enabled, ..
        }) => {
            assert!(*checked);
            assert!(!enabled);
        }
        other => panic!("expected checkbox, got {other:?}"),
    }
    match backend.find(ControlId::StatusLegend) {
        Some(RenderCommand::Text { content, style, .. }) => {
            assert_eq!(content, "Processing order");
            assert_eq!(*style, TextStyle::Emphasis);
        }
        other => panic!("expected status legend, got {other:?}"),
    }

    widget.update(Duration::from_secs(3));
    widget.render(&mut backend).unwrap();
    match backend.find(ControlId::StatusLegend) {
        Some(RenderCommand::Text { content, style, .. }) => {
            assert_eq!(content, "Order Received! Thanks for your purchase");
            assert_eq!(*style, TextStyle::Regular);
        }
        other => panic!("expected status legend, got {other:?}"),
    }
}
