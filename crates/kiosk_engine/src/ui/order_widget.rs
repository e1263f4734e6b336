//! Ordering widget
//!
//! Central widget managing the topping menu, the running total, order
//! submission, and the timed confirmation cycle. The widget is a pure
//! state object: hosts feed it clicks and time steps, and it answers
//! with state changes, render commands, and events. It never reads the
//! wall clock or talks to the screen on its own.

use crate::config::KioskConfig;
use crate::error::WidgetError;
use crate::events::{Event, EventArg, EventSystem, EventType};
use crate::foundation::money::Price;
use crate::foundation::time::Countdown;
use crate::order::{OrderLog, OrderPhase, PizzaConfig, Topping, WidgetMessages};
use crate::ui::backend::RenderBackend;
use crate::ui::input::ClickResponse;
use crate::ui::rendering::WidgetRenderer;
use crate::ui::widgets::{Button, Checkbox, TextLine, TextStyle};
use crate::ui::ControlId;
use std::time::Duration;

/// Label on the submit button
const SUBMIT_LABEL: &str = "Finish";

/// Status legend text while an order is being processed
const PROCESSING_NOTICE: &str = "Processing order";

/// Format the price display line
fn format_total(total: Price) -> String {
    format!("Order Total: {total}")
}

/// The ordering widget
///
/// Presents a topping menu as checkboxes, a running total, a submit
/// button, and a status legend. Placing an order starts a two-stage
/// confirmation cycle during which the controls are disabled and the
/// display keeps showing the submitted order; once the cycle finishes
/// the widget resets itself for the next customer.
///
/// Time never passes on its own. The host calls [`OrderWidget::update`]
/// with elapsed time steps to move the cycle along, which keeps the
/// widget deterministic and testable without real waiting.
pub struct OrderWidget {
    base_price: Price,
    processing_delay: Duration,
    completed_delay: Duration,

    mounted: bool,
    menu: Vec<Topping>,
    checkboxes: Vec<Checkbox>,
    price_display: TextLine,
    submit: Button,
    legend: TextLine,

    current: PizzaConfig,
    orders: OrderLog,
    messages: WidgetMessages,
    phase: OrderPhase,

    renderer: WidgetRenderer,
    events: EventSystem,
    elapsed: Duration,
}

impl Default for OrderWidget {
    fn default() -> Self {
        Self::from_parts(&KioskConfig::default(), WidgetMessages::default())
    }
}

impl OrderWidget {
    /// Create a widget from validated settings
    pub fn new(config: &KioskConfig) -> Result<Self, WidgetError> {
        config.validate().map_err(WidgetError::InvalidConfig)?;
        let messages = WidgetMessages::new(
            config.order_received_message.clone(),
            config.thanks_message.clone(),
        )?;
        Ok(Self::from_parts(config, messages))
    }

    fn from_parts(config: &KioskConfig, messages: WidgetMessages) -> Self {
        let base_price = config.base_price;
        Self {
            base_price,
            processing_delay: config.processing_delay(),
            completed_delay: config.completed_delay(),
            mounted: false,
            menu: Vec::new(),
            checkboxes: Vec::new(),
            price_display: TextLine::new(format_total(base_price)),
            submit: Button::new(SUBMIT_LABEL),
            legend: TextLine::default(),
            current: PizzaConfig::new(base_price),
            orders: OrderLog::new(),
            messages,
            phase: OrderPhase::Idle,
            renderer: WidgetRenderer::new(),
            events: EventSystem::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Mount the widget on a render backend and present the initial frame
    ///
    /// A widget mounts once; mounting again is an error. Until this
    /// succeeds the menu cannot be changed and nothing renders.
    pub fn mount(
        &mut self,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.mounted {
            return Err(WidgetError::AlreadyMounted.into());
        }
        self.mounted = true;
        self.renderer.mark_dirty();
        log::info!("Order widget mounted, base price {}", self.base_price);
        self.render(backend)
    }

    /// Register a topping on the menu
    ///
    /// The topping appears as an unchecked checkbox at the end of the
    /// menu. Returns the topping's index, which identifies it in later
    /// toggles and click routing. The menu is frozen while an order
    /// confirmation cycle is running.
    pub fn register_topping(
        &mut self,
        name: impl Into<String>,
        price: Price,
    ) -> Result<usize, WidgetError> {
        if !self.mounted {
            return Err(WidgetError::NotMounted);
        }
        if !self.phase.is_idle() {
            return Err(WidgetError::OrderInFlight);
        }
        let name = name.into();
        if name.is_empty() {
            return Err(WidgetError::BlankName);
        }

        let topping = Topping::new(name, price);
        let index = self.menu.len();
        log::info!("Registered topping {index}: {}", topping.display_label());
        self.checkboxes.push(Checkbox::new(topping.display_label()));
        self.menu.push(topping);
        self.renderer.mark_dirty();
        Ok(index)
    }

    /// Toggle a topping's selection and return the new order total
    ///
    /// Selecting adds the topping's price to the running total,
    /// deselecting removes it. The price display line is recomputed
    /// immediately.
    pub fn toggle_topping(&mut self, index: usize) -> Result<Price, WidgetError> {
        if !self.phase.is_idle() {
            return Err(WidgetError::OrderInFlight);
        }
        let Some(topping) = self.menu.get(index) else {
            return Err(WidgetError::ToppingOutOfRange {
                index,
                count: self.menu.len(),
            });
        };
        let name = topping.name.clone();
        let price = topping.price;

        let checked = self.checkboxes[index].toggle();
        if checked {
            self.current.add_topping(index, name, price);
        } else {
            self.current.remove_topping(index, price);
        }
        let total = self.current.price();
        self.price_display.content = format_total(total);
        self.renderer.mark_dirty();

        log::debug!(
            "Topping {index} {}, total now {total}",
            if checked { "selected" } else { "deselected" }
        );
        self.events.send(
            Event::new(EventType::ToppingToggled, self.timestamp())
                .with_arg("topping_index", EventArg::ToppingIndex(index))
                .with_arg("checked", EventArg::Checked(checked))
                .with_arg("total", EventArg::Total(total)),
        );
        Ok(total)
    }

    /// Place the current order and start the confirmation cycle
    ///
    /// A snapshot of the order joins the log and a fresh order begins at
    /// the base price. The submit button and every checkbox disable, and
    /// the status legend announces the order is being processed. The
    /// price display and checkbox ticks keep showing the submitted order
    /// until the cycle finishes; only the reset at the end brings the
    /// display back in line with the fresh order.
    ///
    /// Returns the sequential order number of the placed order.
    pub fn place_order(&mut self) -> Result<u64, WidgetError> {
        if !self.mounted {
            return Err(WidgetError::NotMounted);
        }
        if !self.phase.is_idle() {
            return Err(WidgetError::OrderInFlight);
        }

        let snapshot = std::mem::replace(&mut self.current, PizzaConfig::new(self.base_price));
        let total = snapshot.price();
        let order_number = self.orders.record(snapshot);

        self.submit.enabled = false;
        for checkbox in &mut self.checkboxes {
            checkbox.enabled = false;
        }
        self.legend.content = String::from(PROCESSING_NOTICE);
        self.legend.style = TextStyle::Emphasis;
        self.phase = OrderPhase::Processing {
            remaining: Countdown::new(self.processing_delay),
        };
        self.renderer.mark_dirty();

        log::info!("Order #{order_number} placed, total {total}");
        self.events.send(
            Event::new(EventType::OrderPlaced, self.timestamp())
                .with_arg("order_number", EventArg::OrderNumber(order_number))
                .with_arg("total", EventArg::Total(total)),
        );
        Ok(order_number)
    }

    /// Advance the order cycle by a time step
    ///
    /// Hosts call this once per frame with the time elapsed since the
    /// previous call. When the processing delay runs out the legend
    /// switches to the confirmation notice, and when the notice delay
    /// runs out the widget resets for the next order. A step larger than
    /// the remaining phase time rolls over into the next phase, so one
    /// large step can carry the widget through the whole cycle.
    ///
    /// Does nothing while no order is in flight.
    pub fn update(&mut self, dt: Duration) {
        self.elapsed += dt;
        let mut step = dt;
        loop {
            match std::mem::replace(&mut self.phase, OrderPhase::Idle) {
                OrderPhase::Idle => return,
                OrderPhase::Processing { mut remaining } => match remaining.advance(step) {
                    None => {
                        self.phase = OrderPhase::Processing { remaining };
                        return;
                    }
                    Some(leftover) => {
                        self.show_confirmation();
                        self.phase = OrderPhase::Completed {
                            remaining: Countdown::new(self.completed_delay),
                        };
                        step = leftover;
                    }
                },
                OrderPhase::Completed { mut remaining } => match remaining.advance(step) {
                    None => {
                        self.phase = OrderPhase::Completed { remaining };
                        return;
                    }
                    Some(_) => {
                        self.reset_for_next_order();
                        return;
                    }
                },
            }
        }
    }

    fn show_confirmation(&mut self) {
        self.legend.content = self.messages.confirmation_line();
        self.legend.style = TextStyle::Regular;
        self.renderer.mark_dirty();
        log::info!("Confirmation notice up: {}", self.legend.content);
        self.events.send(
            Event::new(EventType::OrderReceived, self.timestamp())
                .with_arg("order_number", EventArg::OrderNumber(self.orders.len() as u64)),
        );
    }

    fn reset_for_next_order(&mut self) {
        self.legend.content.clear();
        self.legend.style = TextStyle::Regular;
        self.submit.enabled = true;
        for checkbox in &mut self.checkboxes {
            checkbox.checked = false;
            checkbox.enabled = true;
        }
        self.price_display.content = format_total(self.current.price());
        self.renderer.mark_dirty();
        log::info!("Widget reset, ready for the next order");
        self.events
            .send(Event::new(EventType::WidgetReset, self.timestamp()));
    }

    /// Route a click on a control through the widget
    ///
    /// Disabled and non-interactive controls swallow the click and the
    /// widget stays unchanged. A click naming a topping that was never
    /// registered is an error, so hosts notice stale control IDs.
    pub fn handle_click(&mut self, control: ControlId) -> Result<ClickResponse, WidgetError> {
        match control {
            ControlId::Topping(index) => {
                if index >= self.checkboxes.len() {
                    return Err(WidgetError::ToppingOutOfRange {
                        index,
                        count: self.checkboxes.len(),
                    });
                }
                if !self.checkboxes[index].enabled {
                    log::debug!("Click on disabled topping checkbox {index} ignored");
                    return Ok(ClickResponse::Ignored);
                }
                let total = self.toggle_topping(index)?;
                Ok(ClickResponse::Toggled {
                    index,
                    checked: self.checkboxes[index].checked,
                    total,
                })
            }
            ControlId::Submit => {
                if !self.submit.enabled {
                    log::debug!("Click on disabled submit button ignored");
                    return Ok(ClickResponse::Ignored);
                }
                let order_number = self.place_order()?;
                Ok(ClickResponse::OrderPlaced { order_number })
            }
            ControlId::PriceDisplay | ControlId::StatusLegend => {
                log::debug!("Click on non-interactive control {control:?} ignored");
                Ok(ClickResponse::Ignored)
            }
        }
    }

    /// Render the widget through the backend
    ///
    /// Regenerates the command list only when something changed since
    /// the last render, then hands the full frame to the backend in
    /// display order: topping checkboxes, price display, submit button,
    /// status legend.
    pub fn render(
        &mut self,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !self.mounted {
            return Err(WidgetError::NotMounted.into());
        }
        if self.renderer.is_dirty() {
            self.rebuild_commands();
        }

        backend.begin_frame()?;
        for command in self.renderer.get_render_commands() {
            backend.draw(command)?;
        }
        backend.end_frame()
    }

    fn rebuild_commands(&mut self) {
        self.renderer.clear();
        for (index, checkbox) in self.checkboxes.iter().enumerate() {
            self.renderer
                .update_checkbox(ControlId::Topping(index), checkbox);
        }
        self.renderer
            .update_text(ControlId::PriceDisplay, &self.price_display);
        self.renderer.update_button(ControlId::Submit, &self.submit);
        self.renderer
            .update_text(ControlId::StatusLegend, &self.legend);
        self.renderer.end_frame();
        log::debug!(
            "Rebuilt {} render commands",
            self.renderer.get_render_commands().len()
        );
    }

    /// Check whether the widget has been mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Check whether anything changed since the last render
    pub fn is_dirty(&self) -> bool {
        self.renderer.is_dirty()
    }

    /// Get the registered toppings
    pub fn menu(&self) -> &[Topping] {
        &self.menu
    }

    /// Get the number of registered toppings
    pub fn topping_count(&self) -> usize {
        self.menu.len()
    }

    /// Get the price of a plain pizza
    pub fn base_price(&self) -> Price {
        self.base_price
    }

    /// Get the checkbox for a topping
    pub fn checkbox(&self, index: usize) -> Option<&Checkbox> {
        self.checkboxes.get(index)
    }

    /// Get the order currently being built
    pub fn current_order(&self) -> &PizzaConfig {
        &self.current
    }

    /// Get the current order total
    pub fn current_total(&self) -> Price {
        self.current.price()
    }

    /// Get the completed order log
    pub fn orders(&self) -> &OrderLog {
        &self.orders
    }

    /// Get where the widget is in the order cycle
    pub fn phase(&self) -> &OrderPhase {
        &self.phase
    }

    /// Get the confirmation messages
    pub fn messages(&self) -> &WidgetMessages {
        &self.messages
    }

    /// Replace the first confirmation line
    ///
    /// Takes effect the next time the notice goes up; a notice already
    /// on screen keeps its text.
    pub fn set_order_received_message(
        &mut self,
        text: impl Into<String>,
    ) -> Result<(), WidgetError> {
        self.messages.set_order_received(text)
    }

    /// Replace the second confirmation line
    ///
    /// Takes effect the next time the notice goes up; a notice already
    /// on screen keeps its text.
    pub fn set_thanks_message(&mut self, text: impl Into<String>) -> Result<(), WidgetError> {
        self.messages.set_thanks(text)
    }

    /// Line currently shown by the price display
    pub fn price_display_text(&self) -> &str {
        &self.price_display.content
    }

    /// Line currently shown in the status legend
    pub fn legend_text(&self) -> &str {
        &self.legend.content
    }

    /// Check whether the submit button accepts clicks
    pub fn is_submit_enabled(&self) -> bool {
        self.submit.enabled
    }

    /// Get the total widget time advanced so far
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get event system reference
    pub fn event_system(&self) -> &EventSystem {
        &self.events
    }

    /// Get event system mutable reference (for registering handlers)
    pub fn event_system_mut(&mut self) -> &mut EventSystem {
        &mut self.events
    }

    /// Dispatch queued widget events to registered handlers
    pub fn dispatch_events(&mut self) {
        self.events.dispatch();
    }

    fn timestamp(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
