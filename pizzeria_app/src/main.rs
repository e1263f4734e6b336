//! Interactive terminal pizzeria built on the ordering widget
//!
//! Presents the widget as a text menu. Type commands at the prompt to
//! toggle toppings and place orders; the confirmation cycle then runs in
//! real time, redrawing the frame as it moves.

mod backend;
mod menu;

use backend::TerminalBackend;
use kiosk_engine::foundation::logging;
use kiosk_engine::foundation::time::FrameClock;
use kiosk_engine::prelude::*;
use menu::MenuConfig;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// How often the order cycle redraws while waiting
const CYCLE_TICK: Duration = Duration::from_millis(100);

struct PizzeriaApp {
    widget: OrderWidget,
    backend: TerminalBackend,
    clock: FrameClock,
}

impl PizzeriaApp {
    fn new(config: &MenuConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut widget = OrderWidget::new(&config.kiosk)?;
        let mut backend = TerminalBackend::new();
        widget.mount(&mut backend)?;
        for topping in &config.toppings {
            widget.register_topping(topping.name.clone(), topping.price)?;
        }

        let events = widget.event_system_mut();
        events.register_handler(EventType::OrderPlaced, Box::new(ReceiptPrinter));
        events.register_handler(EventType::OrderReceived, Box::new(ReceiptPrinter));
        events.register_handler(EventType::WidgetReset, Box::new(ReceiptPrinter));

        Ok(Self {
            widget,
            backend,
            clock: FrameClock::new(),
        })
    }

    fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("Welcome! Commands:");
        println!("  t <index>        toggle a topping");
        println!("  f                finish and place the order");
        println!("  orders           list completed orders");
        println!("  received <text>  change the first confirmation line");
        println!("  thanks <text>    change the second confirmation line");
        println!("  q                quit");
        self.widget.render(&mut self.backend)?;

        loop {
            print!("> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            if !self.handle_command(line.trim())? {
                break;
            }
            self.widget.dispatch_events();
            if self.widget.is_dirty() {
                self.widget.render(&mut self.backend)?;
            }
        }
        Ok(())
    }

    /// Execute one prompt command; returns false when the user quits
    fn handle_command(&mut self, line: &str) -> Result<bool, Box<dyn std::error::Error>> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };
        match command {
            "" => {}
            "t" | "toggle" => match rest.parse::<usize>() {
                Ok(index) => self.click(ControlId::Topping(index)),
                Err(_) => println!("usage: t <topping index>"),
            },
            "f" | "finish" => {
                self.click(ControlId::Submit);
                if self.widget.phase().is_processing() {
                    self.run_cycle()?;
                }
            }
            "orders" => self.print_orders(),
            "received" => {
                if let Err(e) = self.widget.set_order_received_message(rest) {
                    println!("error: {e}");
                }
            }
            "thanks" => {
                if let Err(e) = self.widget.set_thanks_message(rest) {
                    println!("error: {e}");
                }
            }
            "q" | "quit" => return Ok(false),
            other => println!("unknown command: {other}"),
        }
        Ok(true)
    }

    fn click(&mut self, control: ControlId) {
        match self.widget.handle_click(control) {
            Ok(ClickResponse::Toggled {
                index,
                checked,
                total,
            }) => {
                log::debug!(
                    "Topping {index} now {}, total {total}",
                    if checked { "on" } else { "off" }
                );
            }
            Ok(ClickResponse::OrderPlaced { order_number }) => {
                log::debug!("Order #{order_number} submitted");
            }
            Ok(ClickResponse::Ignored) => println!("That control is not available right now"),
            Err(e) => println!("error: {e}"),
        }
    }

    /// Block until the confirmation cycle finishes, redrawing as it goes
    fn run_cycle(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        // Discard the time spent waiting at the prompt
        self.clock.tick();
        while !self.widget.phase().is_idle() {
            thread::sleep(CYCLE_TICK);
            let dt = self.clock.tick();
            self.widget.update(dt);
            self.widget.dispatch_events();
            if self.widget.is_dirty() {
                self.widget.render(&mut self.backend)?;
            }
        }
        Ok(())
    }

    fn print_orders(&self) {
        if self.widget.orders().is_empty() {
            println!("No orders yet");
            return;
        }
        for (number, order) in (1..).zip(self.widget.orders().iter()) {
            let toppings: Vec<&str> = order.toppings().values().map(String::as_str).collect();
            println!("  #{number}: {} [{}]", order.price(), toppings.join(", "));
        }
    }
}

/// Prints receipt lines as the order cycle progresses
struct ReceiptPrinter;

impl EventHandler for ReceiptPrinter {
    fn on_event(&mut self, event: &Event) -> bool {
        match event.event_type {
            EventType::OrderPlaced => {
                if let (Some(number), Some(total)) = (event.get_order_number(), event.get_total()) {
                    log::info!("Receipt opened for order #{number}, total {total}");
                }
            }
            EventType::OrderReceived => log::info!("Kitchen confirmed the order"),
            EventType::WidgetReset => log::info!("Ready for the next customer"),
            EventType::ToppingToggled => {}
        }
        false
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_default("info");

    log::info!("Starting pizzeria kiosk");
    let config = MenuConfig::load_or_default("menu.toml");

    let mut app = PizzeriaApp::new(&config)?;
    app.run()?;

    log::info!("Pizzeria kiosk closed");
    Ok(())
}
