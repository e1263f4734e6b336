//! Menu configuration for the demo pizzeria

use kiosk_engine::config::{Config, KioskConfig};
use kiosk_engine::foundation::money::Price;
use serde::{Deserialize, Serialize};

/// Demo pizzeria settings: widget settings plus the topping menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Ordering widget settings
    pub kiosk: KioskConfig,

    /// Toppings offered by this pizzeria, in menu order
    pub toppings: Vec<MenuTopping>,
}

/// One topping entry in the menu file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuTopping {
    /// Topping name
    pub name: String,

    /// Price in whole currency units
    pub price: Price,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            kiosk: KioskConfig::default(),
            toppings: vec![
                MenuTopping {
                    name: String::from("cheese"),
                    price: Price::new(5),
                },
                MenuTopping {
                    name: String::from("olives"),
                    price: Price::new(3),
                },
            ],
        }
    }
}

impl Config for MenuConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu() {
        let config = MenuConfig::default();
        assert_eq!(config.kiosk.base_price, Price::new(40));
        assert_eq!(config.toppings.len(), 2);
        assert_eq!(config.toppings[0].name, "cheese");
        assert_eq!(config.toppings[0].price, Price::new(5));
    }

    #[test]
    fn test_parse_menu_file_format() {
        let text = r#"
            [kiosk]
            base_price = 40
            processing_delay_secs = 3.0
            completed_delay_secs = 5.0
            order_received_message = "Order Received!"
            thanks_message = "Thanks for your purchase"

            [[toppings]]
            name = "cheese"
            price = 5

            [[toppings]]
            name = "olives"
            price = 3
        "#;
        let config: MenuConfig = toml::from_str(text).unwrap();
        assert!(config.kiosk.validate().is_ok());
        assert_eq!(config.toppings[1].name, "olives");
        assert_eq!(config.toppings[1].price, Price::new(3));
    }
}
