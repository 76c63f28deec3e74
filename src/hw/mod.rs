pub mod adc;
pub mod board;
pub mod buttons;
pub mod led;
pub mod link;
pub mod logger;
pub mod pins;
pub mod timer;
pub mod usart;

pub use adc::Adc;
pub use board::Stm32Board;
pub use buttons::ButtonInputs;
pub use led::{Indicators, Led};
pub use link::SerialLink;
pub use pins::BoardPins;
pub use timer::{SettleTimer, TickTimer};
pub use usart::Usart;
