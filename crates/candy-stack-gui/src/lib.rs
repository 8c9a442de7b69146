//! Candy Stack Dispenser - iced front end
//!
//! Draws the dispenser from [`candy_stack_core`] state on a single canvas and
//! turns clicks and key presses into dispenser commands.
//!
//! # Layout
//!
//! ```text
//! ┌──────────┬─────────────────────────────────────────┐
//! │ [ Pop  ] │                        Popped : 417     │
//! │ [ Push ] │                                         │
//! │ [ Top  ] │              ( 12 )                     │
//! │ [Is Empty│              ( 803)                     │
//! │ [ Len  ] │           │ ══════ │                    │
//! │          │           │   /\/  │                    │
//! │          │           └────────┘                    │
//! └──────────┴─────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use candy_stack_core::DispenserConfig;
//!
//! candy_stack_gui::launch(DispenserConfig::default()).unwrap();
//! ```

pub mod app;
pub mod logging;
pub mod scene;
pub mod settings;

pub use app::{DispenserApp, Message};

use candy_stack_core::DispenserConfig;
use iced::{Size, Subscription, Task};
use std::sync::OnceLock;

/// Window title
pub const TITLE: &str = "Candy Stack Dispenser";

/// Config handed to the boot function
static BOOT_CONFIG: OnceLock<DispenserConfig> = OnceLock::new();

/// Open the dispenser window and run until it is closed
pub fn launch(config: DispenserConfig) -> iced::Result {
    let window = config.window;
    let _ = BOOT_CONFIG.set(config);

    iced::application(boot, update, view)
        .title(TITLE)
        .window_size(Size::new(window.width as f32, window.height as f32))
        .resizable(false)
        .subscription(subscription)
        .run()
}

/// Boot function - builds the dispenser from the launch config
fn boot() -> (DispenserApp, Task<Message>) {
    let config = BOOT_CONFIG.get().copied().unwrap_or_default();
    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        step = config.spring.step(),
        "starting dispenser"
    );
    (DispenserApp::new(&config), Task::none())
}

fn update(app: &mut DispenserApp, message: Message) -> Task<Message> {
    app.update(message)
}

fn view(app: &DispenserApp) -> iced::Element<'_, Message> {
    app.view()
}

fn subscription(app: &DispenserApp) -> Subscription<Message> {
    app.subscription()
}
