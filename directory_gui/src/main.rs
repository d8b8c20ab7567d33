//! # User Directory GUI Application
//!
//! Master/detail user directory built with Iced. The left pane lists every
//! user; clicking a row opens the detail pane on the right, and its Close
//! button collapses the layout back to a single column.
//!
//! All state changes go through [`directory_core::LayoutController`]; this
//! crate only turns widget interactions into [`DirectoryEvent`]s and draws
//! whatever the controller reports.

mod ui;

use iced::widget::{column, container, row, rule};
use iced::{Element, Length};

use directory_core::{
    generate_users, DirectoryEvent, DirectorySettings, LayoutController, RecordSet, Transition,
};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Event from the master table or the detail pane
    Directory(DirectoryEvent),
}

/// Application state
pub struct App {
    pub records: RecordSet,
    pub controller: LayoutController,
    pub settings: DirectorySettings,
    /// Text shown on the right of the status bar
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        App::with_settings(DirectorySettings::default())
    }
}

impl App {
    /// Build the app, falling back to default settings when `settings` is invalid
    pub fn with_settings(settings: DirectorySettings) -> Self {
        let settings = settings.validate().unwrap_or_else(|e| {
            tracing::warn!(error = %e, code = e.error_code(), "invalid settings, using defaults");
            DirectorySettings::default()
        });
        let records = generate_users(settings.record_count);
        let status = format!("{} users loaded", records.len());

        App {
            records,
            controller: LayoutController::new(),
            settings,
            status,
        }
    }

    fn title(&self) -> String {
        match self.controller.selection() {
            Some(user) => format!("User Directory - {}", user.id),
            None => "User Directory".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Directory(event) => {
                let transition = self.controller.handle(event);
                match transition {
                    Transition::Opened | Transition::Replaced => {
                        if let Some(user) = self.controller.selection() {
                            self.status = format!("Selected {}", user.id);
                        }
                    }
                    Transition::Closed => {
                        self.status = format!("{} users loaded", self.records.len());
                    }
                    Transition::Ignored => {}
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mode = self.controller.mode();
        let (master_portion, detail_portion) = self.settings.column_portions(mode);

        let master = ui::master_panel::view_master_panel(
            &self.records,
            self.controller.selection(),
            self.settings.row_height,
            master_portion,
        );

        let panels = if mode.shows_detail() {
            row![
                master,
                ui::detail_panel::view_detail_panel(self.controller.selection(), detail_portion),
            ]
            .spacing(10)
        } else {
            row![master]
        };

        let content = column![
            ui::toolbar::view_header(self.records.len()),
            rule::horizontal(1),
            container(panels).height(Length::Fill),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(self.controller.selection(), &self.status),
        ]
        .spacing(6)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    #[cfg(not(target_arch = "wasm32"))]
    init_logging();

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    tracing::info!("starting user directory");

    iced::application(App::default, App::update, App::view)
        .title(App::title)
        .window_size((1100.0, 700.0))
        .run()
}
