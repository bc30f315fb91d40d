use iced::time;
use iced::widget::{button, column, container, horizontal_space, row, stack, text, text_editor};
use iced::window;
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme};
use serde_json::Value;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod media;
mod notify;
mod state;
mod submit;
mod ui;

use config::Config;
use media::loader::{self, SelectedFile};
use media::{MediaController, MediaError};
use notify::{NotificationCenter, NotificationId};
use state::form::{FieldUpdate, ListingForm};
use submit::{ListingClient, SubmitError};

/// Initial window size
const WINDOW_WIDTH: f32 = 1100.0;
const WINDOW_HEIGHT: f32 = 720.0;

/// The create-listing window
struct CreateListing {
    /// Draft and submission phase
    form: ListingForm,
    /// Editor buffer for the description, mirrors the committed draft text
    description: text_editor::Content,
    /// Object URLs and preview sizing for the attached image
    media: MediaController,
    /// Messages shown in the bottom-right corner
    notifications: NotificationCenter,
    /// Client for the listing endpoint
    client: ListingClient,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    TitleChanged(String),
    PriceChanged(String),
    DescriptionEdited(text_editor::Action),
    /// User clicked "Add Photos"
    AddPhotos,
    /// File dialog closed, `None` if cancelled
    FilePicked(Option<PathBuf>),
    /// Background read of the picked file completed
    FileLoaded(Result<SelectedFile, MediaError>),
    RemoveImage,
    /// User clicked "Create Listing"
    Submit,
    SubmitFinished(Result<Value, SubmitError>),
    WindowResized(Size),
    DismissNotification(NotificationId),
    /// Periodic check for expired notifications
    Tick(Instant),
    /// Header "X" button
    Close,
}

impl CreateListing {
    /// Create the window state from loaded settings
    fn new(config: Config) -> (Self, Task<Message>) {
        tracing::info!(endpoint = %config.endpoint, "CollectionTracker listing editor ready");

        let client = ListingClient::new(config.endpoint.clone(), config.request_timeout());

        (
            CreateListing {
                form: ListingForm::new(),
                description: text_editor::Content::new(),
                media: MediaController::mount(WINDOW_WIDTH),
                notifications: NotificationCenter::new(),
                client,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TitleChanged(title) => {
                self.form.set_title(title);
                Task::none()
            }
            Message::PriceChanged(price) => {
                self.form.set_price(price);
                Task::none()
            }
            Message::DescriptionEdited(action) => {
                let is_edit = action.is_edit();
                self.description.perform(action);
                if is_edit {
                    let text = ui::sidebar::editor_text(&self.description);
                    if self.form.set_description(text, &mut self.notifications) == FieldUpdate::Rejected {
                        self.description = ui::sidebar::editor_content(&self.form.draft().description);
                    }
                }
                Task::none()
            }
            Message::AddPhotos => Task::perform(loader::pick_file(), Message::FilePicked),
            Message::FilePicked(Some(path)) => Task::perform(loader::load_file(path), Message::FileLoaded),
            Message::FilePicked(None) => Task::none(),
            Message::FileLoaded(Ok(file)) => {
                self.media.select(file, &mut self.form);
                Task::none()
            }
            Message::FileLoaded(Err(e)) => {
                // Unreadable files are treated like unsupported ones
                tracing::warn!(error = %e, "ignoring selected file");
                Task::none()
            }
            Message::RemoveImage => {
                self.media.remove(&mut self.form);
                Task::none()
            }
            Message::Submit => match self.form.begin_submit() {
                Some(listing) => {
                    let client = self.client.clone();
                    Task::perform(
                        async move { client.submit(&listing).await },
                        Message::SubmitFinished,
                    )
                }
                None => Task::none(),
            },
            Message::SubmitFinished(result) => {
                let succeeded = submit::report_outcome(&result, &mut self.notifications);
                self.form.finish_submit(succeeded);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.media.on_resize(size.width);
                Task::none()
            }
            Message::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.expire(now);
                Task::none()
            }
            Message::Close => {
                self.media.teardown();
                iced::exit()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let header = row![
            button(text("X")).on_press(Message::Close).style(button::secondary),
            text("CollectionTracker").size(32),
            horizontal_space(),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        let main = row![
            ui::sidebar::view(self.form.draft(), &self.description, self.form.phase()),
            ui::preview::view(&self.form, &self.media),
        ]
        .spacing(media::preview::PANE_SPACING)
        .height(Length::Fill);

        let page = container(column![header, main].spacing(16))
            .padding(media::preview::OUTER_PADDING)
            .width(Length::Fill)
            .height(Length::Fill);

        stack![page, ui::toast::overlay(&self.notifications)].into()
    }

    /// Window resizes while the preview is mounted, and a timer while
    /// notifications are on screen
    fn subscription(&self) -> Subscription<Message> {
        let resize = if self.media.is_listening() {
            window::resize_events().map(|(_id, size)| Message::WindowResized(size))
        } else {
            Subscription::none()
        };

        let tick = if self.notifications.is_empty() {
            Subscription::none()
        } else {
            time::every(Duration::from_secs(1)).map(Message::Tick)
        };

        Subscription::batch([resize, tick])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Log to stderr, filtered by `RUST_LOG`
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("collection_tracker=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    let config = config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load settings, using defaults");
        Config::default()
    });

    iced::application("CollectionTracker", CreateListing::update, CreateListing::view)
        .theme(CreateListing::theme)
        .subscription(CreateListing::subscription)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .centered()
        .run_with(move || CreateListing::new(config))
}
