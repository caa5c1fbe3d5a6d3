use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use cosmic::iced::{ContentFit, Length, Size, keyboard};
use cosmic::iced_core::Alignment;
use cosmic::iced_futures::{Subscription, event::listen_with};
use cosmic::iced_widget::{column, row};
use cosmic::widget::{self, button, text, text_input};
use cosmic::{ApplicationExt, Element, Task, app};
use image::{DynamicImage, RgbImage};

use crate::config::{GeometryPolicy, ViewerConfig};
use crate::domain::Dataset;
use crate::fl;
use crate::processing;
use crate::session::messages::{ButtonId, Command};
use crate::session::shortcuts;
use crate::session::viewer::Viewer;
use crate::source::DiskImageSource;
use crate::surface::{DisplaySurface, Pane};

/// Open the dataset, render the first image and hand both to the window.
///
/// Anything that fails before the window opens (unreadable dataset,
/// malformed geometry under the abort policy, missing first image) is
/// returned here and ends the process. An error that ends the session
/// later is returned once the event loop has stopped.
pub(crate) fn run(config: ViewerConfig) -> anyhow::Result<()> {
    let session = open_session(&config)?;
    let fatal = session.fatal.clone();
    let settings = cosmic::app::Settings::default().size(Size::new(1280.0, 720.0));
    cosmic::app::run::<App>(settings, session)?;
    match fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn open_session(config: &ViewerConfig) -> anyhow::Result<Session> {
    log::info!(
        "Opening {} (images in {}, {:?} on malformed geometry, {:?} processor)",
        config.annotation_path.display(),
        config.image_dir.display(),
        config.geometry_policy,
        config.processor
    );

    let dataset = Dataset::load(&config.annotation_path)?;
    let malformed = dataset.malformed_annotations();
    for bad in &malformed {
        log::warn!(
            "Image {} annotation {} has {} coordinates",
            bad.image_index + 1,
            bad.annotation_index,
            bad.coordinate_count
        );
    }
    if config.geometry_policy == GeometryPolicy::Abort && !malformed.is_empty() {
        anyhow::bail!(
            "{} malformed annotations in {} (use --skip-malformed to ignore them)",
            malformed.len(),
            config.annotation_path.display()
        );
    }

    let mut viewer = Viewer::new(
        dataset,
        Box::new(DiskImageSource::new(&config.image_dir)),
        processing::from_kind(config.processor),
        config.geometry_policy,
    )
    .with_context(|| format!("cannot view {}", config.annotation_path.display()))?;

    let mut panes = PaneSurface::default();
    viewer.show_current(&mut panes)?;
    Ok(Session {
        viewer,
        panes,
        fatal: Rc::default(),
    })
}

/// Viewer and its first rendered frame, created before the window opens
pub struct Session {
    viewer: Viewer,
    panes: PaneSurface,
    /// Error that ended the session, read back by [`run`]
    fatal: Rc<RefCell<Option<anyhow::Error>>>,
}

impl Session {
    /// Apply a command; a failure records the error and closes the window
    fn dispatch(&mut self, command: Command) {
        if let Err(err) = self.viewer.apply(command, &mut self.panes) {
            log::error!("Ending session: {:#}", err);
            self.fatal.replace(Some(err));
            self.panes.close();
        }
    }
}

#[derive(Default)]
struct PaneView {
    title: String,
    handle: Option<widget::image::Handle>,
}

/// Display surface backed by the application window
#[derive(Default)]
pub struct PaneSurface {
    panes: [PaneView; 2],
    jump_text: String,
    redraws: u64,
    focus_requested: bool,
    close_requested: bool,
}

impl DisplaySurface for PaneSurface {
    fn clear_pane(&mut self, pane: Pane) {
        self.panes[pane.index()] = PaneView::default();
    }

    fn draw_image(&mut self, pane: Pane, image: RgbImage) {
        let rgba = DynamicImage::ImageRgb8(image).into_rgba8();
        let handle = widget::image::Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_vec());
        self.panes[pane.index()].handle = Some(handle);
    }

    fn set_pane_title(&mut self, pane: Pane, title: &str) {
        self.panes[pane.index()].title = title.to_string();
    }

    fn set_textbox_value(&mut self, value: &str) {
        self.jump_text = value.to_string();
    }

    fn textbox_value(&self) -> String {
        self.jump_text.clone()
    }

    fn focus_textbox(&mut self) {
        self.focus_requested = true;
    }

    fn request_redraw(&mut self) {
        // iced redraws after every update; the counter only feeds logging
        self.redraws += 1;
        log::trace!("Redraw {}", self.redraws);
    }

    fn close(&mut self) {
        self.close_requested = true;
    }
}

pub struct App {
    core: app::Core,
    session: Session,
    jump_input_id: widget::Id,
}

#[derive(Debug, Clone)]
pub enum Msg {
    Keyboard(keyboard::Event),
    /// Jump text box edited
    JumpInput(String),
    /// Enter pressed in the jump text box
    JumpSubmit,
    Button(ButtonId),
}

impl App {
    fn pane_view(&self, pane: Pane, space: u16) -> Element<'_, Msg> {
        let view = &self.session.panes.panes[pane.index()];
        let body: Element<'_, Msg> = match &view.handle {
            Some(handle) => widget::image(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => widget::horizontal_space().into(),
        };

        column![text::title4(view.title.as_str()), body]
            .spacing(space)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .into()
    }

    /// Turn close/focus requests left on the surface into runtime tasks
    fn pending_tasks(&mut self) -> Task<cosmic::Action<Msg>> {
        let panes = &mut self.session.panes;
        if std::mem::take(&mut panes.close_requested) {
            return cosmic::iced::exit();
        }
        if std::mem::take(&mut panes.focus_requested) {
            return text_input::focus(self.jump_input_id.clone());
        }
        Task::none()
    }
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = Session;

    type Message = Msg;

    const APP_ID: &'static str = "io.github.crownview.CrownView";

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(core: app::Core, flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let mut app = Self {
            core,
            session: flags,
            jump_input_id: widget::Id::unique(),
        };
        app.set_header_title(fl!("app-title"));
        (app, Task::none())
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let spacing = cosmic::theme::active().cosmic().spacing;

        let panes = row![
            self.pane_view(Pane::Annotated, spacing.space_xs),
            self.pane_view(Pane::Processed, spacing.space_xs),
        ]
        .spacing(spacing.space_s)
        .height(Length::Fill);

        let controls = row![
            text::body(fl!("jump-label")),
            text_input("", self.session.panes.jump_text.as_str())
                .id(self.jump_input_id.clone())
                .on_input(Msg::JumpInput)
                .on_submit(|_| Msg::JumpSubmit)
                .width(Length::Fixed(120.0)),
            button::standard(fl!("go")).on_press(Msg::Button(ButtonId::Go)),
            button::standard(fl!("reprocess")).on_press(Msg::Button(ButtonId::Reprocess)),
        ]
        .spacing(spacing.space_s)
        .align_y(Alignment::Center);

        column![panes, controls]
            .spacing(spacing.space_s)
            .padding(spacing.space_s)
            .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        let command = match message {
            Msg::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcuts::handle_key_event(&key, modifiers)
            }
            Msg::Keyboard(_) => None,
            Msg::JumpInput(value) => {
                self.session.panes.set_textbox_value(&value);
                None
            }
            Msg::JumpSubmit => Some(shortcuts::handle_jump_submit(
                &self.session.panes.textbox_value(),
            )),
            Msg::Button(id) => Some(shortcuts::handle_button(
                id,
                &self.session.panes.textbox_value(),
            )),
        };

        if let Some(command) = command {
            self.session.dispatch(command);
        }
        self.pending_tasks()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        listen_with(|e, status, _| match (e, status) {
            // Keys typed into the jump box are captured by the text input
            (
                cosmic::iced_core::Event::Keyboard(keyboard_event),
                cosmic::iced_core::event::Status::Ignored,
            ) => Some(Msg::Keyboard(keyboard_event)),
            _ => None,
        })
    }
}
