// SPDX-License-Identifier: MPL-2.0
//! Demo application: the playback chrome over a simulated player.
//!
//! The `App` owns a [`ControlOverlay`] driven by a [`DeadlineTimer`] that is
//! polled on every tick, together with the player that consumes the overlay's
//! effects. Pointer events from the chrome widgets are translated into
//! overlay messages here, the only place that knows about iced.

mod player;
mod subscription;

pub use player::SimulatedPlayer;

use crate::config::{self, Config, ControlSettings};
use crate::controls::{
    dispatch, ControlHost, ControlOverlay, Message as OverlayMessage, PointerPosition,
    SeekDirection,
};
use crate::i18n::fluent::I18n;
use crate::timer::DeadlineTimer;
use crate::ui::controls_view::{self, ViewContext};
use crate::ui::design_tokens::palette;
use iced::widget::container;
use iced::{window, Background, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::time::Instant;

/// Length of the simulated media.
const DEMO_DURATION_SECS: f64 = 5.0 * 60.0 + 42.0;

const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 540.0;

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional settings file replacing the default location.
    pub config_path: Option<PathBuf>,
}

/// Keyboard shortcuts understood by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    SeekBackward,
    SeekForward,
    ToggleFullscreen,
    ExitFullscreen,
    ToggleChrome,
    SimulateFailure,
}

#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls_view::Message),
    Shortcut(Shortcut),
    /// Left button released anywhere in the window.
    PointerReleased,
    FocusLost,
    WindowOpened(window::Id),
    /// Periodic tick for the player and timers.
    Tick(Instant),
}

/// Receives the overlay's effects and applies them to the player.
#[derive(Debug)]
struct PlayerHost {
    player: SimulatedPlayer,
    preview_secs: Option<f64>,
    fullscreen_requested: bool,
    subtitles: bool,
    fill: bool,
}

impl ControlHost for PlayerHost {
    fn on_seek(&mut self, time_secs: f64) {
        self.player.seek(time_secs);
    }

    fn on_time_preview(&mut self, time_secs: f64) {
        self.preview_secs = Some(time_secs);
    }

    fn on_seeking_state_change(&mut self, is_seeking: bool) {
        if !is_seeking {
            self.preview_secs = None;
        }
        tracing::debug!(is_seeking, "seeking state changed");
    }

    fn on_play_pause(&mut self) {
        self.player.toggle_playback();
    }

    fn on_hide(&mut self, hidden: bool) {
        tracing::debug!(hidden, "chrome visibility changed");
    }

    fn on_fullscreen(&mut self) {
        self.fullscreen_requested = true;
    }

    fn on_resize(&mut self) {
        self.fill = !self.fill;
        tracing::info!(fill = self.fill, "resize mode toggled");
    }

    fn on_subtitle_press(&mut self) {
        self.subtitles = !self.subtitles;
        tracing::info!(enabled = self.subtitles, "subtitles toggled");
    }
}

/// Root iced state.
pub struct App {
    i18n: I18n,
    overlay: ControlOverlay<DeadlineTimer>,
    host: PlayerHost,
    window_id: Option<window::Id>,
    /// Last pointer x over the track, in track-local pixels.
    hover_x: Option<f32>,
    track_width: Option<f32>,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "settings unavailable, using defaults");
        Config::default()
    })
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(flags.config_path.as_ref());
        let settings = ControlSettings::from_config(&config);
        tracing::info!(?settings, "control settings resolved");

        let now = Instant::now();
        let app = Self {
            i18n: I18n::new(flags.lang, &config),
            overlay: ControlOverlay::new(settings, DeadlineTimer::new()),
            host: PlayerHost {
                player: SimulatedPlayer::open(DEMO_DURATION_SECS, now),
                preview_secs: None,
                fullscreen_requested: false,
                subtitles: false,
                fill: false,
            },
            window_id: None,
            hover_x: None,
            track_width: None,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_window_subscription(),
            subscription::create_tick_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Controls(message) => self.handle_controls(message, now),
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut, now),
            Message::PointerReleased => {
                if self.overlay.is_dragging() {
                    let pointer = self.hover_x.map(PointerPosition::Local);
                    self.send(OverlayMessage::ScrubRelease(pointer), now);
                }
            }
            Message::FocusLost => self.send(OverlayMessage::ScrubCancel, now),
            Message::WindowOpened(id) => self.window_id = Some(id),
            Message::Tick(instant) => self.handle_tick(instant),
        }
        self.take_fullscreen_request()
    }

    fn handle_controls(&mut self, message: controls_view::Message, now: Instant) {
        match message {
            controls_view::Message::TrackHovered { x, width } => {
                if self.track_width != Some(width) {
                    self.track_width = Some(width);
                    self.send(OverlayMessage::TrackLayout { width_px: width }, now);
                }
                self.hover_x = Some(x);
                if self.overlay.is_dragging() {
                    self.send(OverlayMessage::ScrubMove(PointerPosition::Local(x)), now);
                } else {
                    self.send(OverlayMessage::PointerActivity, now);
                }
            }
            controls_view::Message::TrackPressed => {
                if let Some(x) = self.hover_x {
                    self.send(OverlayMessage::ScrubStart(PointerPosition::Local(x)), now);
                }
            }
            controls_view::Message::TrackReleased => {
                let pointer = self.hover_x.map(PointerPosition::Local);
                self.send(OverlayMessage::ScrubRelease(pointer), now);
            }
            controls_view::Message::TrackExited => {
                self.hover_x = None;
                if self.overlay.is_dragging() {
                    self.send(OverlayMessage::ScrubCancel, now);
                }
            }
            controls_view::Message::ZoneTapped(side) => {
                self.send(OverlayMessage::ZoneTap(side), now);
            }
            controls_view::Message::SurfaceMoved => {
                self.send(OverlayMessage::PointerActivity, now);
            }
            controls_view::Message::TogglePlayback => {
                self.send(OverlayMessage::TogglePlayback, now);
            }
            controls_view::Message::ToggleFullscreen => {
                self.send(OverlayMessage::ToggleFullscreen, now);
            }
            controls_view::Message::Resize => self.send(OverlayMessage::Resize, now),
            controls_view::Message::SubtitlePress => {
                self.send(OverlayMessage::SubtitlePress, now);
            }
        }
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut, now: Instant) {
        match shortcut {
            Shortcut::TogglePlayback => self.send(OverlayMessage::TogglePlayback, now),
            Shortcut::SeekBackward => {
                self.send(OverlayMessage::SeekRelative(SeekDirection::Backward), now);
            }
            Shortcut::SeekForward => {
                self.send(OverlayMessage::SeekRelative(SeekDirection::Forward), now);
            }
            Shortcut::ToggleFullscreen => self.send(OverlayMessage::ToggleFullscreen, now),
            Shortcut::ExitFullscreen => {
                if self.overlay.is_fullscreen() {
                    self.send(OverlayMessage::ToggleFullscreen, now);
                }
            }
            Shortcut::ToggleChrome => self.send(OverlayMessage::ToggleChrome, now),
            Shortcut::SimulateFailure => {
                self.host.player.fail();
                self.send(OverlayMessage::Clock(self.host.player.clock()), now);
            }
        }
    }

    fn handle_tick(&mut self, now: Instant) {
        self.host.player.advance(now);
        self.send(OverlayMessage::Clock(self.host.player.clock()), now);
        for handle in self.overlay.timer_mut().due(now) {
            self.send(OverlayMessage::TimerFired(handle), now);
        }
    }

    fn send(&mut self, message: OverlayMessage, now: Instant) {
        let effects = self.overlay.update(message, now);
        dispatch(effects, &mut self.host);
    }

    fn take_fullscreen_request(&mut self) -> Task<Message> {
        if !std::mem::take(&mut self.host.fullscreen_requested) {
            return Task::none();
        }
        let desired = !self.overlay.is_fullscreen();
        self.send(OverlayMessage::FullscreenChanged(desired), Instant::now());

        let Some(window_id) = self.window_id else {
            return Task::none();
        };
        let mode = if desired {
            window::Mode::Fullscreen
        } else {
            window::Mode::Windowed
        };
        window::set_mode(window_id, mode)
    }

    fn view(&self) -> Element<'_, Message> {
        let chrome = self.overlay.chrome();
        let controls = controls_view::view(ViewContext { i18n: &self.i18n }, &chrome)
            .map(Message::Controls);

        container(controls)
            .width(iced::Length::Fill)
            .height(iced::Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(palette::GRAY_900)),
                text_color: Some(palette::WHITE),
                ..container::Style::default()
            })
            .into()
    }
}
