// SPDX-License-Identifier: MPL-2.0
//! Playback chrome widgets.
//!
//! Renders a [`ChromeView`] as stacked layers: two tap zones covering the
//! surface, then the top bar, center control and bottom bar. The progress
//! track reports the pointer position together with its own width so the
//! host can convert it without a separate layout pass.

use crate::controls::{BottomBar, CenterControl, ChromeView, TopBar, ZoneSide};
use crate::domain::video::Percentage;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{
    button, column, container, mouse_area, responsive, row, text, tooltip, Row, Space, Stack,
    Text,
};
use iced::{mouse, Background, Border, Color, Element, Length, Point, Size, Theme};

/// Resolution of the track segments.
const TRACK_PORTIONS: u16 = 1000;

/// Messages emitted by chrome widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Pointer over the track, in track-local pixels.
    TrackHovered { x: f32, width: f32 },
    TrackPressed,
    TrackReleased,
    /// Pointer left the track area.
    TrackExited,
    /// Press on one half of the surface.
    ZoneTapped(ZoneSide),
    /// Pointer moved anywhere over the surface.
    SurfaceMoved,
    TogglePlayback,
    ToggleFullscreen,
    Resize,
    SubtitlePress,
}

/// Contextual data needed to render the chrome.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Relative widths of the played, buffered-ahead and remaining segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackPortions {
    pub played: u16,
    pub buffered: u16,
    pub remaining: u16,
}

/// Splits the track into segments. Buffered content behind the playhead is
/// drawn as played.
#[must_use]
pub fn track_portions(progress: Percentage, buffered: Percentage) -> TrackPortions {
    let scale = f64::from(TRACK_PORTIONS);
    let played = (progress.value() * scale).round() as u16;
    let buffered_end = ((buffered.value() * scale).round() as u16).max(played);
    TrackPortions {
        played,
        buffered: buffered_end - played,
        remaining: TRACK_PORTIONS - buffered_end,
    }
}

/// Renders the full chrome over the video surface.
pub fn view<'a>(ctx: ViewContext<'a>, chrome: &ChromeView) -> Element<'a, Message> {
    let zones = row![
        seek_zone(ZoneSide::Left, chrome.seek_zones_enabled),
        seek_zone(ZoneSide::Right, chrome.seek_zones_enabled),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let top: Element<'a, Message> = match chrome.top_bar {
        Some(bar) => top_bar(&ctx, bar),
        None => Space::new().height(Length::Shrink).into(),
    };
    let bottom: Element<'a, Message> = match &chrome.bottom_bar {
        Some(bar) => bottom_bar(&ctx, bar),
        None => Space::new().height(Length::Shrink).into(),
    };

    let layers = column![
        top,
        container(center(&ctx, chrome.center)).center(Length::Fill),
        bottom,
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    Stack::new()
        .push(zones)
        .push(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn seek_zone<'a>(side: ZoneSide, enabled: bool) -> Element<'a, Message> {
    let surface = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);
    let area = mouse_area(surface).on_move(|_: Point| Message::SurfaceMoved);
    if enabled {
        area.on_press(Message::ZoneTapped(side)).into()
    } else {
        area.into()
    }
}

fn center<'a>(ctx: &ViewContext<'a>, control: CenterControl) -> Element<'a, Message> {
    match control {
        CenterControl::ErrorIndicator => text(ctx.i18n.tr("chrome-error"))
            .size(typography::BODY)
            .color(palette::ERROR_500)
            .into(),
        CenterControl::BusyIndicator => text(ctx.i18n.tr("chrome-loading"))
            .size(typography::BODY)
            .color(palette::GRAY_200)
            .into(),
        CenterControl::PlayPause { playing } => {
            let (glyph, label) = if playing {
                ("❚❚", ctx.i18n.tr("chrome-pause-tooltip"))
            } else {
                ("▶", ctx.i18n.tr("chrome-play-tooltip"))
            };
            let play_pause = button(text(glyph).size(typography::GLYPH_LG))
                .on_press(Message::TogglePlayback)
                .padding(spacing::SM)
                .style(round_button);
            tooltip(play_pause, Text::new(label), tooltip::Position::Bottom).into()
        }
        CenterControl::Empty => Space::new().into(),
    }
}

fn top_bar<'a>(ctx: &ViewContext<'a>, bar: TopBar) -> Element<'a, Message> {
    let resize = icon_button("⤢", Message::Resize, ctx.i18n.tr("chrome-resize-tooltip"));
    let subtitles = icon_button(
        "CC",
        Message::SubtitlePress,
        ctx.i18n.tr("chrome-subtitles-tooltip"),
    );
    let mut controls = row![Space::new().width(Length::Fill)].spacing(spacing::XS);
    // Resizing only makes sense when the video can overflow the window.
    if bar.fullscreen {
        controls = controls.push(resize);
    }
    controls = controls.push(subtitles);

    container(controls.padding(spacing::XS))
        .width(Length::Fill)
        .style(scrim)
        .into()
}

fn bottom_bar<'a>(ctx: &ViewContext<'a>, bar: &BottomBar) -> Element<'a, Message> {
    let fullscreen_label = if bar.fullscreen {
        ctx.i18n.tr("chrome-exit-fullscreen-tooltip")
    } else {
        ctx.i18n.tr("chrome-fullscreen-tooltip")
    };
    let fullscreen = icon_button("⛶", Message::ToggleFullscreen, fullscreen_label);

    let labels = row![
        text(bar.elapsed_label.clone()).size(typography::CAPTION),
        Space::new().width(Length::Fill),
        text(bar.duration_label.clone()).size(typography::CAPTION),
        fullscreen,
    ]
    .spacing(spacing::XS)
    .align_y(iced::alignment::Vertical::Center);

    container(
        column![track(bar), labels]
            .spacing(spacing::XXS)
            .padding([spacing::XS, spacing::MD]),
    )
    .width(Length::Fill)
    .style(scrim)
    .into()
}

fn track<'a>(bar: &BottomBar) -> Element<'a, Message> {
    let portions = track_portions(bar.progress, bar.buffered);
    let thickness = if bar.scrubbing {
        sizing::TIMELINE_TRACK_ACTIVE
    } else {
        sizing::TIMELINE_TRACK
    };

    let hit_area = responsive(move |size: Size| {
        let width = size.width;
        let mut segments = Row::new().width(Length::Fill).height(Length::Fill);
        for (portion, color) in [
            (portions.played, palette::PRIMARY_500),
            (portions.buffered, palette::GRAY_400),
            (portions.remaining, palette::GRAY_700),
        ] {
            if portion > 0 {
                segments = segments.push(segment(portion, color));
            }
        }

        let visual = container(segments)
            .width(Length::Fill)
            .height(Length::Fixed(thickness));
        mouse_area(container(visual).width(Length::Fill).center_y(Length::Fill))
            .on_move(move |point: Point| Message::TrackHovered { x: point.x, width })
            .on_press(Message::TrackPressed)
            .on_release(Message::TrackReleased)
            .on_exit(Message::TrackExited)
            .interaction(mouse::Interaction::Pointer)
            .into()
    });

    container(hit_area)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TIMELINE_HIT_HEIGHT))
        .into()
}

fn segment<'a>(portion: u16, color: Color) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            ..container::Style::default()
        })
        .into()
}

fn icon_button<'a>(glyph: &'a str, message: Message, label: String) -> Element<'a, Message> {
    let content = button(text(glyph).size(typography::BODY))
        .on_press(message)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XXS, spacing::XS])
        .style(round_button);
    tooltip(content, Text::new(label), tooltip::Position::Top).into()
}

fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

fn round_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
        button::Status::Active | button::Status::Disabled => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
