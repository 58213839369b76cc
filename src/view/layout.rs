//! Panel rendering (sidebar, main panel, mini bar)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph},
};

use crate::model::SongLibrary;

use super::surface::{SurfaceField, TuiSurface};
use super::utils::format_volume;

pub fn render_sidebar(frame: &mut Frame, area: Rect, surface: &TuiSurface, library: &SongLibrary) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Compact player panel
            Constraint::Min(0),    // Song catalog
            Constraint::Length(8), // Key bindings
        ])
        .split(area);

    render_sidebar_player(frame, chunks[0], surface);
    render_catalog(frame, chunks[1], library);
    render_key_hints(frame, chunks[2]);
}

fn render_sidebar_player(frame: &mut Frame, area: Rect, surface: &TuiSurface) {
    let play_symbol = surface.text(SurfaceField::PlayControl).unwrap_or("■");
    let title = surface.text(SurfaceField::Title).unwrap_or("-");
    let artist = surface.text(SurfaceField::Artist).unwrap_or("-");
    let volume = surface.control(SurfaceField::VolumeControl).unwrap_or(0.0);

    let lines = vec![
        Line::from(format!("{} {}", play_symbol, title)).style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(artist.to_string()).style(Style::default().fg(Color::White)),
        Line::from(format_volume(volume)).style(Style::default().fg(Color::Cyan)),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Player ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(panel, area);
}

fn render_catalog(frame: &mut Frame, area: Rect, library: &SongLibrary) {
    let items: Vec<ListItem> = library
        .songs()
        .iter()
        .enumerate()
        .map(|(i, song)| {
            ListItem::new(format!("{}. {} | {}", i + 1, song.title, song.artist))
                .style(Style::default().fg(Color::White))
        })
        .collect();

    let catalog = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Songs ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(catalog, area);
}

fn render_key_hints(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("1-9    play song"),
        Line::from("space  play/stop"),
        Line::from("+/-    volume"),
        Line::from("[/]    device knob"),
        Line::from("q      quit"),
    ];
    let hints = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keys ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(hints, area);
}

pub fn render_main_panel(frame: &mut Frame, area: Rect, surface: &TuiSurface) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Track details
            Constraint::Length(3), // Volume gauge
        ])
        .split(area);

    let play_symbol = surface.text(SurfaceField::PlayControl).unwrap_or("■");
    let title = surface.text(SurfaceField::Title).unwrap_or("Nothing loaded");
    let artist = surface.text(SurfaceField::Artist).unwrap_or("");
    let cover = surface.image(SurfaceField::Cover).unwrap_or("-");

    let lines = vec![
        Line::from(""),
        Line::from(format!("{} {}", play_symbol, title)).style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(artist.to_string()).style(Style::default().fg(Color::White)),
        Line::from(""),
        Line::from(format!("Cover: {}", cover)).style(Style::default().fg(Color::DarkGray)),
    ];

    let details = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Now Playing ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(details, chunks[0]);

    let volume = surface.control(SurfaceField::VolumeControl).unwrap_or(0.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Volume "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(volume.clamp(0.0, 1.0) as f64)
        .label(format_volume(volume));
    frame.render_widget(gauge, chunks[1]);
}

pub fn render_mini_bar(frame: &mut Frame, area: Rect, surface: &TuiSurface) {
    let status = surface.text(SurfaceField::Status).unwrap_or("No song playing");
    let volume = surface.control(SurfaceField::VolumeControl).unwrap_or(0.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", status))
                .title_bottom(Line::from(format!(" {} ", format_volume(volume))).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(volume.clamp(0.0, 1.0) as f64)
        .label(format_volume(volume));
    frame.render_widget(gauge, area);
}
