//! Keyboard input handling and interactive loop.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use branchtree::application::Browser;
use branchtree::domain::ports::{Modal, RemoteStore, StorageApi};

use super::render::{render_help_bar, render_modal, render_tree};
use super::view::{Flow, TreeView, ViewAction};
use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii, severity_color};

/// Notices are re-checked at this interval so they disappear on time
const TICK: Duration = Duration::from_millis(200);

/// Convert a keyboard event to a ViewAction
pub fn key_to_action(key: KeyEvent, modal_open: bool) -> Option<ViewAction> {
    if modal_open {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Enter => Some(ViewAction::Confirm),
            KeyCode::Char('n') | KeyCode::Esc => Some(ViewAction::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ViewAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(ViewAction::Down),
        KeyCode::Right | KeyCode::Char('l') => Some(ViewAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(ViewAction::Collapse),
        KeyCode::Enter => Some(ViewAction::Open),
        KeyCode::Char('u') => Some(ViewAction::Upload),
        KeyCode::Char('d') => Some(ViewAction::Download),
        KeyCode::Char('o') => Some(ViewAction::OpenRepository),
        KeyCode::Char('x') | KeyCode::Delete => Some(ViewAction::Delete),
        KeyCode::Char('b') => Some(ViewAction::NextBranch),
        KeyCode::Char('q') | KeyCode::Esc => Some(ViewAction::Quit),
        _ => None,
    }
}

/// Lines of the screen left for tree rows (title, separator, modal and help take the rest)
fn rows_available(ui: &UiContext) -> usize {
    usize::from(ui.caps.height).saturating_sub(10).max(3)
}

/// Row range `[start, end)` that keeps `cursor` on screen
fn window(total: usize, cursor: usize, rows: usize) -> (usize, usize) {
    if total <= rows {
        return (0, total);
    }
    let start = cursor.saturating_sub(rows - 1).min(total - rows);
    (start, start + rows)
}

fn draw<S: StorageApi>(
    stdout: &mut io::Stdout,
    view: &TreeView,
    browser: &Browser<S>,
    ui: &UiContext,
) -> io::Result<()> {
    use crossterm::{
        cursor, execute, queue,
        style::{Print, ResetColor, SetForegroundColor},
        terminal::{self, ClearType},
    };

    execute!(
        stdout,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let title = format!("branchtree {}\r\n\r\n", browser.placement());
    queue!(stdout, Print(title))?;

    let now = Instant::now();
    let lines = render_tree(browser, Some(view.cursor()), false, ui.unicode, now);
    let visible = browser.tree().visible();
    let (start, end) = window(lines.len(), view.cursor(), rows_available(ui));

    for (line, node) in lines.iter().zip(&visible).take(end).skip(start) {
        let notice = browser.tree().notice(node.id, now);
        match notice {
            Some(notice) if ui.color => queue!(
                stdout,
                SetForegroundColor(severity_color(notice.severity)),
                Print(line),
                ResetColor,
                Print("\r\n")
            )?,
            _ => queue!(stdout, Print(line), Print("\r\n"))?,
        }
    }

    let sep = icon(ui.unicode, icons::SEPARATOR, icons_ascii::SEPARATOR)
        .repeat(usize::from(ui.caps.width.clamp(20, 100)));
    queue!(stdout, Print(&sep), Print("\r\n"))?;

    if let Some(modal) = browser.modal().view() {
        for line in render_modal(modal, ui.unicode) {
            queue!(stdout, Print(line), Print("\r\n"))?;
        }
    }

    if let Some(status) = view.status() {
        if ui.color {
            queue!(stdout, SetForegroundColor(colors::INFO))?;
        }
        queue!(stdout, Print(status), ResetColor, Print("\r\n"))?;
    }

    queue!(stdout, Print("\r\n"))?;
    if ui.color {
        queue!(stdout, SetForegroundColor(colors::DIM))?;
    }
    for line in render_help_bar(browser.modal().is_open()).lines() {
        queue!(stdout, Print(line), Print("\r\n"))?;
    }
    queue!(stdout, ResetColor)?;

    stdout.flush()
}

/// Run the tree view interactively until the user quits
pub fn run_interactive<S, R>(
    browser: &mut Browser<S>,
    store: &mut R,
    ui: &UiContext,
) -> io::Result<()>
where
    S: StorageApi,
    R: RemoteStore + ?Sized,
{
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let mut view = TreeView::new();
    let result = (|| -> io::Result<()> {
        draw(&mut stdout, &view, browser, ui)?;
        loop {
            if !event::poll(TICK)? {
                if browser.expire_notices(Instant::now()) > 0 {
                    draw(&mut stdout, &view, browser, ui)?;
                }
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(action) = key_to_action(key, browser.modal().is_open()) else {
                    continue;
                };
                if view.handle_action(browser, store, action) == Flow::Quit {
                    return Ok(());
                }
                draw(&mut stdout, &view, browser, ui)?;
            }
        }
    })();

    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}
