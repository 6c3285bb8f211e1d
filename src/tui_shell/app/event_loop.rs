use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_events();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.quit = true;
        }

        KeyCode::Esc => {
            if app.mode() != UiMode::Explorer {
                app.pop_mode();
            } else if app.explorer.as_ref().is_some_and(|c| c.nav().year().is_some()) {
                explorer_key(app, KeyCode::Backspace);
            } else {
                app.quit = true;
            }
        }

        KeyCode::Char('e') => app.show_mode(UiMode::Exams),
        KeyCode::Char('p') => app.show_mode(UiMode::Performance),
        KeyCode::Char('?') => app.open_help(),

        KeyCode::Up => {
            if let Some(v) = app.view_mut() {
                v.move_up();
            }
        }
        KeyCode::Down => {
            if let Some(v) = app.view_mut() {
                v.move_down();
            }
        }

        code if app.mode() == UiMode::Explorer => explorer_key(app, code),
        _ => {}
    }
}

/// Resolves an explorer key to the target it activates.
fn explorer_key(app: &mut App, code: KeyCode) {
    let target = {
        let Some(v) = app.current_view_mut::<ExplorerView>() else {
            return;
        };
        match code {
            KeyCode::Tab | KeyCode::Right => {
                v.toggle_focus();
                None
            }
            KeyCode::Enter => v.enter_target(),
            KeyCode::Char('v') => v.document_target(DocumentAction::View),
            KeyCode::Char('r') | KeyCode::Char(' ') => {
                v.document_target(DocumentAction::ToggleRead)
            }
            KeyCode::Backspace | KeyCode::Left => v.parent_crumb(),
            KeyCode::Home | KeyCode::Char('h') => v.home_crumb(),
            _ => None,
        }
    };
    if let Some(target) = target {
        app.activate(target);
    }
}
