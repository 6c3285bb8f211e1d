use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use time::Month;

use super::event_loop::handle_key;
use super::*;
use crate::error::{DeskError, DeskResult};
use crate::explorer::test_support::{RecordingSink, sample_docs, store_with};
use crate::explorer::{Level, NavigationState, StatusUpdate};
use crate::model::AthenaId;
use crate::tui_shell::views::explorer::Focus;

struct FakeDocs {
    body: Option<String>,
}

impl DocumentSource for FakeDocs {
    fn download_url(&self, id: &EditorialId) -> DeskResult<String> {
        Ok(format!("https://files.test/{}", id))
    }

    fn fetch_text(&self, _url: &str) -> DeskResult<String> {
        self.body
            .clone()
            .ok_or_else(|| DeskError::fetch("document body", "status 403 Forbidden"))
    }
}

fn app_with(body: Option<&str>) -> (App, Arc<RecordingSink>) {
    let (store, sink) = store_with(sample_docs());
    let mut app = App::new(DeskConfig::default());
    app.install(
        ExplorerController::new(store),
        Arc::new(FakeDocs {
            body: body.map(str::to_string),
        }),
    );
    (app, sink)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn nav(app: &App) -> NavigationState {
    app.explorer.as_ref().unwrap().nav()
}

fn view(app: &App) -> &ExplorerView {
    app.frames[0]
        .view
        .as_any()
        .downcast_ref::<ExplorerView>()
        .unwrap()
}

fn wait_for_document(app: &mut App) {
    let ev = app
        .events
        .recv_timeout(Duration::from_secs(5))
        .expect("document result");
    app.apply_event(ev);
}

#[test]
fn greeting_follows_the_hour() {
    assert_eq!(greeting(0), "Good morning");
    assert_eq!(greeting(11), "Good morning");
    assert_eq!(greeting(12), "Good afternoon");
    assert_eq!(greeting(16), "Good afternoon");
    assert_eq!(greeting(17), "Good evening");
    assert_eq!(greeting(23), "Good evening");
}

#[test]
fn header_date_and_clock_formats() {
    let at = time::Date::from_calendar_date(2024, Month::January, 5)
        .unwrap()
        .with_hms(9, 7, 0)
        .unwrap()
        .assume_utc();
    assert_eq!(fmt_long_date(at), "Friday, January 5, 2024");
    assert_eq!(fmt_clock(at), "09:07");
}

#[test]
fn day_counts_read_naturally() {
    assert_eq!(fmt_day_count(0), "today");
    assert_eq!(fmt_day_count(1), "1 day");
    assert_eq!(fmt_day_count(12), "12 days");
}

#[test]
fn install_paints_the_year_list() {
    let (app, _) = app_with(None);
    let snap = view(&app).snapshot.as_ref().unwrap();
    assert_eq!(snap.level, Level::Years);
    let labels: Vec<_> = snap.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["2024", "2023"]);
    assert!(snap.home.is_some());
}

#[test]
fn keys_drill_down_and_toggle_a_document() {
    let (mut app, sink) = app_with(None);

    press(&mut app, KeyCode::Enter);
    assert_eq!(nav(&app), NavigationState::Months { year: 2024 });

    // February was seen first, January second.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        nav(&app),
        NavigationState::Days {
            year: 2024,
            month: Month::January
        }
    );

    press(&mut app, KeyCode::Enter);
    assert_eq!(view(&app).focus, Focus::Documents);
    let card = &view(&app).snapshot.as_ref().unwrap().bucket.as_ref().unwrap().cards[0];
    assert_eq!(card.id.as_str(), "c");
    assert!(!card.is_read);

    press(&mut app, KeyCode::Char('r'));
    let card = &view(&app).snapshot.as_ref().unwrap().bucket.as_ref().unwrap().cards[0];
    assert!(card.is_read);
    assert_eq!(card.status, "Read");
    assert_eq!(
        sink.taken(),
        vec![StatusUpdate {
            athena_id: AthenaId("ath-c".to_string()),
            is_read: true
        }]
    );
}

#[test]
fn toggle_keeps_the_document_cursor() {
    let (mut app, _) = app_with(None);
    press(&mut app, KeyCode::Enter); // 2024
    press(&mut app, KeyCode::Enter); // February
    press(&mut app, KeyCode::Down); // day 14
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down); // second document
    assert_eq!(view(&app).doc_cursor, 1);

    press(&mut app, KeyCode::Char(' '));
    let v = view(&app);
    assert_eq!(v.doc_cursor, 1);
    let cards = &v.snapshot.as_ref().unwrap().bucket.as_ref().unwrap().cards;
    assert_eq!(cards[1].id.as_str(), "e");
    assert!(cards[1].is_read);
    let day_14 = v.snapshot.as_ref().unwrap().items.iter().find(|i| i.selected);
    assert_eq!(day_14.map(|i| i.label.as_str()), Some("14"));
}

#[test]
fn back_and_home_crumbs() {
    let (mut app, _) = app_with(None);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(view(&app).snapshot.as_ref().unwrap().level, Level::Days);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(nav(&app), NavigationState::Months { year: 2024 });

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(nav(&app), NavigationState::Years);
    assert!(view(&app).snapshot.as_ref().unwrap().home.is_some());
}

#[test]
fn going_home_repaints_stats_after_a_toggle() {
    let (mut app, _) = app_with(None);
    let before = view(&app).snapshot.as_ref().unwrap().home.clone().unwrap();
    assert_eq!((before.editorials.read, before.editorials.unread), (1, 4));

    press(&mut app, KeyCode::Enter); // 2024
    press(&mut app, KeyCode::Enter); // February
    press(&mut app, KeyCode::Down); // day 14
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r')); // b back to unread
    assert!(view(&app).snapshot.as_ref().unwrap().home.is_none());

    press(&mut app, KeyCode::Char('h'));
    let snap = view(&app).snapshot.as_ref().unwrap();
    assert_eq!(snap.level, Level::Years);
    assert!(snap.bucket.is_none());
    let after = snap.home.as_ref().unwrap();
    assert_eq!((after.editorials.read, after.editorials.unread), (0, 5));
}

#[test]
fn viewing_a_document_fills_the_modal() {
    let (mut app, _) = app_with(Some("---\ntitle: Monetary policy\n---\n# Rates\n\nBody.\n"));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('v'));

    let m = app.modal.as_ref().unwrap();
    assert_eq!(m.title, "c.md");
    assert!(matches!(m.kind, ModalKind::Document(DocumentPane::Loading)));

    wait_for_document(&mut app);
    let m = app.modal.as_ref().unwrap();
    assert_eq!(m.title, "Monetary policy");
    let ModalKind::Document(DocumentPane::Ready(lines)) = &m.kind else {
        panic!("expected rendered document, got {:?}", m.kind);
    };
    let text = crate::document::plain_text(lines);
    assert!(text.contains("Rates"));
    assert!(text.contains("Body."));

    press(&mut app, KeyCode::Esc);
    assert!(app.modal.is_none());
}

#[test]
fn failed_document_shows_the_error_state() {
    let (mut app, _) = app_with(None);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    wait_for_document(&mut app);
    let m = app.modal.as_ref().unwrap();
    assert!(matches!(m.kind, ModalKind::Document(DocumentPane::Failed)));
}

#[test]
fn late_document_after_close_is_dropped() {
    let (mut app, _) = app_with(Some("late"));
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(app.modal.is_none());

    wait_for_document(&mut app);
    assert!(app.modal.is_none());
}

#[test]
fn modal_keys_do_not_reach_the_explorer() {
    let (mut app, _) = app_with(None);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.modal.is_some());

    press(&mut app, KeyCode::Enter);
    assert!(app.modal.is_none());
    assert_eq!(nav(&app), NavigationState::Years);
}

#[test]
fn exam_view_opens_and_pops() {
    let (mut app, _) = app_with(None);
    app.exams = Err("fetch exams: connection refused".to_string());

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.mode(), UiMode::Exams);
    let exams = app.current_view::<ExamsView>().unwrap();
    assert!(exams.exams.is_err());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode(), UiMode::Explorer);
    assert!(!app.quit);
}

#[test]
fn performance_without_a_client_reports_inline() {
    let (mut app, _) = app_with(None);
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.mode(), UiMode::Performance);
    let perf = app.current_view::<PerformanceView>().unwrap();
    assert_eq!(perf.series, Err("not connected".to_string()));
}

#[test]
fn inert_targets_change_nothing() {
    let (mut app, _) = app_with(None);
    app.activate(UiTarget::Document {
        index: 0,
        action: DocumentAction::ToggleRead,
    });
    app.activate(UiTarget::ListItem(99));
    app.activate(UiTarget::Breadcrumb(0));
    app.handle_modal_target(UiTarget::ModalBody);

    assert_eq!(nav(&app), NavigationState::Years);
    assert!(app.last_result.is_none());
    assert!(app.modal.is_none());
}

#[test]
fn stale_snapshot_rejection_lands_in_the_status_line() {
    let (mut app, _) = app_with(None);
    let years = view(&app).snapshot.clone().unwrap();
    press(&mut app, KeyCode::Enter);

    // A year list painted over a controller that already moved on.
    app.explorer_view_mut().unwrap().snapshot = Some(years);
    app.activate(UiTarget::ListItem(1));

    assert_eq!(nav(&app), NavigationState::Months { year: 2024 });
    let entry = app.last_result.as_ref().unwrap();
    assert!(entry.text.contains("select year"), "{}", entry.text);
}

#[test]
fn q_and_ctrl_c_quit() {
    let (mut app, _) = app_with(None);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.quit);

    let (mut app, _) = app_with(None);
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.quit);
}
