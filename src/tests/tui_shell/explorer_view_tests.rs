use super::*;
use crate::explorer::test_support::{sample_docs, store_with};
use crate::explorer::{ExplorerController, ExplorerEvent, HomeContext};

fn at_february() -> (ExplorerController, ExplorerView) {
    let (store, _) = store_with(sample_docs());
    let mut ctrl = ExplorerController::new(store);
    ctrl.dispatch(ExplorerEvent::NavigateYear(2024)).unwrap();
    ctrl.dispatch(ExplorerEvent::NavigateMonth(time::Month::February))
        .unwrap();
    let mut view = ExplorerView::default();
    view.replace(ctrl.snapshot(&HomeContext::default()));
    (ctrl, view)
}

#[test]
fn empty_view_has_no_targets() {
    let view = ExplorerView::default();
    assert_eq!(view.enter_target(), None);
    assert_eq!(view.document_target(DocumentAction::View), None);
    assert_eq!(view.parent_crumb(), None);
    assert_eq!(view.home_crumb(), None);
}

#[test]
fn crumbs_point_one_up_and_home() {
    let (_, view) = at_february();
    assert_eq!(view.parent_crumb(), Some(UiTarget::Breadcrumb(1)));
    assert_eq!(view.home_crumb(), Some(UiTarget::Breadcrumb(0)));
}

#[test]
fn focus_moves_to_documents_only_when_a_day_is_open() {
    let (mut ctrl, mut view) = at_february();
    view.toggle_focus();
    assert_eq!(view.focus, Focus::Items);

    ctrl.dispatch(ExplorerEvent::SelectDay(14)).unwrap();
    view.update_bucket(ctrl.snapshot(&HomeContext::default()));
    view.toggle_focus();
    assert_eq!(view.focus, Focus::Documents);
    assert_eq!(
        view.enter_target(),
        Some(UiTarget::Document {
            index: 0,
            action: DocumentAction::View
        })
    );
}

#[test]
fn cursor_stays_within_bounds() {
    let (mut ctrl, mut view) = at_february();
    for _ in 0..5 {
        view.move_down();
    }
    assert_eq!(view.item_cursor, 1);

    ctrl.dispatch(ExplorerEvent::SelectDay(14)).unwrap();
    view.update_bucket(ctrl.snapshot(&HomeContext::default()));
    view.focus_documents();
    for _ in 0..5 {
        view.move_down();
    }
    assert_eq!(view.doc_cursor, 1);
    // The day list was left alone.
    assert_eq!(view.item_cursor, 1);
}

#[test]
fn switching_days_resets_the_document_cursor() {
    let (mut ctrl, mut view) = at_february();
    ctrl.dispatch(ExplorerEvent::SelectDay(14)).unwrap();
    view.update_bucket(ctrl.snapshot(&HomeContext::default()));
    view.doc_cursor = 1;

    ctrl.dispatch(ExplorerEvent::SelectDay(3)).unwrap();
    view.update_bucket(ctrl.snapshot(&HomeContext::default()));
    assert_eq!(view.doc_cursor, 0);
    let marked: Vec<_> = view
        .snapshot
        .as_ref()
        .unwrap()
        .items
        .iter()
        .filter(|i| i.selected)
        .map(|i| i.label.clone())
        .collect();
    assert_eq!(marked, ["03"]);
}
