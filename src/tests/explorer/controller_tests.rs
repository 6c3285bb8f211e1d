use time::Month;

use super::*;
use crate::explorer::test_support::{doc, sample_docs, store_with};
use crate::explorer::{Level, StatusUpdate};
use crate::model::AthenaId;

fn controller(docs: Vec<Editorial>) -> (ExplorerController, std::sync::Arc<crate::explorer::test_support::RecordingSink>) {
    let (store, sink) = store_with(docs);
    (ExplorerController::new(store), sink)
}

fn click(c: &mut ExplorerController, target: UiTarget) -> Rerender {
    let snap = c.snapshot(&HomeContext::default());
    c.activate(&snap, target).unwrap()
}

fn item_labels(c: &ExplorerController) -> Vec<String> {
    c.snapshot(&HomeContext::default())
        .items
        .into_iter()
        .map(|i| i.label)
        .collect()
}

#[test]
fn single_document_walkthrough() {
    let (mut c, sink) = controller(vec![doc("docA", 2024, Month::January, 5, false)]);

    assert_eq!(c.dispatch(ExplorerEvent::NavigateYear(2024)).unwrap(), Rerender::Full);
    assert_eq!(
        c.dispatch(ExplorerEvent::NavigateMonth(Month::January)).unwrap(),
        Rerender::Full
    );
    assert_eq!(item_labels(&c), vec!["05"]);

    assert_eq!(c.dispatch(ExplorerEvent::SelectDay(5)).unwrap(), Rerender::Bucket);
    let bucket = c.snapshot(&HomeContext::default()).bucket.unwrap();
    assert_eq!(bucket.cards.len(), 1);
    assert_eq!(bucket.cards[0].title, "docA.md");
    assert_eq!(bucket.cards[0].status, "Unread");

    assert_eq!(
        c.dispatch(ExplorerEvent::ToggleRead(EditorialId::from("docA")))
            .unwrap(),
        Rerender::Bucket
    );
    let snap = c.snapshot(&HomeContext::default());
    let card = &snap.bucket.as_ref().unwrap().cards[0];
    assert_eq!(card.status, "Read");
    assert_eq!(card.toggle_label, "Mark as Unread");
    assert_eq!(c.selection(), Some(5));
    assert!(snap.items[0].selected);

    assert_eq!(
        sink.taken(),
        vec![StatusUpdate {
            athena_id: AthenaId::from("ath-docA"),
            is_read: true
        }]
    );
}

#[test]
fn clicks_classify_by_level() {
    let (mut c, _) = controller(sample_docs());
    let snap = c.snapshot(&HomeContext::default());
    assert_eq!(
        c.classify(&snap, UiTarget::ListItem(1)),
        Some(ExplorerEvent::NavigateYear(2023))
    );
    assert_eq!(c.classify(&snap, UiTarget::ListItem(9)), None);
    // The current crumb is not clickable.
    assert_eq!(c.classify(&snap, UiTarget::Breadcrumb(0)), None);

    assert_eq!(click(&mut c, UiTarget::ListItem(0)), Rerender::Full);
    let snap = c.snapshot(&HomeContext::default());
    assert_eq!(
        c.classify(&snap, UiTarget::ListItem(1)),
        Some(ExplorerEvent::NavigateMonth(Month::January))
    );
    assert_eq!(
        c.classify(&snap, UiTarget::Breadcrumb(0)),
        Some(ExplorerEvent::GoHome)
    );

    click(&mut c, UiTarget::ListItem(0));
    let snap = c.snapshot(&HomeContext::default());
    assert_eq!(
        c.classify(&snap, UiTarget::ListItem(1)),
        Some(ExplorerEvent::SelectDay(14))
    );
    assert_eq!(
        c.classify(&snap, UiTarget::Breadcrumb(1)),
        Some(ExplorerEvent::NavigateBack)
    );
    // No day picked yet, so there are no document cards to act on.
    assert_eq!(
        c.classify(
            &snap,
            UiTarget::Document {
                index: 0,
                action: DocumentAction::View
            }
        ),
        None
    );
}

#[test]
fn document_actions_and_modal_targets() {
    let (mut c, _) = controller(sample_docs());
    click(&mut c, UiTarget::ListItem(0));
    click(&mut c, UiTarget::ListItem(0));
    assert_eq!(click(&mut c, UiTarget::ListItem(1)), Rerender::Bucket);

    let opened = click(
        &mut c,
        UiTarget::Document {
            index: 1,
            action: DocumentAction::View,
        },
    );
    assert_eq!(opened, Rerender::OpenDocument(EditorialId::from("e")));

    assert_eq!(click(&mut c, UiTarget::ModalBody), Rerender::None);
    assert_eq!(click(&mut c, UiTarget::ModalBackdrop), Rerender::CloseModal);
    assert_eq!(click(&mut c, UiTarget::ModalClose), Rerender::CloseModal);

    let toggled = click(
        &mut c,
        UiTarget::Document {
            index: 0,
            action: DocumentAction::ToggleRead,
        },
    );
    assert_eq!(toggled, Rerender::Bucket);
    assert!(!c.store().get(&EditorialId::from("b")).unwrap().is_read);
}

#[test]
fn back_after_month_restores_ancestors() {
    let (mut c, _) = controller(sample_docs());
    c.dispatch(ExplorerEvent::NavigateYear(2024)).unwrap();
    c.dispatch(ExplorerEvent::NavigateMonth(Month::February)).unwrap();
    c.dispatch(ExplorerEvent::SelectDay(3)).unwrap();

    assert_eq!(c.dispatch(ExplorerEvent::NavigateBack).unwrap(), Rerender::Full);
    assert_eq!(c.nav(), NavigationState::Months { year: 2024 });
    assert_eq!(c.selection(), None);

    assert_eq!(
        c.dispatch(ExplorerEvent::NavigateBack).unwrap(),
        Rerender::FullWithHome
    );
    assert_eq!(c.nav(), NavigationState::Years);
    assert!(c.snapshot(&HomeContext::default()).home.is_some());
}

#[test]
fn go_home_from_days_clears_selection() {
    let (mut c, _) = controller(sample_docs());
    c.dispatch(ExplorerEvent::NavigateYear(2024)).unwrap();
    c.dispatch(ExplorerEvent::NavigateMonth(Month::February)).unwrap();
    c.dispatch(ExplorerEvent::SelectDay(14)).unwrap();

    assert_eq!(
        c.dispatch(ExplorerEvent::GoHome).unwrap(),
        Rerender::FullWithHome
    );
    assert_eq!(c.nav().level(), Level::Years);
    assert_eq!(c.selection(), None);
}

#[test]
fn guarded_events_leave_state_untouched() {
    let (mut c, _) = controller(sample_docs());
    let err = c.dispatch(ExplorerEvent::NavigateYear(1990)).unwrap_err();
    assert!(matches!(
        err,
        ExplorerError::Navigation(NavigationError::UnknownYear(1990))
    ));
    assert_eq!(c.nav(), NavigationState::Years);

    c.dispatch(ExplorerEvent::NavigateYear(2023)).unwrap();
    assert!(c.dispatch(ExplorerEvent::NavigateMonth(Month::July)).is_err());
    assert_eq!(c.nav(), NavigationState::Months { year: 2023 });
}

#[test]
fn toggle_without_selected_day_is_not_found() {
    let (mut c, sink) = controller(sample_docs());
    let err = c
        .dispatch(ExplorerEvent::ToggleRead(EditorialId::from("a")))
        .unwrap_err();
    assert!(matches!(err, ExplorerError::Data(ref e) if e.is_not_found()));
    assert!(sink.taken().is_empty());
}

#[test]
fn view_of_unknown_document_is_not_found() {
    let (mut c, _) = controller(sample_docs());
    let err = c
        .dispatch(ExplorerEvent::ViewDocument(EditorialId::from("zzz")))
        .unwrap_err();
    assert!(matches!(err, ExplorerError::Data(ref e) if e.is_not_found()));
}

#[test]
fn selecting_another_day_moves_the_highlight() {
    let (mut c, _) = controller(sample_docs());
    c.dispatch(ExplorerEvent::NavigateYear(2024)).unwrap();
    c.dispatch(ExplorerEvent::NavigateMonth(Month::February)).unwrap();
    c.dispatch(ExplorerEvent::SelectDay(3)).unwrap();
    c.dispatch(ExplorerEvent::SelectDay(14)).unwrap();

    let snap = c.snapshot(&HomeContext::default());
    let selected: Vec<bool> = snap.items.iter().map(|i| i.selected).collect();
    assert_eq!(selected, vec![false, true]);
    assert_eq!(snap.bucket.unwrap().cards.len(), 2);
}
