use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use gridlist::{
    BindableList, Comparator, ComparatorFactory, FieldDescriptor, FieldKind, GridListError,
    GridListResult, ListChanged, SortDescription, SortDirection, SortableList,
};
use pretty_assertions::assert_eq;
use rand::seq::SliceRandom;

/// A row the way a grid of music releases would bind it.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Release {
    title: String,
    year: Option<i32>,
    added_at: DateTime<Utc>,
    plays: u64,
}

fn release(title: &str, year: Option<i32>, added_day: u32, plays: u64) -> Release {
    Release {
        title: title.to_owned(),
        year,
        added_at: Utc.with_ymd_and_hms(2026, 1, added_day, 0, 0, 0).unwrap(),
        plays,
    }
}

fn title_field() -> FieldDescriptor<Release> {
    FieldDescriptor::text("title", |release: &Release| release.title.as_str().into())
}

fn year_field() -> FieldDescriptor<Release> {
    FieldDescriptor::comparable("year", |release: &Release| release.year.into())
}

fn added_field() -> FieldDescriptor<Release> {
    FieldDescriptor::comparable("added", |release: &Release| release.added_at.into())
}

fn plays_field() -> FieldDescriptor<Release> {
    FieldDescriptor::comparable("plays", |release: &Release| release.plays.into())
}

/// Resolve a persisted field name back to its descriptor, as a grid's column table would.
fn field_named(name: &str) -> FieldDescriptor<Release> {
    match name {
        "title" => title_field(),
        "year" => year_field(),
        "added" => added_field(),
        "plays" => plays_field(),
        _ => panic!("There is no sortable field named {name}"),
    }
}

fn titles(list: &SortableList<Release>) -> Vec<&str> {
    list.iter().map(|release| release.title.as_str()).collect()
}

fn setup() {
    let _ = env_logger::builder()
        // Include all events in tests
        .filter_level(log::LevelFilter::max())
        // Ensure events are captured by `cargo test`
        .is_test(true)
        // Ignore errors initializing the logger if tests race to configure it
        .try_init();
}

#[test]
fn a_grid_can_sort_its_rows_through_the_binding_contract() {
    setup();

    let mut list: SortableList<Release> = SortableList::new();
    let binding: &mut dyn BindableList<Release> = &mut list;
    binding.push(release("b", Some(1990), 2, 2));
    binding.push(release("a", Some(1988), 1, 1));
    binding.push(release("c", Some(2001), 3, 3));
    assert!(binding.supports_sorting());
    assert!(!binding.is_sorted());

    binding
        .apply_sort(title_field(), SortDirection::Ascending)
        .unwrap();
    assert!(binding.is_sorted());
    assert_eq!(binding.get(0).map(|release| release.title.as_str()), Some("a"));
    assert_eq!(binding.get(1).map(|release| release.title.as_str()), Some("b"));
    assert_eq!(binding.get(2).map(|release| release.title.as_str()), Some("c"));

    binding
        .apply_sort(plays_field(), SortDirection::Descending)
        .unwrap();
    assert_eq!(binding.sort_field().map(|field| field.name()), Some("plays"));
    assert_eq!(binding.sort_direction(), SortDirection::Descending);
    assert_eq!(binding.get(0).map(|release| release.title.as_str()), Some("c"));
    assert_eq!(binding.get(1).map(|release| release.title.as_str()), Some("b"));
    assert_eq!(binding.get(2).map(|release| release.title.as_str()), Some("a"));
}

#[test]
fn title_sorts_ignore_letter_case() {
    setup();

    let mut list = SortableList::from_items(vec![
        release("beta", None, 1, 0),
        release("Alpha", None, 2, 0),
        release("gamma", None, 3, 0),
    ]);

    list.apply_sort(title_field(), SortDirection::Ascending)
        .unwrap();

    assert_eq!(titles(&list), vec!["Alpha", "beta", "gamma"]);
}

#[test]
fn timestamp_fields_order_rows_chronologically() {
    setup();

    let mut list = SortableList::from_items(vec![
        release("middle", None, 5, 0),
        release("oldest", None, 2, 0),
        release("newest", None, 9, 0),
    ]);

    list.apply_sort(added_field(), SortDirection::Ascending)
        .unwrap();

    assert_eq!(titles(&list), vec!["oldest", "middle", "newest"]);
}

#[test]
fn a_row_that_cannot_produce_a_value_aborts_the_sort() {
    setup();

    let unstable = FieldDescriptor::new("plays", FieldKind::Comparable, |release: &Release| {
        if release.title == "corrupted" {
            Err("the cell is being edited".into())
        } else {
            Ok(release.plays.into())
        }
    });
    let mut list = SortableList::from_items(vec![
        release("first", None, 1, 30),
        release("corrupted", None, 2, 10),
        release("last", None, 3, 20),
    ]);

    let error = list
        .apply_sort(unstable, SortDirection::Ascending)
        .unwrap_err();

    assert!(matches!(error, GridListError::FieldAccess(_)));
    assert!(error.to_string().contains("plays"));
    assert!(error.to_string().contains("the cell is being edited"));
    assert_eq!(titles(&list), vec!["first", "corrupted", "last"]);
    assert!(!list.is_sorted());
}

#[test]
fn every_mutation_and_successful_sort_publishes_a_notification() {
    setup();

    let changes: Rc<RefCell<Vec<ListChanged>>> = Rc::new(RefCell::new(vec![]));
    let sink = Rc::clone(&changes);
    let mut list: SortableList<Release> = SortableList::new();
    let binding: &mut dyn BindableList<Release> = &mut list;
    binding.set_change_listener(Box::new(move |change| sink.borrow_mut().push(change)));

    binding.push(release("a", None, 1, 1));
    binding.push(release("b", None, 2, 2));
    binding.insert(1, release("c", None, 3, 3));
    binding.replace(0, release("d", None, 4, 4));
    binding.remove(2);
    binding
        .apply_sort(title_field(), SortDirection::Ascending)
        .unwrap();
    binding.clear();

    assert_eq!(
        *changes.borrow(),
        vec![
            ListChanged::ItemAdded { index: 0 },
            ListChanged::ItemAdded { index: 1 },
            ListChanged::ItemAdded { index: 1 },
            ListChanged::ItemChanged { index: 0 },
            ListChanged::ItemRemoved { index: 2 },
            ListChanged::Reset,
            ListChanged::Reset,
        ]
    );
}

#[test]
fn a_persisted_sort_description_can_be_replayed_in_a_later_session() {
    setup();

    let rows = vec![
        release("b", Some(1990), 2, 2),
        release("a", Some(1988), 1, 1),
        release("c", Some(2001), 3, 3),
    ];
    let mut first_session = SortableList::from_items(rows.clone());
    first_session
        .apply_sort(year_field(), SortDirection::Descending)
        .unwrap();
    assert_eq!(titles(&first_session), vec!["c", "b", "a"]);

    let serialized = serde_json::to_string(&first_session.sort_description().unwrap()).unwrap();
    assert_eq!(serialized, r#"{"field":"year","direction":"descending"}"#);

    let description: SortDescription = serde_json::from_str(&serialized).unwrap();
    let mut second_session = SortableList::from_items(rows);
    second_session
        .apply_sort(field_named(&description.field), description.direction)
        .unwrap();

    assert_eq!(titles(&second_session), titles(&first_session));
    assert_eq!(second_session.sort_description(), first_session.sort_description());
}

#[test]
fn shuffled_rows_always_sort_into_nondecreasing_order() {
    setup();

    let mut rows: Vec<Release> = (0..50)
        .map(|n| {
            let year = if n % 7 == 0 { None } else { Some(1960 + n) };
            release(&format!("release {n}"), year, 1 + (n as u32 % 28), n as u64)
        })
        .collect();
    rows.shuffle(&mut rand::thread_rng());

    let mut list = SortableList::from_items(rows);
    list.apply_sort(year_field(), SortDirection::Ascending)
        .unwrap();

    let years: Vec<Option<i32>> = list.iter().map(|release| release.year).collect();
    assert_eq!(years.len(), 50);
    // None orders before Some, which matches the missing-first rule
    assert!(years.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn removing_a_sort_keeps_the_display_order_in_place() {
    setup();

    let mut list = SortableList::from_items(vec![
        release("a", None, 1, 1),
        release("c", None, 3, 3),
        release("b", None, 2, 2),
    ]);
    list.apply_sort(plays_field(), SortDirection::Descending)
        .unwrap();
    assert_eq!(titles(&list), vec!["c", "b", "a"]);

    list.remove_sort();

    assert_eq!(titles(&list), vec!["c", "b", "a"]);
    assert!(!list.is_sorted());
    assert!(list.sort_field().is_none());
    assert_eq!(list.sort_direction(), SortDirection::Ascending);
}

#[test]
fn an_installed_comparator_factory_replaces_the_built_in_rules() {
    setup();

    /// Orders by year and breaks ties by title instead of by prior position.
    struct YearThenTitle {
        direction: SortDirection,
    }

    impl Comparator<Release> for YearThenTitle {
        fn compare(&self, a: &Release, b: &Release) -> GridListResult<Ordering> {
            let raw = a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title));

            Ok(self.direction.apply(raw))
        }
    }

    let mut list = SortableList::from_items(vec![
        release("delta", Some(2000), 1, 0),
        release("alpha", Some(2000), 2, 0),
        release("beta", Some(1995), 3, 0),
    ]);
    let factory: ComparatorFactory<Release> =
        Arc::new(|_field, direction| Box::new(YearThenTitle { direction }));
    list.set_comparator_factory(factory);

    list.apply_sort(year_field(), SortDirection::Ascending)
        .unwrap();
    assert_eq!(titles(&list), vec!["beta", "alpha", "delta"]);

    list.apply_sort(year_field(), SortDirection::Descending)
        .unwrap();
    assert_eq!(titles(&list), vec!["delta", "alpha", "beta"]);

    // The built-in rules break the 2000 tie by prior position, which is delta before alpha here
    list.clear_comparator_factory();
    list.apply_sort(year_field(), SortDirection::Ascending)
        .unwrap();
    assert_eq!(titles(&list), vec!["beta", "delta", "alpha"]);
}
