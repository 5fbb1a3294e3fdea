//! End-to-end flows over the in-memory store: rule CRUD commands feeding
//! pricing and calendar queries.

use common::{Day, DaySpan, Money, Percent};
use service::{
    calendar::{DateWindow, Selection},
    command::{
        AddBlockedPeriod, AddBooking, AddProperty, ApplyRuleToAll,
        CreateRule, DeleteRule, DuplicateRule, UpdateRule,
    },
    domain::{
        blocked::BlockReason,
        booking::{Channel, Status},
        rule::{Action, NumNights, PromotionKind, Scope},
        Property,
    },
    infra::InMemory,
    query, Command as _, Config, Service,
};
use time::macros::date;

fn day(d: time::Date) -> Day {
    d.into()
}

fn eur(s: &str) -> Money {
    format!("{s}EUR").parse().unwrap()
}

fn percent(s: &str) -> Percent {
    s.parse().unwrap()
}

fn june() -> DaySpan {
    DaySpan::new(day(date!(2026 - 06 - 01)), day(date!(2026 - 06 - 30)))
        .unwrap()
}

fn service() -> Service<InMemory> {
    Service::new(Config::default(), InMemory::default())
}

fn add_property(service: &Service<InMemory>, name: &str, rate: &str) -> Property {
    service
        .execute(AddProperty {
            name: name.parse().unwrap(),
            nightly_rate: eur(rate),
        })
        .unwrap()
}

fn create_rule(
    service: &Service<InMemory>,
    name: &str,
    scope: Scope,
    priority: i32,
    span: DaySpan,
    action: Action,
) -> service::domain::PricingRule {
    service
        .execute(CreateRule {
            name: name.parse().unwrap(),
            scope,
            enabled: true,
            priority: priority.into(),
            span,
            action,
        })
        .unwrap()
}

fn pricing_on(
    service: &Service<InMemory>,
    property: &Property,
    d: time::Date,
) -> service::read::pricing::DailyPricing {
    service
        .execute(query::daily_pricing::ForDay {
            property_id: property.id,
            day: day(d),
        })
        .unwrap()
}

#[test]
fn rule_mutations_are_visible_to_the_next_query() {
    let service = service();
    let property = add_property(&service, "Seaview Loft", "100");

    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 15)).final_price,
        eur("100"),
    );

    let rule = create_rule(
        &service,
        "June special",
        Scope::AllProperties,
        50,
        june(),
        Action::Promotion {
            kind: PromotionKind::Seasonal,
            adjustment: percent("-10"),
        },
    );
    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 15)).final_price,
        eur("90.00"),
    );

    service
        .execute(UpdateRule {
            id: rule.id,
            enabled: Some(false),
            ..UpdateRule::default()
        })
        .unwrap();
    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 15)).final_price,
        eur("100"),
    );

    service
        .execute(UpdateRule {
            id: rule.id,
            enabled: Some(true),
            priority: Some(60.into()),
            ..UpdateRule::default()
        })
        .unwrap();
    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 15)).final_price,
        eur("90.00"),
    );

    service.execute(DeleteRule { id: rule.id }).unwrap();
    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 15)).final_price,
        eur("100"),
    );
}

#[test]
fn repeated_queries_are_identical() {
    let service = service();
    let property = add_property(&service, "Old Town Studio", "85");
    drop(create_rule(
        &service,
        "Min stay",
        Scope::AllProperties,
        40,
        june(),
        Action::MinStay {
            nights: NumNights::new(3).unwrap(),
        },
    ));
    drop(create_rule(
        &service,
        "Summer promo",
        Scope::AllProperties,
        30,
        june(),
        Action::Promotion {
            kind: PromotionKind::EarlyBird,
            adjustment: percent("-15"),
        },
    ));

    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 10)),
        pricing_on(&service, &property, date!(2026 - 06 - 10)),
    );
}

#[test]
fn duplicated_rules_win_equal_priority_ties() {
    let service = service();
    let property = add_property(&service, "Harbour House", "200");

    drop(create_rule(
        &service,
        "Old override",
        Scope::Property(property.id),
        50,
        june(),
        Action::PriceOverride {
            adjustment: percent("-10"),
        },
    ));

    // An equal-priority override duplicated from another property's rule
    // lands later in creation order and takes the tie.
    let template = create_rule(
        &service,
        "New override",
        Scope::Property(property.id),
        50,
        june(),
        Action::PriceOverride {
            adjustment: percent("-40"),
        },
    );
    let clones = service
        .execute(DuplicateRule {
            id: template.id,
            target_property_ids: vec![property.id],
        })
        .unwrap();
    assert_eq!(clones.len(), 1);
    assert_eq!(clones[0].scope, Scope::Property(property.id));

    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 15)).final_price,
        eur("120.00"),
    );
}

#[test]
fn apply_to_all_widens_the_scope() {
    let service = service();
    let scoped_to = add_property(&service, "Garden Flat", "90");
    let other = add_property(&service, "City Nest", "110");

    let rule = create_rule(
        &service,
        "Deep clean",
        Scope::Property(scoped_to.id),
        80,
        june(),
        Action::ClosingBlock {
            reason: BlockReason::Maintenance,
        },
    );
    assert!(!pricing_on(&service, &other, date!(2026 - 06 - 15)).is_blocked);

    let widened = service.execute(ApplyRuleToAll { id: rule.id }).unwrap();
    assert_eq!(widened.scope, Scope::AllProperties);
    assert!(pricing_on(&service, &other, date!(2026 - 06 - 15)).is_blocked);
}

#[test]
fn unknown_property_is_reported() {
    let service = service();
    assert!(service
        .execute(query::daily_pricing::ForDay {
            property_id: service::domain::property::Id::new(),
            day: day(date!(2026 - 06 - 15)),
        })
        .is_err());
}

#[test]
fn calendar_row_composes_cells_and_segments() {
    let service = service();
    let property = add_property(&service, "Seaview Loft", "120");

    // Same-day turnover on Jun 10.
    for (check_in, check_out, guest) in [
        (date!(2026 - 06 - 06), date!(2026 - 06 - 10), "Anna Keller"),
        (date!(2026 - 06 - 10), date!(2026 - 06 - 13), "Piotr Nowak"),
    ] {
        service
            .execute(AddBooking {
                property_id: property.id,
                check_in: day(check_in),
                check_out: day(check_out),
                channel: Channel::Airbnb,
                guest: guest.parse().unwrap(),
                guests_count: 2,
                nightly_rate: eur("120"),
                status: Status::Confirmed,
            })
            .unwrap();
    }
    service
        .execute(AddBlockedPeriod {
            property_id: property.id,
            span: DaySpan::new(
                day(date!(2026 - 06 - 20)),
                day(date!(2026 - 06 - 22)),
            )
            .unwrap(),
            reason: BlockReason::OwnerStay,
            cleaning: None,
        })
        .unwrap();

    let window =
        DateWindow::of_days(day(date!(2026 - 06 - 01)), 30).unwrap();
    let row = service
        .execute(query::calendar::Row {
            property_id: property.id,
            window,
            selection: Selection::default(),
        })
        .unwrap();

    assert_eq!(row.cells.len(), 30);
    assert_eq!(row.layout.segments.len(), 3);
    assert_eq!(row.layout.overlaps, 0);

    // Turnover: both booking segments share the Jun 10 cell, meeting at its
    // midpoint on the same lane.
    let (a, b) = (&row.layout.segments[0], &row.layout.segments[1]);
    assert_eq!(a.lane, 0);
    assert_eq!(b.lane, 0);
    assert_eq!(
        a.segment.offset_px + a.segment.width_px,
        b.segment.offset_px,
    );

    // Cells know occupancy and blocks.
    let cell = |d: time::Date| {
        row.cells
            .iter()
            .find(|c| c.day == day(d))
            .unwrap()
            .clone()
    };
    assert!(cell(date!(2026 - 06 - 07)).occupied);
    assert!(!cell(date!(2026 - 06 - 07)).is_selectable());
    assert!(!cell(date!(2026 - 06 - 15)).occupied);
    assert!(cell(date!(2026 - 06 - 15)).is_selectable());
    // A blocked period is not a pricing-rule block, so the cell stays
    // unblocked price-wise but renders a square blocked segment.
    assert_eq!(row.layout.segments[2].segment.visible_days, 3);
}

#[test]
fn drag_selection_drives_a_batch_price_edit() {
    let service = service();
    let property = add_property(&service, "Seaview Loft", "100");
    let window =
        DateWindow::of_days(day(date!(2026 - 06 - 01)), 30).unwrap();

    // Drag Jun 18 -> Jun 14: the committed range is order-independent.
    let mut selection = Selection::default();
    selection.begin_drag(day(date!(2026 - 06 - 18)));
    selection.drag_over(day(date!(2026 - 06 - 14)));
    selection.release();
    let span = selection.committed().unwrap();
    assert_eq!(
        span,
        DaySpan::new(day(date!(2026 - 06 - 14)), day(date!(2026 - 06 - 18)))
            .unwrap(),
    );

    // Selection highlights exactly the dragged cells.
    let row = service
        .execute(query::calendar::Row {
            property_id: property.id,
            window,
            selection,
        })
        .unwrap();
    assert_eq!(row.cells.iter().filter(|c| c.selected).count(), 5);

    // Batch-apply a manual override to the selected days, then clear.
    drop(create_rule(
        &service,
        "Event week",
        Scope::Property(property.id),
        90,
        span,
        Action::PriceOverride {
            adjustment: percent("35"),
        },
    ));
    selection.clear();
    assert!(selection.range().is_none());

    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 14)).final_price,
        eur("135.00"),
    );
    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 18)).final_price,
        eur("135.00"),
    );
    assert_eq!(
        pricing_on(&service, &property, date!(2026 - 06 - 19)).final_price,
        eur("100"),
    );
}
