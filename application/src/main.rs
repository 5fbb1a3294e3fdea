use std::{io, sync::OnceLock};

use application::{render, seed, Args, Config, Service};
use common::Handler as _;
use service::{
    calendar::{DateWindow, Selection},
    command::CreateRule,
    domain::rule::{Action, Scope},
    infra::InMemory,
    query,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start();
}

fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        window,
        engine,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let window = DateWindow::of_days(window.first, window.num_days)
        .ok_or_else(|| {
            log::error!("`window.num_days` must be at least 1");
        })?;

    let service = Service::new(engine.into(), InMemory::default());
    let properties = seed::demo(&service, window.first());

    println!("{}", render::header(window));
    for property in &properties {
        let row = service
            .execute(query::calendar::Row {
                property_id: property.id,
                window,
                selection: Selection::default(),
            })
            .map_err(|e| {
                log::error!("failed to compose a calendar row: {e}");
            })?;
        println!();
        println!("{}", render::row(property, &row, window, engine.cell_width_px));
    }

    // Simulate a drag selection over free days and batch-apply a flash-sale
    // override onto the committed range.
    let seaview = &properties[0];
    let mut selection = Selection::default();
    selection.begin_drag(window.first() + 9);
    selection.drag_over(window.first() + 12);
    selection.release();
    let span = selection.committed().ok_or_else(|| {
        log::error!("drag selection did not commit");
    })?;

    service
        .execute(CreateRule {
            name: "Flash sale".parse().map_err(|e| {
                log::error!("invalid rule name: {e}");
            })?,
            scope: Scope::Property(seaview.id),
            enabled: true,
            priority: 70.into(),
            span,
            action: Action::PriceOverride {
                adjustment: "-15".parse().map_err(|e| {
                    log::error!("invalid adjustment: {e}");
                })?,
            },
        })
        .map(drop)
        .map_err(|e| {
            log::error!("failed to create the flash-sale rule: {e}");
        })?;
    selection.clear();

    log::info!("applied a flash sale to {span}");

    let row = service
        .execute(query::calendar::Row {
            property_id: seaview.id,
            window,
            selection,
        })
        .map_err(|e| {
            log::error!("failed to compose a calendar row: {e}");
        })?;
    println!();
    println!("{} after the flash sale:", seaview.name);
    println!("{}", render::row(seaview, &row, window, engine.cell_width_px));

    Ok(())
}
