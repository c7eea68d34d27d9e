use std::fs::File;
use std::process::ExitCode;
use std::time::Duration;

use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use tabslide::memory::BODY;
use tabslide::{Axis, Dom, Event, Geometry, MemoryDom, Tab, TabOptions};

const FRAME: Duration = Duration::from_millis(16);
const LABELS: [&str; 8] = [
    "Overview", "Tables", "Views", "Forms", "Charts", "Plugins", "Security", "Settings",
];

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    match std::env::var_os("TABSLIDE_LOG") {
        Some(path) => {
            let log_file = File::create(path)?;
            WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
        }
        None => {
            TermLogger::init(
                LevelFilter::Info,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

/// A 320px strip holding eight 110px tabs, with an 8px scrollbar.
fn build_page() -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.add_element(BODY, "nav", &["tab"]);
    dom.add_element("nav", "strip", &["tab__scroll"]);
    dom.set_geometry(
        "strip",
        Geometry {
            offset_width: 320.0,
            offset_height: 48.0,
            client_width: 320.0,
            client_height: 40.0,
            scroll_width: LABELS.len() as f64 * 110.0,
            scroll_height: 40.0,
            ..Default::default()
        },
    );

    for (i, label) in LABELS.iter().enumerate() {
        let id = label.to_lowercase();
        dom.add_element("strip", &id, &["tab-item"]);
        dom.set_geometry(
            &id,
            Geometry {
                offset_left: i as f64 * 110.0,
                offset_width: 110.0,
                offset_height: 40.0,
                scroll_width: 110.0,
                scroll_height: 40.0,
                ..Default::default()
            },
        );
    }
    dom
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let options = match std::env::args().nth(1) {
        Some(path) => TabOptions::from_file(path)?,
        None => TabOptions::new().auto_scroll(true),
    };

    let mut dom = build_page();
    let mut tab = Tab::new(&mut dom, "nav", options)?;
    info!("{} slider starts at {:?}", tab.root(), tab.slider_style());

    let order: Vec<String> = tab.items().iter().rev().cloned().collect();
    for item in order {
        dom.clear_writes();
        if !tab.handle_event(&mut dom, &Event::click(item.as_str()))? {
            continue;
        }

        let mut failure = None;
        let frames = dom.run_frames(FRAME, |dom| {
            if let Err(e) = tab.handle_event(dom, &Event::Frame) {
                failure.get_or_insert(e);
            }
        });
        if let Some(e) = failure {
            return Err(e.into());
        }

        let positions: Vec<String> = dom
            .writes_to("strip", Axis::Left)
            .iter()
            .map(|v| format!("{v:.1}"))
            .collect();
        println!(
            "{item:>9}: slider left={} scroll_left={} after {frames} frames [{}]",
            tab.slider_style().left.as_deref().unwrap_or("-"),
            dom.scroll_offset("strip", Axis::Left),
            positions.join(", ")
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Error: failed to initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
