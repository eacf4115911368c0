//! Replays pointer events on an [`Editor`] and prints the resulting scene as svg.

use anyhow::{anyhow, bail, Context};
use bezier_crossings::draw::svg::SvgScene;
use bezier_crossings::draw::DrawScene;
use bezier_crossings::{Button, CurveId, Editor, Intent, Point, Settings, Viewport};
use std::path::PathBuf;

/// Width and height of the simulated window in pixels.
const WINDOW_SIZE: f64 = 800.0;

/// Pointer event in device pixels.
#[derive(Debug, PartialEq)]
enum Event {
    Press(Button, f64, f64),
    Move(f64, f64),
    Release,
    Switch,
}

impl Event {
    fn into_intent(self, viewport: Viewport) -> Intent {
        match self {
            Event::Press(button, x, y) => Intent::Press {
                position: viewport.to_model(x, y),
                button,
            },
            Event::Move(x, y) => Intent::Move {
                position: viewport.to_model(x, y),
            },
            Event::Release => Intent::Release,
            Event::Switch => Intent::SwitchCurve,
        }
    }
}

fn parse_event(line: &str) -> anyhow::Result<Option<Event>> {
    let line = line.split('#').next().unwrap_or("").trim();
    let mut words = line.split_whitespace();
    let kind = match words.next() {
        Some(kind) => kind,
        None => return Ok(None),
    };
    let mut coordinate = |name: &str| -> anyhow::Result<f64> {
        let word = words.next().ok_or_else(|| anyhow!("missing {} coordinate", name))?;
        word.parse::<f64>()
            .with_context(|| format!("invalid {} coordinate {:?}", name, word))
    };

    let event = match kind {
        "press" => Event::Press(Button::Primary, coordinate("x")?, coordinate("y")?),
        "secondary" => Event::Press(Button::Secondary, coordinate("x")?, coordinate("y")?),
        "move" => Event::Move(coordinate("x")?, coordinate("y")?),
        "release" => Event::Release,
        "switch" => Event::Switch,
        other => bail!("unknown event {:?}", other),
    };
    Ok(Some(event))
}

fn parse_script(text: &str) -> anyhow::Result<Vec<Event>> {
    let mut events = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if let Some(event) = parse_event(line).with_context(|| format!("line {}", n + 1))? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Clicks in two crossing curves, switching curves in between.
fn default_script(viewport: Viewport) -> Vec<Event> {
    let first = [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)];
    let second = [(-1.0, 0.5), (1.0, 0.5), (1.0, -0.5), (-1.0, -0.5)];

    let click = |(x, y): (f64, f64)| {
        let (x, y) = viewport.to_device(&Point::new(x, y));
        [Event::Press(Button::Primary, x, y), Event::Release]
    };
    let mut events: Vec<Event> = first.into_iter().flat_map(click).collect();
    events.push(Event::Switch);
    events.extend(second.into_iter().flat_map(click));
    events
}

struct Args {
    config: Option<PathBuf>,
    script: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config: None,
        script: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config expects a file")?;
                args.config = Some(PathBuf::from(path));
            }
            _ if args.script.is_none() => args.script = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument {:?}", arg),
        }
    }
    Ok(args)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let settings = match &args.config {
        Some(path) => Settings::load_from_file(path),
        None => Settings::default(),
    };
    let viewport = Viewport::new(WINDOW_SIZE, WINDOW_SIZE, settings.model_extent);

    let events = match &args.script {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            parse_script(&text).with_context(|| format!("in {}", path.display()))?
        }
        None => default_script(viewport),
    };

    let mut editor = Editor::new(settings);
    let mut rejected = 0;
    for event in events {
        if editor.handle(event.into_intent(viewport)).is_err() {
            rejected += 1;
        }
    }

    for id in CurveId::ALL {
        log::info!(
            "curve {}: {} control points",
            id,
            editor.control_points(id).len()
        );
    }
    if rejected > 0 {
        log::info!("{} events were rejected", rejected);
    }
    for p in editor.intersections() {
        log::info!("intersection at ({:.4}, {:.4})", p.x, p.y);
    }

    let mut scene = SvgScene::new(viewport);
    scene.add_editor(&editor);
    print!("{}", scene);
    Ok(())
}
