//! Scripted pointer sessions.
//!
//! An event script is a TOML document listing selection changes and pointer
//! events in the order a host would deliver them:
//!
//! ```toml
//! [[events]]
//! kind = "select"
//!
//! [[events]]
//! kind = "click"
//! x = 10.0
//! y = 20.0
//!
//! [[events]]
//! kind = "down"
//! x = 10.0
//! y = 20.0
//! button = "right"
//! ```
//!
//! Replaying a script drives a [`Tool`] exactly like an interactive host and
//! records what each press reported.

use crate::draw::Point;
use crate::input::{MouseButton, PointerEvent, PressOutcome, Tool, ToolBehavior};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid event script: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One host-side event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Host selects the tool
    Select,
    /// Host deselects the tool
    Deselect,
    /// Host hit-tests the tool at a position and selects it on a hit
    Pick { x: f64, y: f64 },
    /// Button press
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer motion
    Move { x: f64, y: f64 },
    /// Button release
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    /// Press immediately followed by a release at the same position
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
}

/// Parsed event script.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// What a replay observed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Outcome of every press, in order
    pub presses: Vec<PressOutcome>,
    /// Result of every pick, in order
    pub picks: Vec<bool>,
    /// Number of events after which the tool requested a redraw
    pub redraws: usize,
}

impl ReplayReport {
    /// Whether the host would still be routing events to the tool.
    pub fn remain_active(&self) -> bool {
        self.presses
            .last()
            .is_some_and(|outcome| outcome.remain_active())
    }
}

impl EventScript {
    /// Parses a script from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_toml_str(&text)?;
        info!(
            "Loaded {} events from {}",
            script.events.len(),
            path.display()
        );
        Ok(script)
    }

    /// Dispatches every event to `tool` in order.
    pub fn replay(&self, tool: &mut Tool) -> ReplayReport {
        let mut report = ReplayReport::default();

        for event in &self.events {
            debug!("Replaying {:?}", event);
            match *event {
                ScriptEvent::Select => tool.set_selected(true),
                ScriptEvent::Deselect => tool.set_selected(false),
                ScriptEvent::Pick { x, y } => {
                    report.picks.push(tool.try_select(Point::new(x, y)));
                }
                ScriptEvent::Down { x, y, button } => {
                    let outcome = tool.on_pointer_down(PointerEvent::new(button, x, y));
                    report.presses.push(outcome);
                }
                ScriptEvent::Move { x, y } => tool.on_pointer_move(PointerEvent::primary(x, y)),
                ScriptEvent::Up { x, y, button } => {
                    tool.on_pointer_up(PointerEvent::new(button, x, y));
                }
                ScriptEvent::Click { x, y, button } => {
                    let event = PointerEvent::new(button, x, y);
                    report.presses.push(tool.on_pointer_down(event));
                    tool.on_pointer_up(event);
                }
            }
            if tool.take_redraw() {
                report.redraws += 1;
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{LineStyle, Palette};
    use crate::input::{EditMode, IgnoreReason, ToolKind};

    fn line_tool() -> Tool {
        ToolKind::Line.create(0, LineStyle::default(), Palette::default())
    }

    #[test]
    fn parses_all_event_kinds() {
        let script = EventScript::from_toml_str(
            r#"
            [[events]]
            kind = "select"

            [[events]]
            kind = "pick"
            x = 1
            y = 2

            [[events]]
            kind = "down"
            x = 1.5
            y = 2.5
            button = "middle"

            [[events]]
            kind = "move"
            x = 3
            y = 4

            [[events]]
            kind = "up"
            x = 3
            y = 4

            [[events]]
            kind = "click"
            x = 5
            y = 6

            [[events]]
            kind = "deselect"
            "#,
        )
        .unwrap();

        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Select,
                ScriptEvent::Pick { x: 1.0, y: 2.0 },
                ScriptEvent::Down {
                    x: 1.5,
                    y: 2.5,
                    button: MouseButton::Middle
                },
                ScriptEvent::Move { x: 3.0, y: 4.0 },
                ScriptEvent::Up {
                    x: 3.0,
                    y: 4.0,
                    button: MouseButton::Left
                },
                ScriptEvent::Click {
                    x: 5.0,
                    y: 6.0,
                    button: MouseButton::Left
                },
                ScriptEvent::Deselect,
            ]
        );
    }

    #[test]
    fn empty_script_has_no_events() {
        assert_eq!(EventScript::from_toml_str("").unwrap(), EventScript::default());
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let err = EventScript::from_toml_str("[[events]]\nkind = \"scroll\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EventScript::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn replay_draws_and_finishes_a_line() {
        let script = EventScript {
            events: vec![
                ScriptEvent::Select,
                ScriptEvent::Click {
                    x: 0.0,
                    y: 0.0,
                    button: MouseButton::Left,
                },
                ScriptEvent::Move { x: 60.0, y: 0.0 },
                ScriptEvent::Click {
                    x: 100.0,
                    y: 0.0,
                    button: MouseButton::Left,
                },
                ScriptEvent::Click {
                    x: 100.0,
                    y: 0.0,
                    button: MouseButton::Left,
                },
            ],
        };
        let mut tool = line_tool();
        let report = script.replay(&mut tool);

        assert_eq!(
            report.presses,
            vec![
                PressOutcome::Active,
                PressOutcome::Active,
                PressOutcome::Finished
            ]
        );
        assert!(!report.remain_active());
        assert_eq!(report.redraws, 5);
        assert_eq!(tool.mode(), EditMode::Modify);
        assert_eq!(tool.as_line().map(|line| line.points().len()), Some(3));
    }

    #[test]
    fn replay_records_ignored_presses_and_picks() {
        let script = EventScript {
            events: vec![
                ScriptEvent::Click {
                    x: 0.0,
                    y: 0.0,
                    button: MouseButton::Left,
                },
                ScriptEvent::Pick { x: 0.0, y: 0.0 },
            ],
        };
        let mut tool = line_tool();
        let report = script.replay(&mut tool);

        assert_eq!(
            report.presses,
            vec![PressOutcome::Ignored(IgnoreReason::NotSelected)]
        );
        assert_eq!(report.picks, vec![false]);
        assert_eq!(report.redraws, 0);
    }
}
