//! Stage-driven wizard state machine, pure except for the single
//! materialization call on the summary confirm edge.

pub mod render;
pub mod terminal;

use anyhow::Result;

/// Application types offered by the wizard. Configuration data, not a cap:
/// adding an entry needs no state machine change.
pub const APP_TYPES: &[&str] = &["web-api"];

/// Package flavors offered by the wizard.
pub const PACKAGES: &[&str] = &["stdlib"];

/// A discrete input event, already decoupled from physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Confirm,
    Cancel,
}

/// Line editor state for the name prompt. The cursor is a char offset,
/// clamped to `0..=len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.buffer.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(cursor)
            .map_or(self.buffer.len(), |(idx, _)| idx)
    }
}

/// One stage of the wizard. Each variant carries exactly the state that is
/// legal in it, so a selection cannot exist before its stage confirmed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    NameInput {
        input: TextInput,
    },
    TypeSelect {
        name: String,
        cursor: usize,
    },
    PackageSelect {
        name: String,
        app_type: String,
        cursor: usize,
    },
    Summary {
        name: String,
        app_type: String,
        package: String,
    },
    Success {
        name: String,
    },
}

#[derive(Debug)]
pub struct WizardState {
    stage: Stage,
    app_types: Vec<String>,
    packages: Vec<String>,
    last_error: Option<String>,
    terminated: bool,
}

impl WizardState {
    pub fn new(app_types: Vec<String>, packages: Vec<String>) -> Self {
        Self {
            stage: Stage::NameInput {
                input: TextInput::default(),
            },
            app_types,
            packages,
            last_error: None,
            terminated: false,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn app_types(&self) -> &[String] {
        &self.app_types
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// The error waiting to be displayed, if any. Rendering never clears it;
    /// the driver calls [`WizardState::acknowledge_error`] after display.
    pub fn peek_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn acknowledge_error(&mut self) {
        self.last_error = None;
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// True once the session reached the success stage.
    pub fn is_complete(&self) -> bool {
        matches!(self.stage, Stage::Success { .. })
    }

    /// Apply one input event. `materialize` is invoked at most once, on the
    /// summary confirm edge, with `(name, app_type, package)`; its failure
    /// keeps the session in the summary stage with the error recorded.
    pub fn advance<F>(mut self, event: InputEvent, materialize: F) -> Self
    where
        F: FnOnce(&str, &str, &str) -> Result<()>,
    {
        if event == InputEvent::Cancel && !matches!(self.stage, Stage::Success { .. }) {
            self.terminated = true;
            return self;
        }

        let stage = self.stage;
        self.stage = match (stage, event) {
            (Stage::NameInput { mut input }, event) => match event {
                InputEvent::Char(ch) => {
                    input.insert(ch);
                    Stage::NameInput { input }
                }
                InputEvent::Backspace => {
                    input.backspace();
                    Stage::NameInput { input }
                }
                InputEvent::Left => {
                    input.left();
                    Stage::NameInput { input }
                }
                InputEvent::Right => {
                    input.right();
                    Stage::NameInput { input }
                }
                InputEvent::Confirm => match validate_project_name(input.as_str()) {
                    Ok(()) => Stage::TypeSelect {
                        name: input.as_str().to_string(),
                        cursor: 0,
                    },
                    Err(message) => {
                        self.last_error = Some(message);
                        Stage::NameInput { input }
                    }
                },
                _ => Stage::NameInput { input },
            },

            (Stage::TypeSelect { name, cursor }, InputEvent::Up) => Stage::TypeSelect {
                name,
                cursor: cursor.saturating_sub(1),
            },
            (Stage::TypeSelect { name, cursor }, InputEvent::Down) => Stage::TypeSelect {
                name,
                cursor: clamp_down(cursor, self.app_types.len()),
            },
            (Stage::TypeSelect { name, cursor }, InputEvent::Confirm) => Stage::PackageSelect {
                name,
                app_type: self.app_types[cursor].clone(),
                cursor: 0,
            },

            (
                Stage::PackageSelect {
                    name,
                    app_type,
                    cursor,
                },
                InputEvent::Up,
            ) => Stage::PackageSelect {
                name,
                app_type,
                cursor: cursor.saturating_sub(1),
            },
            (
                Stage::PackageSelect {
                    name,
                    app_type,
                    cursor,
                },
                InputEvent::Down,
            ) => Stage::PackageSelect {
                name,
                app_type,
                cursor: clamp_down(cursor, self.packages.len()),
            },
            (
                Stage::PackageSelect {
                    name,
                    app_type,
                    cursor,
                },
                InputEvent::Confirm,
            ) => Stage::Summary {
                name,
                app_type,
                package: self.packages[cursor].clone(),
            },

            (
                Stage::Summary {
                    name,
                    app_type,
                    package,
                },
                InputEvent::Confirm,
            ) => match materialize(&name, &app_type, &package) {
                Ok(()) => Stage::Success { name },
                Err(err) => {
                    self.last_error = Some(format!("{err:#}"));
                    Stage::Summary {
                        name,
                        app_type,
                        package,
                    }
                }
            },

            // Any key leaves the success screen.
            (Stage::Success { name }, _) => {
                self.terminated = true;
                Stage::Success { name }
            }

            (stage, _) => stage,
        };

        self
    }
}

/// Move a selection cursor down, clamped to the last option.
fn clamp_down(cursor: usize, len: usize) -> usize {
    if cursor + 1 < len {
        cursor + 1
    } else {
        cursor
    }
}

/// Hard allow-list for project names: `.` as the in-place sentinel, or
/// `[A-Za-z0-9_-]+` exactly. Everything else is rejected with a message.
pub fn validate_project_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("project name cannot be empty".to_string());
    }
    if name == "." {
        return Ok(());
    }
    let valid_ident = regex::Regex::new(r"^[A-Za-z0-9_-]+$").map_err(|e| e.to_string())?;
    if !valid_ident.is_match(name) {
        return Err(
            "project name must contain only letters, numbers, hyphens, and underscores"
                .to_string(),
        );
    }
    Ok(())
}
